use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, Responder};
use tracing::{info, warn};

use crate::args::CleanArgs;
use crate::mvu::pitchers::{Deps, Msg, decode_request_to_model};
use crate::mvu::runtime::run_pitchers;
use crate::view::index::render_index_template;
use crate::view::pitchers::render_error;

fn error_response(err: &crate::AppError) -> HttpResponse {
    let body = render_error(err).into_string();
    if err.is_bad_request() {
        HttpResponse::BadRequest().content_type("text/html").body(body)
    } else {
        HttpResponse::InternalServerError()
            .content_type("text/html")
            .body(body)
    }
}

pub async fn index(req: HttpRequest) -> impl Responder {
    let markup = render_index_template(req.query_string());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn pitchers(
    query: web::Query<Vec<(String, String)>>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let args = args.get_ref();

    let mut model = match decode_request_to_model(&query, args) {
        Ok(model) => model,
        Err(e) => {
            warn!("rejected pitchers request: {e}");
            return error_response(&e);
        }
    };

    if let Err(e) = run_pitchers(&mut model, Msg::PageLoad, Deps { args }).await {
        warn!("pitchers request for {} failed: {e}", model.request.year);
        return error_response(&e);
    }

    if model.want_json {
        let rows = model.table.map(|t| t.rows).unwrap_or_default();
        return HttpResponse::Ok().json(rows);
    }

    match model.markup {
        Some(markup) => {
            info!(
                "rendered {} pitchers for {}",
                model.table.as_ref().map_or(0, |t| t.len()),
                model.request.year
            );
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        None => error_response(&crate::AppError::Other("nothing was rendered".into())),
    }
}
