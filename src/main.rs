use rusty_pitchers::args::{
    self, CleanArgs, Command, HEADSHOT_DIR, HEADSHOT_ROUTE, LOGO_DIR, LOGO_ROUTE,
};
use rusty_pitchers::controller::pitchers::{index, pitchers, render_report};
use rusty_pitchers::model::SummaryRequest;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    match args.command.clone() {
        Command::Serve { host, port } => serve(args, &host, port).await?,
        Command::Render {
            year,
            sort,
            ascending,
            show_all,
            teams,
            format,
            output,
            ..
        } => {
            let request = SummaryRequest {
                year: year.unwrap_or(args.default_year),
                sort,
                descending: !ascending,
                teams,
                show_all,
            };
            let rendered = render_report(&args, request, format).await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, rendered).await?;
                    info!("wrote {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }
    }
    Ok(())
}

async fn serve(args: CleanArgs, host: &str, port: u16) -> std::io::Result<()> {
    let logos = args.data_dir.join(LOGO_DIR);
    let headshots = args.data_dir.join(HEADSHOT_DIR);
    info!("serving {} on {host}:{port}", args.games_path.display());

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(args.clone()))
            .route("/", web::get().to(index))
            .route("/pitchers", web::get().to(pitchers))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new(&format!("/{LOGO_ROUTE}"), logos.clone()))
            .service(Files::new(&format!("/{HEADSHOT_ROUTE}"), headshots.clone()))
            .service(Files::new("/static", "./static"))
    })
    .bind((host, port))?
    .run()
    .await
}
