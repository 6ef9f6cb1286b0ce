use crate::AppError;
use crate::args::{CleanArgs, OutputFormat};
use crate::model::SummaryRequest;
use crate::mvu::pitchers::{Deps, Layout, Msg, PitcherModel};
use crate::mvu::runtime::run_pitchers;

/// Computes one table and renders it as a standalone html page or a json array of rows.
///
/// # Errors
///
/// Will return `Err` if a source file cannot be loaded or the rows fail to serialize.
pub async fn render_report(
    args: &CleanArgs,
    request: SummaryRequest,
    format: OutputFormat,
) -> Result<String, AppError> {
    let want_json = format == OutputFormat::Json;
    let mut model = PitcherModel::new(request, Layout::Standalone, want_json);
    run_pitchers(&mut model, Msg::PageLoad, Deps { args }).await?;

    if want_json {
        let rows = model.table.map(|t| t.rows).unwrap_or_default();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    model
        .markup
        .map(maud::Markup::into_string)
        .ok_or_else(|| AppError::Other("nothing was rendered".into()))
}
