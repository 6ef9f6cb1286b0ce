use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::AppError;
use crate::model::{NumericColumn, SeasonSummary, SummaryRequest, TeamChoice};
use crate::view::pitchers::table::{TABLE_TITLE, render_pitcher_table};
use crate::view::pitchers::types::AssetPaths;

pub const PAGE_TITLE: &str = "MLB Pitchers Dashboard: Great Tables Contest 2025";

const STYLESHEET: &str = include_str!("../../../static/pitchers.css");

#[must_use]
pub fn render_controls(request: &SummaryRequest, choices: &[TeamChoice], years: &[i32]) -> Markup {
    html! {
        form id="controls" class="sidebar" hx-get="pitchers" hx-target="#dashboard"
            hx-trigger="change" hx-swap="innerHTML" {
            h3 { "Sort and Filter" }
            label for="sort" { "Sort by" }
            select id="sort" name="sort" {
                @for col in NumericColumn::ALL {
                    option value=(col.key()) selected[col == request.sort] { (col.label()) }
                }
            }
            label class="switch" {
                input type="hidden" name="desc" value="0";
                input type="checkbox" name="desc" value="1" checked[request.descending];
                "Descending"
            }
            label class="switch" {
                input type="hidden" name="show_all" value="0";
                input type="checkbox" name="show_all" value="1" checked[request.show_all];
                "Show all"
            }
            label for="yr" { "Year" }
            select id="yr" name="yr" {
                @for year in years {
                    option value=(year) selected[*year == request.year] { (year) }
                }
            }
            label for="teams" { "Teams" }
            select id="teams" name="teams" multiple size="10" {
                @for choice in choices {
                    option value=(choice.code)
                        selected[request.teams.is_empty() || request.teams.contains(&choice.code)] {
                        (choice.display)
                    }
                }
            }
            p class="tip" { "Tip: select one or more teams with ctrl-click or ⌘-click." }
        }
    }
}

/// Controls plus table, swapped into the index page on every change.
#[must_use]
pub fn render_dashboard(
    request: &SummaryRequest,
    choices: &[TeamChoice],
    years: &[i32],
    table: &SeasonSummary,
    assets: &AssetPaths,
) -> Markup {
    html! {
        div class="dashboard" {
            (render_controls(request, choices, years))
            div class="card" {
                (render_pitcher_table(table, assets))
            }
        }
    }
}

/// Self-contained page with the table only, for writing to a file.
#[must_use]
pub fn render_standalone_page(table: &SeasonSummary, assets: &AssetPaths) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (TABLE_TITLE) " (" (table.year) ")" }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="card" {
                    (render_pitcher_table(table, assets))
                }
            }
        }
    }
}

#[must_use]
pub fn render_error(err: &AppError) -> Markup {
    html! {
        div class="error" role="alert" {
            h3 { "Could not build the pitcher table" }
            p { (err.to_string()) }
        }
    }
}
