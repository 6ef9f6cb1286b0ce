use maud::{Markup, html};

use crate::model::{NumericColumn, SeasonSummary, team_display_name};
use crate::view::pitchers::color_box::{ColorBoxOptions, render_color_box};
use crate::view::pitchers::split_bar::{SplitBarOptions, split_bar_cells};
use crate::view::pitchers::types::{AssetPaths, PitcherRowCells};
use crate::view::pitchers::winloss::{WinLossOptions, winloss_cells};

pub const TABLE_TITLE: &str = "MLB Pitcher Win-Loss Records: Skill or Luck?";
pub const SOURCE_CODE_URL: &str = "https://github.com/juleswg23/baseball";
pub const TABLE_SUBTITLE: &str = "Win-loss records are often as influenced by 'luck' (run support and team errors) as by pitcher skill (ERA).";

const LUCK_BAR_WIDTH: f64 = 225.0;
const COLUMN_COUNT: usize = 7;

/// Renders every custom cell up front, one entry per row of `table`.
#[must_use]
pub fn build_row_cells(table: &SeasonSummary) -> Vec<PitcherRowCells<'_>> {
    let luck_opts = SplitBarOptions {
        width: LUCK_BAR_WIDTH,
        ..SplitBarOptions::default()
    };
    let luck = split_bar_cells(
        &table.rows,
        (NumericColumn::TeamErrors, NumericColumn::TeamRuns),
        &luck_opts,
    );
    let winloss = winloss_cells(&table.rows, &WinLossOptions::default());
    let era_opts = ColorBoxOptions::default();

    table
        .rows
        .iter()
        .zip(winloss)
        .zip(luck)
        .map(|((row, winloss), luck)| PitcherRowCells {
            row,
            era: render_color_box(row.era, &era_opts),
            winloss,
            luck,
        })
        .collect()
}

fn render_source_note() -> Markup {
    html! {
        div class="source-note" {
            "Luck is defined here as a combination of a pitcher's own "
            span style="color:red;font-weight:bold;" { "team errors" }
            " and "
            span style="color:darkgreen;font-weight:bold;" { "run support" }
            " received during their starts. "
            a href=(SOURCE_CODE_URL) target="_blank" { "View source code on GitHub" }
        }
    }
}

#[must_use]
pub fn render_pitcher_table(table: &SeasonSummary, assets: &AssetPaths) -> Markup {
    let cells = build_row_cells(table);

    html! {
        table class="gt-table gt-theme-538" data-year=(table.year) {
            thead {
                tr class="gt-title" {
                    th colspan=(COLUMN_COUNT) { (TABLE_TITLE) }
                }
                tr class="gt-subtitle" {
                    th colspan=(COLUMN_COUNT) { (TABLE_SUBTITLE) }
                }
                tr class="gt-col-headings" {
                    th {}
                    th {}
                    th { "Pitcher" }
                    th class="center" { "ERA" }
                    th class="center" { "Record" }
                    th class="center" { "Games Started" }
                    th class="center" { "Luck" }
                }
            }
            tbody {
                @for cell in &cells {
                    tr data-team=(cell.row.team) data-pitcher=(cell.row.pitcher_id) {
                        td class="logo" {
                            img src=(assets.logo_src(&cell.row.team))
                                alt=(team_display_name(&cell.row.team)) height="30";
                        }
                        td class="headshot" {
                            img src=(assets.headshot_src(&cell.row.pitcher_id))
                                alt=(cell.row.pitcher_name) height="30";
                        }
                        td class="pitcher" { (cell.row.pitcher_name) }
                        td class="center era" { (cell.era) }
                        td class="center record" { (cell.row.record) }
                        td class="center winloss" { (cell.winloss) }
                        td class="center luck" { (cell.luck) }
                    }
                }
            }
            tfoot {
                tr {
                    td colspan=(COLUMN_COUNT) { (render_source_note()) }
                }
            }
        }
    }
}
