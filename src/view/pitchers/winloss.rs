use maud::{Markup, html};

use crate::model::{Decision, PitcherSeasonSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct WinLossOptions {
    pub width: f64,
    pub height: f64,
    pub spacing: f64,
    pub win_color: String,
    pub loss_color: String,
    pub tie_color: String,
}

impl Default for WinLossOptions {
    fn default() -> Self {
        Self {
            width: 250.0,
            height: 30.0,
            spacing: 1.5,
            win_color: "blue".to_string(),
            loss_color: "darkorange".to_string(),
            tie_color: "grey".to_string(),
        }
    }
}

/// Position of one pill: `(x, y, width, height)`.
#[must_use]
pub fn pill_geometry(
    index: usize,
    decision: Decision,
    slots: usize,
    opts: &WinLossOptions,
) -> (f64, f64, f64, f64) {
    let slots = slots.max(1) as f64;
    let bar_width = ((opts.width - opts.spacing * (slots - 1.0)) / slots).max(0.0);
    let x = index as f64 * (bar_width + opts.spacing);
    let h = opts.height;
    let (y, bar_height) = match decision {
        Decision::Win => (0.1 * h, 0.4 * h),
        Decision::Loss => (0.5 * h, 0.4 * h),
        Decision::NoDecision => (0.4 * h, 0.2 * h),
    };
    (x, y, bar_width, bar_height)
}

fn decision_color(decision: Decision, opts: &WinLossOptions) -> &str {
    match decision {
        Decision::Win => &opts.win_color,
        Decision::Loss => &opts.loss_color,
        Decision::NoDecision => &opts.tie_color,
    }
}

/// Dot plot of a decision sequence; `slots` is the longest sequence in the table.
#[must_use]
pub fn render_winloss(decisions: &[Decision], slots: usize, opts: &WinLossOptions) -> Markup {
    html! {
        div {
            svg width=(opts.width) height=(opts.height) {
                @for (idx, decision) in decisions.iter().enumerate() {
                    @let (x, y, w, h) = pill_geometry(idx, *decision, slots, opts);
                    rect x=(x) y=(y) width=(w) height=(h) rx=(w / 2.0)
                        fill=(decision_color(*decision, opts)) {}
                }
            }
        }
    }
}

#[must_use]
pub fn winloss_cells(rows: &[PitcherSeasonSummary], opts: &WinLossOptions) -> Vec<Markup> {
    let slots = rows.iter().map(|row| row.decisions.len()).max().unwrap_or(0);
    rows.iter()
        .map(|row| render_winloss(&row.decisions, slots, opts))
        .collect()
}
