use maud::{Markup, html};

use crate::model::{NumericColumn, PitcherSeasonSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct SplitBarOptions {
    pub fill_left: String,
    pub fill_right: String,
    /// Thickness of each bar; clamped to `[0, height]` when drawn.
    pub bar_height: f64,
    pub height: f64,
    pub width: f64,
    /// `None` draws an invisible stroke.
    pub stroke_color: Option<String>,
    pub show_labels: bool,
    pub label_color: String,
    pub domain_left: (f64, f64),
    pub domain_right: (f64, f64),
}

impl Default for SplitBarOptions {
    fn default() -> Self {
        Self {
            fill_left: "red".to_string(),
            fill_right: "darkgreen".to_string(),
            bar_height: 20.0,
            height: 30.0,
            width: 100.0,
            stroke_color: None,
            show_labels: true,
            label_color: "white".to_string(),
            domain_left: (0.0, 1.5),
            domain_right: (0.0, 7.5),
        }
    }
}

impl SplitBarOptions {
    #[must_use]
    pub fn bar_thickness(&self) -> f64 {
        let mut bar_height = self.bar_height;
        if bar_height > self.height {
            bar_height = self.height;
        }
        if bar_height < 0.0 {
            bar_height = 0.0;
        }
        bar_height
    }

    #[must_use]
    pub fn stroke(&self) -> &str {
        self.stroke_color.as_deref().unwrap_or("transparent")
    }
}

/// Half-width of a bar for `value` on a linear `domain`.
///
/// Out-of-domain values are not clamped, so their bars overflow the half-width.
/// A degenerate domain (`min == max`) renders half of the full width.
#[must_use]
pub fn scale_half_width(value: f64, domain: (f64, f64), width: f64) -> f64 {
    let (min_v, max_v) = domain;
    if max_v == min_v {
        return 0.5 * width;
    }
    ((value - min_v) / (max_v - min_v)) * (width / 2.0)
}

/// Diverging bar: `left` grows left of the center line, `right` grows right of it.
#[must_use]
pub fn render_split_bar(left: f64, right: f64, opts: &SplitBarOptions) -> Markup {
    let width = opts.width;
    let height = opts.height;
    let bar_height = opts.bar_thickness();
    let center = width / 2.0;
    let left_w = scale_half_width(left, opts.domain_left, width);
    let right_w = scale_half_width(right, opts.domain_right, width);
    let bar_y = (height - bar_height) / 2.0;
    let stroke = opts.stroke();

    html! {
        div style="display: flex;" {
            svg width=(width) height=(height) {
                rect x=(center - left_w) y=(bar_y) width=(left_w) height=(bar_height)
                    fill=(opts.fill_left) stroke=(stroke) {}
                rect x=(center) y=(bar_y) width=(right_w) height=(bar_height)
                    fill=(opts.fill_right) stroke=(stroke) {}
                line x1=(center) y1="0" x2=(center) y2=(height) stroke=(stroke) stroke-width="2" {}
                @if opts.show_labels {
                    text x=((center - left_w + 5.0) as i64) y=((height / 2.0) as i64)
                        fill=(opts.label_color) font-size="12" text-anchor="start"
                        alignment-baseline="middle" { (format!("{left:.1}")) }
                    text x=((center + right_w - 5.0) as i64) y=((height / 2.0) as i64)
                        fill=(opts.label_color) font-size="12" text-anchor="end"
                        alignment-baseline="middle" { (format!("{right:.1}")) }
                }
            }
        }
    }
}

/// One split bar per row, indexed like `rows`. Rows missing either value get an empty cell.
#[must_use]
pub fn split_bar_cells(
    rows: &[PitcherSeasonSummary],
    columns: (NumericColumn, NumericColumn),
    opts: &SplitBarOptions,
) -> Vec<Markup> {
    let (col_left, col_right) = columns;
    rows.iter()
        .map(
            |row| match (col_left.value(row), col_right.value(row)) {
                (Some(left), Some(right)) => render_split_bar(left, right, opts),
                _ => html! {},
            },
        )
        .collect()
}
