use maud::{Markup, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Self = Self(0, 128, 0);
    pub const GREY: Self = Self(128, 128, 128);
    pub const RED: Self = Self(255, 0, 0);

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorBoxOptions {
    pub palette: Vec<Rgb>,
    pub domain: (f64, f64),
}

impl Default for ColorBoxOptions {
    fn default() -> Self {
        Self {
            palette: vec![Rgb::GREEN, Rgb::GREY, Rgb::RED],
            domain: (1.5, 7.5),
        }
    }
}

/// Linear interpolation through the palette stops; values outside the domain take the end colors.
#[must_use]
pub fn palette_color(value: f64, opts: &ColorBoxOptions) -> Rgb {
    let Some(first) = opts.palette.first().copied() else {
        return Rgb::GREY;
    };
    let segments = opts.palette.len() - 1;
    if segments == 0 {
        return first;
    }

    let (min_v, max_v) = opts.domain;
    let t = if max_v == min_v {
        0.5
    } else {
        ((value - min_v) / (max_v - min_v)).clamp(0.0, 1.0)
    };
    let pos = t * segments as f64;
    let idx = (pos.floor() as usize).min(segments - 1);
    let frac = pos - idx as f64;
    let (a, b) = (opts.palette[idx], opts.palette[idx + 1]);
    let lerp = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * frac).round() as u8;
    Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Color swatch followed by the value; an absent value renders nothing.
#[must_use]
pub fn render_color_box(value: Option<f64>, opts: &ColorBoxOptions) -> Markup {
    html! {
        @if let Some(v) = value {
            div class="color-box" {
                div class="color-box-swatch"
                    style=(format!("background-color: {};", palette_color(v, opts).to_hex())) {}
                span class="color-box-value" { (format!("{v:.2}")) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_ends_and_middle() {
        let opts = ColorBoxOptions::default();
        assert_eq!(palette_color(1.5, &opts), Rgb::GREEN);
        assert_eq!(palette_color(4.5, &opts), Rgb::GREY);
        assert_eq!(palette_color(7.5, &opts), Rgb::RED);
        assert_eq!(palette_color(0.2, &opts), Rgb::GREEN);
        assert_eq!(palette_color(12.0, &opts), Rgb::RED);
        assert_eq!(palette_color(3.0, &opts), Rgb(64, 128, 64));
    }

    #[test]
    fn missing_value_is_blank() {
        let opts = ColorBoxOptions::default();
        assert_eq!(render_color_box(None, &opts).into_string(), "");
        let html = render_color_box(Some(3.456), &opts).into_string();
        assert!(html.contains("3.46"));
        assert!(html.contains("#408040"));
    }
}
