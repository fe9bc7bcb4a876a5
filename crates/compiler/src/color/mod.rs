//! Colors are stored as three RGB channels in `0..=255` plus an optional
//! alpha channel.
//!
//! A color that was written in the source (`#fff`, `rgb(0, 0, 0)`) keeps its
//! original text and is emitted exactly as written until an operation or a
//! function produces a new color. Computed colors are emitted as lowercase
//! six digit hex, or as `rgba(r, g, b, a)` when they carry an alpha channel.
//!
//! Channels are truncated, not rounded, when a computed color is written out.

use std::fmt::{self, Display};

use crate::utils::format_float;

#[derive(Debug, Clone)]
pub(crate) struct Color {
    rgb: Rgb,
    alpha: Option<f64>,
    pub(crate) format: ColorFormat,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum ColorFormat {
    /// Literal string from source text, either hex or an `rgb()`/`rgba()` call
    Literal(String),
    /// Use the most appropriate format
    Infer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgb {
    red: f64,
    green: f64,
    blue: f64,
}

/// Hue in degrees, saturation and value in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Color {
    pub fn new_rgba(red: f64, green: f64, blue: f64, alpha: Option<f64>) -> Self {
        Color {
            rgb: Rgb { red, green, blue },
            alpha,
            format: ColorFormat::Infer,
        }
    }

    /// Parse `#rgb` or `#rrggbb`. Any other length is not a color.
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(f64::from);

        let (red, green, blue) = match digits.len() {
            3 => {
                let double = |idx: usize| digits[idx..=idx].repeat(2);
                (
                    channel(&double(0))?,
                    channel(&double(1))?,
                    channel(&double(2))?,
                )
            }
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            _ => return None,
        };

        Some(Color {
            rgb: Rgb { red, green, blue },
            alpha: None,
            format: ColorFormat::Literal(text.to_owned()),
        })
    }

    /// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)` with integer channels
    pub fn from_function(text: &str) -> Option<Self> {
        let (args, arity) = if let Some(rest) = text.strip_prefix("rgba(") {
            (rest.strip_suffix(')')?, 4)
        } else if let Some(rest) = text.strip_prefix("rgb(") {
            (rest.strip_suffix(')')?, 3)
        } else {
            return None;
        };

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != arity {
            return None;
        }

        let channel = |s: &str| -> Option<f64> {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse::<f64>().ok()
        };

        let alpha = match parts.get(3) {
            Some(alpha) => Some(alpha.parse::<f64>().ok()?),
            None => None,
        };

        Some(Color {
            rgb: Rgb {
                red: channel(parts[0])?,
                green: channel(parts[1])?,
                blue: channel(parts[2])?,
            },
            alpha,
            format: ColorFormat::Literal(text.to_owned()),
        })
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.rgb.red, self.rgb.green, self.rgb.blue]
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Channels followed by alpha (1 when absent), for ordering colors
    pub fn components(&self) -> [f64; 4] {
        [
            self.rgb.red,
            self.rgb.green,
            self.rgb.blue,
            self.alpha.unwrap_or(1.0),
        ]
    }

    pub fn to_hsv(&self) -> Hsv {
        let red = self.rgb.red / 255.0;
        let green = self.rgb.green / 255.0;
        let blue = self.rgb.blue / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let chroma = max - min;

        if chroma == 0.0 {
            return Hsv {
                hue: 0.0,
                saturation: 0.0,
                value: max * 100.0,
            };
        }

        let sector = if max == red {
            (green - blue) / chroma
        } else if max == green {
            (blue - red) / chroma + 2.0
        } else {
            (red - green) / chroma + 4.0
        };

        Hsv {
            hue: (sector * 60.0).rem_euclid(360.0),
            saturation: chroma / max * 100.0,
            value: max * 100.0,
        }
    }

    pub fn from_hsv(hsv: Hsv, alpha: Option<f64>) -> Self {
        let Hsv {
            hue,
            saturation,
            value,
        } = hsv;

        if value == 0.0 {
            return Color::new_rgba(0.0, 0.0, 0.0, alpha);
        }

        let value = value / 100.0;

        if saturation == 0.0 {
            let grey = value * 255.0;
            return Color::new_rgba(grey, grey, grey, alpha);
        }

        let saturation = saturation / 100.0;
        let hue = hue.rem_euclid(360.0) / 60.0;

        let sector = hue.floor();
        let mut fraction = hue - sector;
        if sector as i64 % 2 == 0 {
            fraction = 1.0 - fraction;
        }

        let m = value * (1.0 - saturation) * 255.0;
        let n = value * (1.0 - saturation * fraction) * 255.0;
        let v = value * 255.0;

        let (red, green, blue) = match sector as i64 {
            1 => (n, v, m),
            2 => (m, v, n),
            3 => (m, n, v),
            4 => (n, m, v),
            5 => (v, m, n),
            _ => (v, n, m),
        };

        Color::new_rgba(red, green, blue, alpha)
    }

    /// Move the HSV value by `amount` percentage points, clamped to `0..=100`
    pub fn adjust_value(&self, amount: f64) -> Self {
        let mut hsv = self.to_hsv();
        hsv.value = (hsv.value + amount).clamp(0.0, 100.0);
        Color::from_hsv(hsv, self.alpha)
    }

    pub fn greyscale(&self) -> Self {
        let grey = self.rgb.red * 0.3 + self.rgb.green * 0.59 + self.rgb.blue * 0.11;
        Color::new_rgba(grey, grey, grey, self.alpha)
    }

    fn hex(&self) -> String {
        let channel = |c: f64| c.clamp(0.0, 255.0) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.rgb.red),
            channel(self.rgb.green),
            channel(self.rgb.blue)
        )
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.format {
            ColorFormat::Literal(text) => f.write_str(text),
            ColorFormat::Infer => match self.alpha {
                Some(alpha) => {
                    let channel = |c: f64| c.clamp(0.0, 255.0) as u8;
                    write!(
                        f,
                        "rgba({}, {}, {}, {})",
                        channel(self.rgb.red),
                        channel(self.rgb.green),
                        channel(self.rgb.blue),
                        format_float(alpha.clamp(0.0, 1.0))
                    )
                }
                None => f.write_str(&self.hex()),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    fn computed(color: Color) -> String {
        Color::new_rgba(
            color.channels()[0],
            color.channels()[1],
            color.channels()[2],
            color.alpha(),
        )
        .to_string()
    }

    #[test]
    fn short_hex_doubles_each_digit() {
        let color = Color::from_hex("#f0a").unwrap();
        assert_eq!(color.channels(), [255.0, 0.0, 170.0]);
        assert_eq!(color.to_string(), "#f0a");
    }

    #[test]
    fn four_digit_hex_is_not_a_color() {
        assert!(Color::from_hex("#abcd").is_none());
        assert!(Color::from_hex("#ggg").is_none());
    }

    #[test]
    fn rgba_literal_allows_decimal_alpha() {
        let color = Color::from_function("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(color.alpha(), Some(0.5));
        assert_eq!(computed(color), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn rgb_rejects_wrong_arity() {
        assert!(Color::from_function("rgb(1, 2)").is_none());
        assert!(Color::from_function("rgba(1, 2, 3)").is_none());
    }

    #[test]
    fn hue_is_never_negative() {
        let hsv = Color::from_hex("#ff0080").unwrap().to_hsv();
        assert!(hsv.hue >= 0.0 && hsv.hue < 360.0);
    }

    #[test]
    fn value_adjustment_truncates_channels() {
        let grey = Color::from_hex("#808080").unwrap();
        assert_eq!(grey.adjust_value(10.0).to_string(), "#999999");
    }

    #[test]
    fn darkening_a_primary_keeps_its_hue() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(red.adjust_value(-20.0).to_string(), "#cc0000");
    }
}
