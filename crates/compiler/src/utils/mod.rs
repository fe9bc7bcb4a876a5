pub(crate) use strings::*;

mod strings;

const PRECISION: i32 = 10;

fn epsilon() -> f64 {
    10.0_f64.powi(-PRECISION - 1)
}

fn inverse_epsilon() -> f64 {
    10.0_f64.powi(PRECISION + 1)
}

pub(crate) fn fuzzy_equals(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }

    (a - b).abs() <= epsilon() && (a * inverse_epsilon()).round() == (b * inverse_epsilon()).round()
}

/// Round half away from zero to `places` decimal places
pub(crate) fn round_to(number: f64, places: i32) -> f64 {
    if places <= 0 {
        return number.round();
    }

    let factor = 10.0_f64.powi(places);
    (number * factor).round() / factor
}

/// Write a number with at most ten decimal places and no trailing zeros
pub(crate) fn format_float(float: f64) -> String {
    if float.is_infinite() && float.is_sign_negative() {
        return "-Infinity".to_owned();
    } else if float.is_infinite() {
        return "Infinity".to_owned();
    } else if float.is_nan() {
        return "NaN".to_owned();
    }

    let mut buffer = String::with_capacity(3);

    if float < 0.0 {
        buffer.push('-');
    }

    buffer.push_str(
        format!("{:.10}", float.abs())
            .trim_end_matches('0')
            .trim_end_matches('.'),
    );

    if buffer.is_empty() || buffer == "-" || buffer == "-0" {
        buffer = "0".to_owned();
    }

    buffer
}

/// The numeric prefix of `s`, or `0` when it has none
pub(crate) fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }

    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    s[..end].parse().unwrap_or(0.0)
}
