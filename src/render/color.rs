//! Web color string parsing

use crate::io::error::{Result, invalid_color};

/// RGBA color with 8-bit channels, straight (non-premultiplied) alpha
pub type Color = [u8; 4];

/// Parse a web color string into RGBA
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)` with the alpha component as a fraction in [0, 1].
///
/// # Errors
///
/// Returns an error if the string matches none of the accepted syntaxes or a
/// component is out of range.
pub fn parse_web_color(value: &str) -> Result<Color> {
    let trimmed = value.trim();

    if let Some(digits) = trimmed.strip_prefix('#') {
        return parse_hex(digits, value);
    }
    if let Some(body) = trimmed
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_components(body, true, value);
    }
    if let Some(body) = trimmed
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_components(body, false, value);
    }

    Err(invalid_color(
        value.to_string(),
        "expected a #hex, rgb() or rgba() color",
    ))
}

fn parse_hex(digits: &str, original: &str) -> Result<Color> {
    let expand = |nibble: u8| nibble << 4 | nibble;

    match digits.len() {
        3 | 4 => {
            let mut channels = [0, 0, 0, 255];
            for (slot, digit) in channels.iter_mut().zip(digits.chars()) {
                let nibble = digit
                    .to_digit(16)
                    .ok_or_else(|| invalid_color(original.to_string(), "invalid hex digit"))?;
                *slot = expand(nibble as u8);
            }
            Ok(channels)
        }
        6 | 8 => {
            let mut channels = [0, 0, 0, 255];
            let bytes = digits.as_bytes();
            for (index, slot) in channels.iter_mut().enumerate().take(digits.len() / 2) {
                let pair = bytes
                    .get(index * 2..index * 2 + 2)
                    .and_then(|pair| std::str::from_utf8(pair).ok())
                    .ok_or_else(|| invalid_color(original.to_string(), "invalid hex digit"))?;
                *slot = u8::from_str_radix(pair, 16)
                    .map_err(|_| invalid_color(original.to_string(), "invalid hex digit"))?;
            }
            Ok(channels)
        }
        _ => Err(invalid_color(
            original.to_string(),
            "hex colors need 3, 4, 6 or 8 digits",
        )),
    }
}

fn parse_components(body: &str, with_alpha: bool, original: &str) -> Result<Color> {
    let expected = if with_alpha { 4 } else { 3 };
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(invalid_color(
            original.to_string(),
            "wrong number of color components",
        ));
    }

    let mut channels = [0, 0, 0, 255];
    for (slot, part) in channels.iter_mut().zip(parts.iter().take(3)) {
        *slot = part
            .parse::<u8>()
            .map_err(|_| invalid_color(original.to_string(), "channel must be an integer 0-255"))?;
    }

    if with_alpha {
        let alpha: f64 = parts
            .get(3)
            .and_then(|part| part.parse().ok())
            .ok_or_else(|| invalid_color(original.to_string(), "alpha must be a number"))?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid_color(
                original.to_string(),
                "alpha must lie in [0, 1]",
            ));
        }
        if let Some(slot) = channels.get_mut(3) {
            *slot = (alpha * 255.0).round() as u8;
        }
    }

    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms_parse() {
        assert_eq!(parse_web_color("#ffffff").ok(), Some([255, 255, 255, 255]));
        assert_eq!(parse_web_color("#f9f9f9").ok(), Some([249, 249, 249, 255]));
        assert_eq!(parse_web_color("#fff").ok(), Some([255, 255, 255, 255]));
        assert_eq!(parse_web_color("#8004").ok(), Some([136, 0, 0, 68]));
        assert_eq!(parse_web_color("#11223344").ok(), Some([17, 34, 51, 68]));
    }

    #[test]
    fn test_functional_forms_parse() {
        assert_eq!(parse_web_color("rgb(1, 2, 3)").ok(), Some([1, 2, 3, 255]));
        assert_eq!(
            parse_web_color("rgba(0, 0, 0, 0.06)").ok(),
            Some([0, 0, 0, 15])
        );
        assert_eq!(
            parse_web_color(" rgba(255, 240, 250, 1) ").ok(),
            Some([255, 240, 250, 255])
        );
    }

    #[test]
    fn test_malformed_colors_are_rejected() {
        for bad in ["", "white-ish", "#ggg", "#12345", "rgb(1,2)", "rgba(1,2,3,7)"] {
            assert!(parse_web_color(bad).is_err(), "accepted {bad:?}");
        }
    }
}
