//! Subtle noise-tint rasterization

use crate::io::configuration::{
    TINT_ALPHA_FLOOR, TINT_ALPHA_SPAN, TINT_BLUE, TINT_FREQUENCY_DIVISOR, TINT_GREEN_FLOOR,
    TINT_GREEN_SPAN,
};
use crate::noise::field::NoiseField;
use crate::render::canvas::Canvas;
use crate::render::color::Color;

/// Map a normalized noise value in [0, 1] to the pale overlay color
///
/// Red stays at maximum, green and blue sit near white with a small
/// noise-driven green variation, and alpha stays low so the texture reads as
/// an overlay rather than an opaque image.
pub fn tint_color(normalized: f64) -> Color {
    let green = (normalized * TINT_GREEN_SPAN)
        .floor()
        .clamp(0.0, f64::from(u8::MAX - TINT_GREEN_FLOOR)) as u8;
    let alpha = (normalized * TINT_ALPHA_SPAN)
        .floor()
        .clamp(0.0, f64::from(u8::MAX - TINT_ALPHA_FLOOR)) as u8;
    [
        255,
        TINT_GREEN_FLOOR + green,
        TINT_BLUE,
        TINT_ALPHA_FLOOR + alpha,
    ]
}

/// Rasterize the noise-tint overlay at the given size
///
/// Every pixel samples the field at coordinates divided by the fixed spatial
/// frequency divisor, purely as a function of the seed.
pub fn render_noise_tint(width: u32, height: u32, seed: f64) -> Canvas {
    let field = NoiseField::new(seed);
    let mut canvas = Canvas::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value = field.sample(
                f64::from(x) / TINT_FREQUENCY_DIVISOR,
                f64::from(y) / TINT_FREQUENCY_DIVISOR,
            );
            let normalized = (value + 1.0) / 2.0;
            canvas.put(x, y, tint_color(normalized));
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_color_spans_the_documented_ranges() {
        assert_eq!(tint_color(0.0), [255, 240, 250, 25]);
        assert_eq!(tint_color(1.0), [255, 255, 250, 55]);
        let mid = tint_color(0.5);
        assert_eq!(mid, [255, 247, 250, 40]);
    }

    #[test]
    fn test_tint_color_clamps_out_of_range_noise() {
        assert_eq!(tint_color(-0.2), [255, 240, 250, 25]);
        assert_eq!(tint_color(1.4), [255, 255, 250, 55]);
    }

    #[test]
    fn test_render_matches_the_field_sample() {
        let canvas = render_noise_tint(8, 8, 0.0);
        let field = NoiseField::new(0.0);
        for (x, y) in [(0, 0), (3, 5), (7, 7)] {
            let value = field.sample(f64::from(x) / 100.0, f64::from(y) / 100.0);
            let expected = tint_color((value + 1.0) / 2.0);
            assert_eq!(canvas.pixel(x, y), Some(expected));
        }
    }
}
