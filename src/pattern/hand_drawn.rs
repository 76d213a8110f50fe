//! Primitive placement for the hand-drawn styles

use crate::io::configuration::{
    CIRCLE_DIAMETER, CIRCLE_FILL, CIRCLE_MARGIN, CIRCLE_STROKE, GRID_STROKE, SKETCH_PITCH,
    WAVE_STEP, WAVE_STROKE,
};
use crate::io::error::Result;
use crate::pattern::mode::SketchShape;
use crate::render::canvas::Canvas;
use crate::render::sketch::{FillPattern, Sketcher, StrokeStyle};
use std::f64::consts::TAU;

/// Place the selected sub-shape onto an already-filled canvas
///
/// Placement is regular; all visual imperfection comes from the sketcher.
///
/// # Errors
///
/// Propagates any sketcher failure.
pub fn render_hand_drawn(
    canvas: &mut Canvas,
    shape: SketchShape,
    sketcher: &mut dyn Sketcher,
) -> Result<()> {
    match shape {
        SketchShape::Circles => circles(canvas, sketcher),
        SketchShape::Grid => grid(canvas, sketcher),
        SketchShape::Waves => waves(canvas, sketcher),
    }
}

/// Circles on a fixed grid with low-opacity stroke and fill
fn circles(canvas: &mut Canvas, sketcher: &mut dyn Sketcher) -> Result<()> {
    let style = StrokeStyle {
        stroke: CIRCLE_STROKE,
        stroke_width: 1.0,
        fill: Some(CIRCLE_FILL),
        fill_pattern: FillPattern::Solid,
    };
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    let mut x = CIRCLE_MARGIN;
    while x < width {
        let mut y = CIRCLE_MARGIN;
        while y < height {
            sketcher.circle(canvas, x, y, CIRCLE_DIAMETER, &style)?;
            y += SKETCH_PITCH;
        }
        x += SKETCH_PITCH;
    }
    Ok(())
}

/// Evenly pitched vertical and horizontal lines
fn grid(canvas: &mut Canvas, sketcher: &mut dyn Sketcher) -> Result<()> {
    let style = StrokeStyle::stroke_only(GRID_STROKE);
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    let mut x = 0.0;
    while x <= width {
        sketcher.line(canvas, x, 0.0, x, height, &style)?;
        x += SKETCH_PITCH;
    }
    let mut y = 0.0;
    while y <= height {
        sketcher.line(canvas, 0.0, y, width, y, &style)?;
        y += SKETCH_PITCH;
    }
    Ok(())
}

/// Sine-wave polylines swept across the canvas, segmented into strokes
fn waves(canvas: &mut Canvas, sketcher: &mut dyn Sketcher) -> Result<()> {
    let style = StrokeStyle::stroke_only(WAVE_STROKE);
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    if width <= 0.0 {
        return Ok(());
    }

    let mut baseline = 0.0;
    while baseline <= height {
        let mut points: Vec<[f64; 2]> = Vec::new();
        let mut x = 0.0;
        while x <= width {
            let wave_y = (x / width * TAU).sin().mul_add(WAVE_STEP, baseline);
            points.push([x, wave_y]);
            x += WAVE_STEP;
        }
        for pair in points.windows(2) {
            if let [from, to] = pair {
                sketcher.line(canvas, from[0], from[1], to[0], to[1], &style)?;
            }
        }
        baseline += WAVE_STEP * 2.0;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::entropy::EntropySource;
    use crate::render::sketch::RoughSketcher;

    fn darkened_pixels(canvas: &Canvas) -> usize {
        let mut count = 0;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y).is_some_and(|[r, _, _, _]| r < 255) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_each_shape_marks_a_white_canvas() {
        for shape in [SketchShape::Circles, SketchShape::Grid, SketchShape::Waves] {
            let mut canvas = Canvas::filled(120, 90, [255, 255, 255, 255]);
            let mut sketcher = RoughSketcher::new(EntropySource::with_seed(21));
            let outcome = render_hand_drawn(&mut canvas, shape, &mut sketcher);
            assert!(outcome.is_ok());
            assert!(
                darkened_pixels(&canvas) > 40,
                "{shape:?} left the canvas untouched"
            );
        }
    }

    #[test]
    fn test_zero_sized_canvas_is_harmless() {
        for shape in [SketchShape::Circles, SketchShape::Grid, SketchShape::Waves] {
            let mut canvas = Canvas::new(0, 0);
            let mut sketcher = RoughSketcher::new(EntropySource::with_seed(2));
            assert!(render_hand_drawn(&mut canvas, shape, &mut sketcher).is_ok());
        }
    }
}
