//! Hand-drawn-style primitive rendering

use crate::io::error::Result;
use crate::pattern::entropy::EntropySource;
use crate::render::canvas::Canvas;
use crate::render::color::Color;
use std::f64::consts::TAU;

/// Maximum stroke segment length before subdivision, in pixels
const SEGMENT_LENGTH: f64 = 16.0;
/// Jitter applied to stroke endpoints, scaled by roughness
const ENDPOINT_JITTER: f64 = 0.4;
/// Jitter applied to interior stroke vertices, scaled by roughness
const VERTEX_JITTER: f64 = 0.9;
/// Relative radius jitter for circle vertices
const RADIUS_JITTER: f64 = 0.05;

/// Fill treatment for sketch primitives
#[derive(Clone, Copy, Debug)]
pub enum FillPattern {
    /// Flat fill of the primitive interior
    Solid,
    /// Parallel hatch lines across the interior
    Hachure {
        /// Hatch direction in degrees
        angle_degrees: f64,
        /// Spacing between hatch lines in pixels
        gap: f64,
    },
}

/// Stroke and fill styling for one primitive
#[derive(Clone, Copy, Debug)]
pub struct StrokeStyle {
    /// Stroke color
    pub stroke: Color,
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Interior fill color, if the primitive is filled
    pub fill: Option<Color>,
    /// How the interior is filled when `fill` is present
    pub fill_pattern: FillPattern,
}

impl StrokeStyle {
    /// Stroke-only style with unit width
    pub const fn stroke_only(stroke: Color) -> Self {
        Self {
            stroke,
            stroke_width: 1.0,
            fill: None,
            fill_pattern: FillPattern::Solid,
        }
    }
}

/// Renderer of intentionally imperfect, hand-drawn-looking primitives
///
/// Implementations own their jitter; callers describe ideal geometry and the
/// renderer decides how imperfect the strokes come out.
pub trait Sketcher {
    /// Draw a circle centered at (x, y) with the given diameter
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer cannot produce the primitive.
    fn circle(
        &mut self,
        canvas: &mut Canvas,
        x: f64,
        y: f64,
        diameter: f64,
        style: &StrokeStyle,
    ) -> Result<()>;

    /// Draw a line segment from (x1, y1) to (x2, y2)
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer cannot produce the primitive.
    fn line(
        &mut self,
        canvas: &mut Canvas,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: &StrokeStyle,
    ) -> Result<()>;
}

/// Default sketcher: double-pass strokes with jittered vertices
pub struct RoughSketcher {
    entropy: EntropySource,
    roughness: f64,
}

impl RoughSketcher {
    /// Sketcher drawing with the given entropy at unit roughness
    pub fn new(entropy: EntropySource) -> Self {
        Self {
            entropy,
            roughness: 1.0,
        }
    }

    /// Adjust how far strokes stray from ideal geometry
    #[must_use]
    pub const fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    /// One imperfect stroke from `from` to `to`
    ///
    /// Long segments are subdivided and every vertex is displaced, so the
    /// stroke bows and wavers instead of running straight.
    fn rough_segment(
        &mut self,
        canvas: &mut Canvas,
        from: [f64; 2],
        to: [f64; 2],
        width: f64,
        color: Color,
    ) {
        let length = (to[0] - from[0]).hypot(to[1] - from[1]);
        let steps = (length / SEGMENT_LENGTH).ceil().max(1.0) as usize;

        let mut previous = [
            from[0] + self.entropy.jitter(ENDPOINT_JITTER * self.roughness),
            from[1] + self.entropy.jitter(ENDPOINT_JITTER * self.roughness),
        ];
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let base = if step == steps {
                ENDPOINT_JITTER
            } else {
                VERTEX_JITTER
            };
            let magnitude = base * self.roughness;
            let next = [
                (to[0] - from[0]).mul_add(t, from[0]) + self.entropy.jitter(magnitude),
                (to[1] - from[1]).mul_add(t, from[1]) + self.entropy.jitter(magnitude),
            ];
            stamp_stroke(canvas, previous, next, width, color);
            previous = next;
        }
    }

    /// Two independent passes over the same ideal segment
    fn double_stroke(
        &mut self,
        canvas: &mut Canvas,
        from: [f64; 2],
        to: [f64; 2],
        width: f64,
        color: Color,
    ) {
        self.rough_segment(canvas, from, to, width, color);
        self.rough_segment(canvas, from, to, width, color);
    }

    /// Hatch a disc interior with parallel rough strokes
    fn hachure_disc(
        &mut self,
        canvas: &mut Canvas,
        cx: f64,
        cy: f64,
        radius: f64,
        angle_degrees: f64,
        gap: f64,
        color: Color,
    ) {
        let gap = gap.max(1.0);
        let angle = angle_degrees.to_radians();
        let along = [angle.cos(), angle.sin()];
        let across = [-along[1], along[0]];

        let mut offset = -radius + gap / 2.0;
        while offset < radius {
            let half_chord = radius.mul_add(radius, -(offset * offset)).sqrt();
            let mid = [
                across[0].mul_add(offset, cx),
                across[1].mul_add(offset, cy),
            ];
            let from = [
                along[0].mul_add(-half_chord, mid[0]),
                along[1].mul_add(-half_chord, mid[1]),
            ];
            let to = [
                along[0].mul_add(half_chord, mid[0]),
                along[1].mul_add(half_chord, mid[1]),
            ];
            self.rough_segment(canvas, from, to, 1.0, color);
            offset += gap;
        }
    }
}

impl Sketcher for RoughSketcher {
    fn circle(
        &mut self,
        canvas: &mut Canvas,
        x: f64,
        y: f64,
        diameter: f64,
        style: &StrokeStyle,
    ) -> Result<()> {
        let radius = diameter / 2.0;
        if radius <= 0.0 {
            return Ok(());
        }

        if let Some(fill) = style.fill {
            match style.fill_pattern {
                FillPattern::Solid => canvas.fill_disc(x, y, radius, fill),
                FillPattern::Hachure { angle_degrees, gap } => {
                    self.hachure_disc(canvas, x, y, radius, angle_degrees, gap, fill);
                }
            }
        }

        // Stroke as a jittered polygon, twice, like a pen retracing a circle
        let vertex_count = ((radius * TAU) / 8.0).ceil().clamp(8.0, 32.0) as usize;
        for _ in 0..2 {
            let mut previous: Option<[f64; 2]> = None;
            let mut first: Option<[f64; 2]> = None;
            for vertex in 0..vertex_count {
                let angle = vertex as f64 / vertex_count as f64 * TAU;
                let wobble =
                    radius + self.entropy.jitter(RADIUS_JITTER * radius * self.roughness);
                let point = [
                    angle.cos().mul_add(wobble, x),
                    angle.sin().mul_add(wobble, y),
                ];
                if let Some(prev) = previous {
                    stamp_stroke(canvas, prev, point, style.stroke_width, style.stroke);
                } else {
                    first = Some(point);
                }
                previous = Some(point);
            }
            if let (Some(last), Some(start)) = (previous, first) {
                stamp_stroke(canvas, last, start, style.stroke_width, style.stroke);
            }
        }

        Ok(())
    }

    fn line(
        &mut self,
        canvas: &mut Canvas,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: &StrokeStyle,
    ) -> Result<()> {
        self.double_stroke(
            canvas,
            [x1, y1],
            [x2, y2],
            style.stroke_width,
            style.stroke,
        );
        Ok(())
    }
}

/// Rasterize one straight piece of a stroke
///
/// Widths up to ~1.5 px draw as a hairline; wider strokes stamp discs along
/// the path at pixel spacing.
fn stamp_stroke(canvas: &mut Canvas, from: [f64; 2], to: [f64; 2], width: f64, color: Color) {
    if width <= 1.5 {
        canvas.stroke_line(from[0], from[1], to[0], to[1], color);
        return;
    }
    let length = (to[0] - from[0]).hypot(to[1] - from[1]);
    if !length.is_finite() {
        return;
    }
    let stamps = length.ceil().max(1.0) as usize;
    for stamp in 0..=stamps {
        let t = stamp as f64 / stamps as f64;
        canvas.fill_disc(
            (to[0] - from[0]).mul_add(t, from[0]),
            (to[1] - from[1]).mul_add(t, from[1]),
            width / 2.0,
            color,
        );
    }
}
