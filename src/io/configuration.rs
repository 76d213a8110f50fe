//! Pattern constants and runtime configuration defaults

// Render target dimensions shared by every style
/// Thumbnail canvas width in pixels
pub const THUMBNAIL_WIDTH: u32 = 300;
/// Thumbnail canvas height in pixels
pub const THUMBNAIL_HEIGHT: u32 = 100;
/// Full-size canvas width in pixels
pub const FULL_WIDTH: u32 = 1240;
/// Full-size canvas height in pixels
pub const FULL_HEIGHT: u32 = 1748;

// Noise-tint style
/// Spatial frequency divisor for noise sampling (smaller divisor = coarser features)
pub const TINT_FREQUENCY_DIVISOR: f64 = 100.0;
/// Minimum alpha of the tint overlay
pub const TINT_ALPHA_FLOOR: u8 = 25;
/// Noise-driven alpha span above the floor
pub const TINT_ALPHA_SPAN: f64 = 30.0;
/// Minimum green channel value of the tint overlay
pub const TINT_GREEN_FLOOR: u8 = 240;
/// Noise-driven green span above the floor
pub const TINT_GREEN_SPAN: f64 = 15.0;
/// Fixed blue channel value of the tint overlay
pub const TINT_BLUE: u8 = 250;

// Hand-drawn styles
/// Pitch between circle centers and between grid lines
pub const SKETCH_PITCH: f64 = 40.0;
/// Offset of the first circle center from the canvas edge
pub const CIRCLE_MARGIN: f64 = 20.0;
/// Diameter of placed circles
pub const CIRCLE_DIAMETER: f64 = 30.0;
/// Horizontal step between wave polyline vertices; also the wave amplitude
pub const WAVE_STEP: f64 = 20.0;

/// Circle stroke color (black at 6% opacity)
pub const CIRCLE_STROKE: [u8; 4] = [0, 0, 0, 15];
/// Circle fill color (black at 2% opacity)
pub const CIRCLE_FILL: [u8; 4] = [0, 0, 0, 5];
/// Grid line color (black at 4% opacity)
pub const GRID_STROKE: [u8; 4] = [0, 0, 0, 10];
/// Wave stroke color (black at 5% opacity)
pub const WAVE_STROKE: [u8; 4] = [0, 0, 0, 13];

// Mosaic style
/// Lattice cells along each normalized axis
pub const MOSAIC_CELLS: usize = 16;
/// Fraction of a half-cell by which interior lattice points are displaced
pub const MOSAIC_VARIANCE: f64 = 0.75;
/// Spatial frequency of the mosaic color gradient in normalized space
pub const MOSAIC_GRADIENT_FREQUENCY: f64 = 2.5;
/// Light endpoint of the mosaic color gradient
pub const MOSAIC_LIGHT: [u8; 4] = [237, 248, 177, 255];
/// Dark endpoint of the mosaic color gradient
pub const MOSAIC_DARK: [u8; 4] = [44, 127, 184, 255];

// Fallback and defaults
/// Flat fill of the fallback thumbnail placeholder
pub const FALLBACK_THUMBNAIL_FILL: &str = "#f9f9f9";
/// Flat fill of the fallback full-size placeholder
pub const FALLBACK_FULL_FILL: &str = "#ffffff";
/// Default background color for hand-drawn styles
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
