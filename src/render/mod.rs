//! Raster canvas and the drawing capabilities built on it

/// RGBA canvas with compositing primitives
pub mod canvas;
/// Web color parsing
pub mod color;
/// Triangulated mosaic generation
pub mod mosaic;
/// Hand-drawn-style primitive rendering
pub mod sketch;
