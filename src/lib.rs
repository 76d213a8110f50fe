//! Deterministic procedural background texture synthesis
//!
//! Given a seed and a named style, produces reproducible raster textures
//! (a triangulated mosaic, a subtle gradient-noise tint, or hand-drawn
//! circle/grid/wave sketches) at a thumbnail and a full page size, encoded
//! as data URIs. When synthesis fails for any reason the caller receives a
//! flat placeholder pair instead of an error.

#![forbid(unsafe_code)]

/// Input/output operations, encoding, and error handling
pub mod io;
/// Seedable gradient noise over 2-D coordinates
pub mod noise;
/// Style dispatch and pattern synthesis
pub mod pattern;
/// Raster canvas, color parsing, sketch and mosaic rendering
pub mod render;

pub use io::error::{Result, SynthesisError};
pub use pattern::mode::{PatternMode, SketchShape};
pub use pattern::synthesizer::{PatternResult, PatternSynthesizer};
