//! Pattern style selectors and their wire names

use crate::io::error::SynthesisError;
use std::fmt;
use std::str::FromStr;

/// Sub-shape selector for the hand-drawn style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SketchShape {
    /// Circles on a fixed grid
    Circles,
    /// Evenly spaced horizontal and vertical lines
    Grid,
    /// Horizontally swept sine-wave polylines
    Waves,
}

/// Closed set of pattern styles
///
/// Selectors outside this set are rejected when parsing; they never reach
/// dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternMode {
    /// Triangulated low-poly mosaic
    Mosaic,
    /// Subtle near-white noise overlay
    NoiseTint,
    /// Hand-drawn primitives over a filled background
    HandDrawn(SketchShape),
}

impl PatternMode {
    /// Every supported mode, in display order
    pub const ALL: [Self; 5] = [
        Self::Mosaic,
        Self::NoiseTint,
        Self::HandDrawn(SketchShape::Circles),
        Self::HandDrawn(SketchShape::Grid),
        Self::HandDrawn(SketchShape::Waves),
    ];

    /// Canonical wire name of the mode
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mosaic => "mosaic",
            Self::NoiseTint => "noise-tint",
            Self::HandDrawn(SketchShape::Circles) => "hand-drawn-circles",
            Self::HandDrawn(SketchShape::Grid) => "hand-drawn-grid",
            Self::HandDrawn(SketchShape::Waves) => "hand-drawn-waves",
        }
    }
}

impl fmt::Display for PatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternMode {
    type Err = SynthesisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| SynthesisError::UnknownMode {
                value: value.to_string(),
            })
    }
}
