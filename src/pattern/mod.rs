//! Style dispatch and pattern synthesis
//!
//! The synthesizer derives a seed, picks one of three strategies (mosaic,
//! noise tint, hand-drawn sketches), and hands back an encoded image pair,
//! falling back to flat placeholders when anything goes wrong.

/// Seeded randomness behind seed derivation and jitter
pub mod entropy;
/// Primitive placement for the hand-drawn styles
pub mod hand_drawn;
/// Style selectors and wire names
pub mod mode;
/// Dispatch, fallback policy, and result assembly
pub mod synthesizer;
/// Noise-tint rasterization
pub mod tint;
