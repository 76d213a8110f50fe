//! Seedable gradient noise over 2-D real coordinates
//!
//! A classic simplex-style field: a seed-permuted lookup table assigns
//! pseudorandom gradient directions to lattice points, and sampling blends
//! the three surrounding triangle corners into a smooth scalar value.

/// Continuous noise field sampling
pub mod field;
/// Seed-derived permutation table construction
pub mod permutation;
