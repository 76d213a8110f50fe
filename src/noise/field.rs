//! Seedable 2-D simplex noise field

use crate::noise::permutation::PermutationTable;

/// Skew factor for mapping square coordinates onto the triangular lattice
const F2: f64 = 0.366_025_403_784_438_65; // (sqrt(3) - 1) / 2
/// Unskew factor for mapping lattice coordinates back to square space
const G2: f64 = 0.211_324_865_405_187_13; // (3 - sqrt(3)) / 6
/// Scale bringing the summed corner contributions into [-1, 1]
const NORMALIZATION: f64 = 70.0;

/// Deterministic, continuous, band-limited scalar field over 2-D coordinates
///
/// Sampling is purely a function of the owned permutation table and the
/// coordinates; no state is mutated between calls, so a built field is safe
/// to share for concurrent reads.
pub struct NoiseField {
    table: PermutationTable,
}

impl NoiseField {
    /// Create a field for the given seed
    pub fn new(seed: f64) -> Self {
        Self {
            table: PermutationTable::build(seed),
        }
    }

    /// Replace the permutation table with one derived from a new seed
    ///
    /// Idempotent for the same seed.
    pub fn reseed(&mut self, seed: f64) {
        self.table = PermutationTable::build(seed);
    }

    /// Sample the field at a real-valued coordinate, returning a value in
    /// approximately [-1, 1]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew to find the surrounding lattice cell
        let s = (x + y) * F2;
        let i = lattice_floor(x + s);
        let j = lattice_floor(y + s);
        let t = (i + j) as f64 * G2;

        // Distances from the cell origin in unskewed space
        let x0 = x - i as f64 + t;
        let y0 = y - j as f64 + t;

        // The lower triangle steps through (1, 0), the upper through (0, 1)
        let (i1, j1) = if x0 > y0 { (1_i64, 0_i64) } else { (0_i64, 1_i64) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let g0 = self.table.gradient(ii + self.table.permuted(jj));
        let g1 = self
            .table
            .gradient(ii + i1 as usize + self.table.permuted(jj + j1 as usize));
        let g2 = self.table.gradient(ii + 1 + self.table.permuted(jj + 1));

        let n0 = corner_contribution(x0, y0, g0);
        let n1 = corner_contribution(x1, y1, g1);
        let n2 = corner_contribution(x2, y2, g2);

        NORMALIZATION * (n0 + n1 + n2)
    }
}

/// Radial falloff times the gradient dot product for one simplex corner
fn corner_contribution(dx: f64, dy: f64, gradient: [f64; 2]) -> f64 {
    let t = dx.mul_add(-dx, dy.mul_add(-dy, 0.5));
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        let [gx, gy] = gradient;
        t2 * t2 * gx.mul_add(dx, gy * dy)
    }
}

/// Floor to the containing lattice line, consistent for negative inputs
fn lattice_floor(value: f64) -> i64 {
    value.floor() as i64
}
