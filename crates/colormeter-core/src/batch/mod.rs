//! Many-color operations
//!
//! - ΔE over many pairs, or many samples against one standard, in parallel
//!   with `rayon`
//! - Lab ⇄ packed sRGB buffer conversion with runtime CPU dispatch
//!
//! Results always come back in input order.

mod pixels;

pub use pixels::{active_features, labs_to_rgb8, rgb8_to_labs};

use crate::color::Lab;
use crate::difference::DifferenceFormula;
use rayon::prelude::*;

/// ΔE for every `(reference, sample)` pair
pub fn differences(formula: DifferenceFormula, pairs: &[(Lab, Lab)]) -> Vec<f64> {
    pairs
        .par_iter()
        .map(|&(reference, sample)| formula.calculate(reference, sample))
        .collect()
}

/// ΔE of every sample against a single reference
///
/// The reference is always the first argument to the formula.
pub fn differences_against(formula: DifferenceFormula, reference: Lab, samples: &[Lab]) -> Vec<f64> {
    samples
        .par_iter()
        .map(|&sample| formula.calculate(reference, sample))
        .collect()
}

/// Index and ΔE of the sample closest to `reference`, if any
pub fn closest_match(
    formula: DifferenceFormula,
    reference: Lab,
    samples: &[Lab],
) -> Option<(usize, f64)> {
    samples
        .par_iter()
        .enumerate()
        .map(|(i, &sample)| (i, formula.calculate(reference, sample)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
}
