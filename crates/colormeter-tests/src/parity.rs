//! Parity testing against the `palette` crate
//!
//! `palette` is an independent implementation of the same CIE formulas.
//! Constants differ slightly (exact rational ε and κ, full-precision sRGB
//! matrices), so comparisons carry a per-check tolerance.

use colormeter_core::color::{Lab, Rgb8, Xyz};
use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use palette::{FromColor, Srgb};
use rayon::prelude::*;
use std::fmt;

type RefLab = palette::Lab<D65, f64>;
type RefXyz = palette::Xyz<D65, f64>;

/// CIEDE2000 as computed by `palette`
pub fn reference_ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    let a = RefLab::new(lab1.l, lab1.a, lab1.b);
    let b = RefLab::new(lab2.l, lab2.a, lab2.b);
    a.difference(b)
}

/// sRGB → Lab (D65) as computed by `palette`
pub fn reference_rgb_to_lab(rgb: Rgb8) -> Lab {
    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f64>();
    let lab = RefLab::from_color(srgb);
    Lab::new(lab.l, lab.a, lab.b)
}

/// sRGB → XYZ (D65, Y = 1) as computed by `palette`
pub fn reference_rgb_to_xyz(rgb: Rgb8) -> Xyz {
    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f64>();
    let xyz = RefXyz::from_color(srgb);
    Xyz::new(xyz.x, xyz.y, xyz.z)
}

/// Lab → XYZ (D65, Y = 1) as computed by `palette`
pub fn reference_lab_to_xyz(lab: Lab) -> Xyz {
    let xyz = RefXyz::from_color(RefLab::new(lab.l, lab.a, lab.b));
    Xyz::new(xyz.x, xyz.y, xyz.z)
}

/// XYZ (D65, Y = 1) → Lab as computed by `palette`
pub fn reference_xyz_to_lab(xyz: Xyz) -> Lab {
    let lab = RefLab::from_color(RefXyz::new(xyz.x, xyz.y, xyz.z));
    Lab::new(lab.l, lab.a, lab.b)
}

/// Result of a parity run
#[derive(Debug, Clone)]
pub struct ParityResult {
    /// Name of the check
    pub test_name: String,
    /// Largest absolute error over all inputs and components
    pub max_error: f64,
    /// Mean of the per-input largest component error
    pub mean_error: f64,
    /// Inputs compared
    pub count: usize,
    /// Allowed absolute error
    pub tolerance: f64,
}

impl ParityResult {
    /// Whether every input was within tolerance
    pub fn passed(&self) -> bool {
        self.max_error <= self.tolerance
    }
}

impl fmt::Display for ParityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} inputs, max error {:.2e}, mean {:.2e} (tolerance {:.1e}) {}",
            self.test_name,
            self.count,
            self.max_error,
            self.mean_error,
            self.tolerance,
            if self.passed() { "PASS" } else { "FAIL" }
        )
    }
}

/// Run `ours` and `reference` over every input and collect the worst error
///
/// Both functions return component arrays; the error of one input is its
/// largest absolute component difference.
pub fn run_parity<T, F, R, const N: usize>(
    test_name: &str,
    inputs: &[T],
    tolerance: f64,
    ours: F,
    reference: R,
) -> ParityResult
where
    T: Sync,
    F: Fn(&T) -> [f64; N] + Sync,
    R: Fn(&T) -> [f64; N] + Sync,
{
    let errors: Vec<f64> = inputs
        .par_iter()
        .map(|input| {
            let a = ours(input);
            let b = reference(input);
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max)
        })
        .collect();

    let max_error = errors.iter().copied().fold(0.0, f64::max);
    let mean_error = if errors.is_empty() {
        0.0
    } else {
        errors.iter().sum::<f64>() / errors.len() as f64
    };

    let result = ParityResult {
        test_name: test_name.to_string(),
        max_error,
        mean_error,
        count: inputs.len(),
        tolerance,
    };
    tracing::info!("{result}");
    result
}
