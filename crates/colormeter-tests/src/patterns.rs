//! Test pattern generation
//!
//! Deterministic Lab and spectral inputs for property tests and benches.

use colormeter_core::color::Lab;
use colormeter_core::spectral::{SpectralSample, WAVELENGTH_START, WAVELENGTH_STEP};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Lab pattern types
#[derive(Debug, Clone, Copy)]
pub enum LabPattern {
    /// Neutral axis from black to white
    Neutrals,
    /// Constant L and chroma, hue swept around the circle
    HueCircle {
        /// Lightness shared by every color
        l: f64,
        /// Chroma shared by every color
        chroma: f64,
    },
    /// Uniform over L ∈ [0, 100], a, b ∈ [-128, 127]
    Random(u64),
    /// Random, but every color has chroma of at least 5
    Chromatic(u64),
    /// Points sitting exactly on the a* and b* axes
    Axes,
}

/// Generate `count` Lab colors
pub fn generate_labs(pattern: LabPattern, count: usize) -> Vec<Lab> {
    match pattern {
        LabPattern::Neutrals => (0..count)
            .map(|i| Lab::new(100.0 * i as f64 / count.max(2).saturating_sub(1) as f64, 0.0, 0.0))
            .collect(),
        LabPattern::HueCircle { l, chroma } => (0..count)
            .map(|i| {
                let h = (360.0 * i as f64 / count as f64).to_radians();
                Lab::new(l, chroma * h.cos(), chroma * h.sin())
            })
            .collect(),
        LabPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count).map(|_| random_lab(&mut rng)).collect()
        }
        LabPattern::Chromatic(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut labs = Vec::with_capacity(count);
            while labs.len() < count {
                let lab = random_lab(&mut rng);
                if lab.chroma() >= 5.0 {
                    labs.push(lab);
                }
            }
            labs
        }
        LabPattern::Axes => {
            let steps = [-50.0, -5.0, 5.0, 50.0];
            steps
                .iter()
                .flat_map(|v| [Lab::new(50.0, *v, 0.0), Lab::new(50.0, 0.0, *v)])
                .cycle()
                .take(count)
                .collect()
        }
    }
}

fn random_lab(rng: &mut ChaCha8Rng) -> Lab {
    Lab::new(
        rng.gen_range(0.0..=100.0),
        rng.gen_range(-128.0..=127.0),
        rng.gen_range(-128.0..=127.0),
    )
}

/// Random Lab pairs, for formula property tests
pub fn generate_lab_pairs(seed: u64, count: usize) -> Vec<(Lab, Lab)> {
    let labs = generate_labs(LabPattern::Random(seed), count * 2);
    labs.chunks_exact(2).map(|p| (p[0], p[1])).collect()
}

/// Random sensor readings
///
/// Start wavelengths are drawn from the 10 nm grid between 360 and 420 nm,
/// lengths from 1 to 50 bands (so some overrun the 43-band layout), and
/// reflectance from 0-100%.
pub fn generate_samples(seed: u64, count: usize) -> Vec<SpectralSample> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let start = WAVELENGTH_START + WAVELENGTH_STEP * rng.gen_range(0..=6);
            let len = rng.gen_range(1..=50);
            let reflectance = (0..len).map(|_| rng.gen_range(0.0..=100.0)).collect();
            SpectralSample::new(reflectance, start)
        })
        .collect()
}

/// Flat (gray) sensor reading at `percent` reflectance over 31 bands from 400 nm
pub fn gray_sample(percent: f64) -> SpectralSample {
    SpectralSample::new(vec![percent; 31], 400)
}
