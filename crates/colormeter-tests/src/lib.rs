//! # colormeter-tests
//!
//! Reference-vector and parity testing for colormeter.
//!
//! This crate provides:
//! - Published CIEDE2000 test pairs and synthetic light source profiles
//! - Accuracy summaries (`DeltaEStats`)
//! - Deterministic Lab and spectral pattern generation
//! - Parity checks against the independent `palette` crate
//!
//! ## Test Categories
//!
//! 1. **Reference vectors**: CIEDE2000 against the Sharma table
//! 2. **Pipeline properties**: band layout, white/black anchors, clamping
//! 3. **Difference properties**: identity, symmetry, guards
//! 4. **Parity**: Lab/XYZ/sRGB and CIEDE2000 against `palette`
//! 5. **Configuration**: profile JSON loading and validation

#![warn(missing_docs)]

pub mod accuracy;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_labs, compare_rgb_buffers};
pub use parity::{ParityResult, run_parity};

use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness
///
/// Filtered by `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
