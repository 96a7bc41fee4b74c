//! # colormeter - spectral colorimetry for handheld color meters
//!
//! Turns the reflectance spectrum reported by a color-measuring sensor into
//! standard color representations, and measures how far apart two colors are.
//!
//! ## Pipeline
//!
//! ```text
//! reflectance + start wavelength
//!     → 43-band spectrum        (spectral::normalize)
//!     → CIE XYZ                 (spectral::spectral_to_xyz)
//!     → CIELAB                  (color::xyz_to_lab, profile white)
//!     → CH / sRGB / CMYK        (color::lab_to_ch, lab_to_rgb, rgb_to_cmyk)
//! ```
//!
//! [`MeasuredColor`] runs every stage eagerly and keeps the results.
//! The [`difference`] module provides seven ΔE formulas behind
//! [`DifferenceFormula`].
//!
//! ## Quick Start
//!
//! ```
//! use colormeter_core::{DifferenceFormula, IlluminantObserverProfile, MeasuredColor};
//!
//! let profile = IlluminantObserverProfile::from_json(r#"{
//!     "name": "flat",
//!     "illuminant": [100.0, 100.0, 100.0, 100.0],
//!     "x_bar": [1.0, 1.0, 1.0, 1.0],
//!     "y_bar": [1.0, 1.0, 1.0, 1.0],
//!     "z_bar": [1.0, 1.0, 1.0, 1.0],
//!     "normalization": 0.25,
//!     "white": [100.0, 100.0, 100.0]
//! }"#).unwrap();
//!
//! let standard = MeasuredColor::from_reflectance(&[80.0; 4], 360, &profile).unwrap();
//! let sample = MeasuredColor::from_reflectance(&[78.0; 4], 360, &profile).unwrap();
//!
//! let de = standard.difference(&sample, DifferenceFormula::Ciede2000);
//! assert!(de > 0.0 && de < 2.0);
//! ```
//!
//! All types are immutable values and `Send + Sync`; nothing here blocks or
//! holds global state. The library emits `tracing` events and never installs
//! a subscriber.

pub mod batch;
pub mod color;
pub mod difference;
pub mod error;
pub mod math;
pub mod measurement;
pub mod spectral;

pub use color::{Ch, Cmyk, D65, Lab, Rgb, Rgb8, WhitePoint, Xyz};
pub use color::{lab_to_ch, lab_to_rgb, lab_to_rgb_linear, lab_to_xyz, rgb_to_cmyk, rgb_to_lab, xyz_to_lab};
pub use difference::{
    DifferenceFormula, delta_e_2000, delta_e_76, delta_e_94, delta_e_ch, delta_e_cmc, delta_e_uv,
    hunter_delta_e,
};
pub use error::{Error, Result};
pub use measurement::MeasuredColor;
pub use spectral::{
    BAND_COUNT, FilledSpectrum, IlluminantObserverProfile, Observer, ProfileTables,
    SpectralSample, normalize, spectral_to_xyz,
};

/// Version of colormeter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
