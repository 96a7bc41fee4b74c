//! Spectral input stage
//!
//! - Light source profiles (illuminant power, observer matching functions)
//! - Alignment of raw sensor reflectance onto the 43-band layout
//! - Integration into CIE XYZ

pub mod profile;
pub mod spectrum;
pub mod tristimulus;

pub use profile::{IlluminantObserverProfile, Observer, ProfileTables};
pub use spectrum::{
    BAND_COUNT, FilledSpectrum, SpectralSample, WAVELENGTH_START, WAVELENGTH_STEP, normalize,
};
pub use tristimulus::spectral_to_xyz;
