//! Reflectance spectra
//!
//! A sensor reports reflectance percentages starting at some wavelength on
//! the 10 nm grid. Everything downstream works on the canonical layout of
//! [`BAND_COUNT`] bands starting at [`WAVELENGTH_START`]; bands the sensor
//! did not cover are zero.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of bands in the canonical layout
pub const BAND_COUNT: usize = 43;

/// Wavelength of the first band, in nm
pub const WAVELENGTH_START: i32 = 360;

/// Band spacing, in nm
pub const WAVELENGTH_STEP: i32 = 10;

/// Raw reflectance as reported by the instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralSample {
    /// Reflectance per band in percent (0-100)
    pub reflectance: Vec<f64>,
    /// Wavelength of the first reported band, in nm
    pub start_wavelength: i32,
}

impl SpectralSample {
    /// Create a new sample
    pub fn new(reflectance: Vec<f64>, start_wavelength: i32) -> Self {
        Self {
            reflectance,
            start_wavelength,
        }
    }

    /// Align this sample onto the canonical band layout
    pub fn normalize(&self) -> Result<FilledSpectrum> {
        normalize(&self.reflectance, self.start_wavelength)
    }
}

/// Reflectance aligned to the canonical 43-band layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct FilledSpectrum {
    bands: [f64; BAND_COUNT],
}

impl FilledSpectrum {
    /// All-zero spectrum
    pub const ZERO: Self = Self {
        bands: [0.0; BAND_COUNT],
    };

    /// Wrap an already aligned band array
    #[inline]
    pub const fn new(bands: [f64; BAND_COUNT]) -> Self {
        Self { bands }
    }

    /// Build from a slice that must hold exactly [`BAND_COUNT`] values
    ///
    /// # Errors
    ///
    /// [`Error::BandCount`] on any other length.
    pub fn from_slice(bands: &[f64]) -> Result<Self> {
        let bands: [f64; BAND_COUNT] = bands.try_into().map_err(|_| Error::BandCount {
            expected: BAND_COUNT,
            actual: bands.len(),
        })?;
        Ok(Self { bands })
    }

    /// Reflectance per band, in band order
    #[inline]
    pub fn bands(&self) -> &[f64; BAND_COUNT] {
        &self.bands
    }

    /// Wavelength of band `index`, in nm
    #[inline]
    pub fn wavelength(index: usize) -> i32 {
        WAVELENGTH_START + WAVELENGTH_STEP * index as i32
    }

    /// Iterate `(wavelength, reflectance)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.bands
            .iter()
            .enumerate()
            .map(|(i, r)| (Self::wavelength(i), *r))
    }
}

impl Default for FilledSpectrum {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<FilledSpectrum> for Vec<f64> {
    fn from(spectrum: FilledSpectrum) -> Self {
        spectrum.bands.to_vec()
    }
}

impl TryFrom<Vec<f64>> for FilledSpectrum {
    type Error = Error;

    fn try_from(bands: Vec<f64>) -> Result<Self> {
        Self::from_slice(&bands)
    }
}

/// Pad and align raw reflectance onto the canonical band layout
///
/// The first `(start − 360) / 10` bands are zero, then `samples` in order,
/// then zeros up to [`BAND_COUNT`]. Samples that would land past the last
/// band are dropped.
///
/// # Errors
///
/// [`Error::InvalidWavelength`] if `start_wavelength` is below 360 nm or off
/// the 10 nm grid; [`Error::InvalidInput`] if a sample is not finite.
pub fn normalize(samples: &[f64], start_wavelength: i32) -> Result<FilledSpectrum> {
    let offset = start_wavelength
        .checked_sub(WAVELENGTH_START)
        .filter(|offset| *offset >= 0 && offset % WAVELENGTH_STEP == 0)
        .ok_or(Error::InvalidWavelength(start_wavelength))?;
    if let Some(i) = samples.iter().position(|r| !r.is_finite()) {
        return Err(Error::InvalidInput(format!(
            "reflectance at index {i} is not finite: {}",
            samples[i]
        )));
    }

    let pad = (offset / WAVELENGTH_STEP) as usize;
    let room = BAND_COUNT.saturating_sub(pad);
    if samples.len() > room {
        tracing::warn!(
            start_wavelength,
            samples = samples.len(),
            kept = room,
            "spectrum extends past the last band, truncating"
        );
    }

    let mut bands = [0.0; BAND_COUNT];
    for (band, value) in bands.iter_mut().skip(pad).zip(samples) {
        *band = *value;
    }
    Ok(FilledSpectrum { bands })
}
