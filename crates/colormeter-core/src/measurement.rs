//! A fully evaluated measurement
//!
//! [`MeasuredColor`] runs the whole pipeline once, eagerly:
//! reflectance → 43-band spectrum → XYZ → Lab → CH / sRGB → CMYK.
//! The result is immutable and keeps no reference to the profile it was
//! measured under.

use crate::color::{Ch, Cmyk, Lab, Rgb8, Xyz};
use crate::difference::DifferenceFormula;
use crate::spectral::{
    FilledSpectrum, IlluminantObserverProfile, SpectralSample, normalize, spectral_to_xyz,
};
use crate::Result;
use serde::Serialize;

/// One measurement and every representation derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredColor {
    spectrum: FilledSpectrum,
    xyz: Xyz,
    lab: Lab,
    ch: Ch,
    rgb: Rgb8,
    cmyk: Cmyk,
}

impl MeasuredColor {
    /// Evaluate a sensor sample under a light source profile
    ///
    /// # Errors
    ///
    /// Fails with an invalid-input error if the sample's start wavelength is
    /// off the band grid or a reflectance value is not finite.
    pub fn new(sample: &SpectralSample, profile: &IlluminantObserverProfile) -> Result<Self> {
        Self::from_reflectance(&sample.reflectance, sample.start_wavelength, profile)
    }

    /// Evaluate raw reflectance percentages starting at `start_wavelength` nm
    pub fn from_reflectance(
        reflectance: &[f64],
        start_wavelength: i32,
        profile: &IlluminantObserverProfile,
    ) -> Result<Self> {
        let spectrum = normalize(reflectance, start_wavelength)?;
        let color = Self::from_spectrum(spectrum, profile);
        tracing::debug!(
            start_wavelength,
            bands = reflectance.len(),
            profile = profile.name(),
            l = color.lab.l,
            a = color.lab.a,
            b = color.lab.b,
            "measured color"
        );
        Ok(color)
    }

    /// Evaluate an already aligned spectrum
    pub fn from_spectrum(spectrum: FilledSpectrum, profile: &IlluminantObserverProfile) -> Self {
        let xyz = spectral_to_xyz(&spectrum, profile);
        let lab = Lab::from_xyz_with_white(xyz, profile.white_point());
        let ch = Ch::from_lab(lab);
        let rgb = Rgb8::from_lab(lab);
        let cmyk = Cmyk::from_rgb(rgb);
        Self {
            spectrum,
            xyz,
            lab,
            ch,
            rgb,
            cmyk,
        }
    }

    /// Aligned reflectance bands
    pub fn spectrum(&self) -> &FilledSpectrum {
        &self.spectrum
    }

    /// Tristimulus values, in the profile's scale
    pub fn xyz(&self) -> Xyz {
        self.xyz
    }

    /// CIELAB relative to the profile's reference white
    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// Chroma and hue
    pub fn ch(&self) -> Ch {
        self.ch
    }

    /// Display sRGB
    pub fn rgb(&self) -> Rgb8 {
        self.rgb
    }

    /// Naive CMYK separation of [`rgb`](Self::rgb)
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// ΔE from this color (the reference) to `other`
    pub fn difference(&self, other: &MeasuredColor, formula: DifferenceFormula) -> f64 {
        formula.calculate(self.lab, other.lab)
    }
}
