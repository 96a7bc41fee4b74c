//! Spectrum → CIE XYZ integration

use crate::color::Xyz;
use crate::spectral::{FilledSpectrum, IlluminantObserverProfile};

/// Integrate a reflectance spectrum against a profile
///
/// For each band `i`, `X += r[i] · 0.01 · S[i] · x̄[i]` (likewise Y and Z),
/// then every sum is scaled by the profile's normalization constant. Bands
/// are summed in wavelength order so results are reproducible bit for bit.
pub fn spectral_to_xyz(spectrum: &FilledSpectrum, profile: &IlluminantObserverProfile) -> Xyz {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut z = 0.0;

    for (i, reflectance) in spectrum.bands().iter().enumerate() {
        let (power, kx, ky, kz) = profile.band(i);
        let weighted = reflectance * 0.01 * power;
        x += weighted * kx;
        y += weighted * ky;
        z += weighted * kz;
    }

    Xyz::new(x, y, z) * profile.normalization()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::profile::tests::{flat_profile, flat_tables};
    use crate::spectral::{BAND_COUNT, normalize};

    #[test]
    fn test_zero_spectrum_is_black() {
        let xyz = spectral_to_xyz(&FilledSpectrum::ZERO, &flat_profile());
        assert_eq!(xyz, Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_perfect_reflector_is_white() {
        let spectrum = normalize(&[100.0; BAND_COUNT], 360).unwrap();
        let xyz = spectral_to_xyz(&spectrum, &flat_profile());
        assert!(xyz.approx_eq(&Xyz::new(100.0, 100.0, 100.0), 1e-9), "{xyz:?}");
    }

    #[test]
    fn test_single_band() {
        let mut tables = flat_tables();
        tables.x_bar = vec![0.0; BAND_COUNT];
        tables.x_bar[10] = 2.0;
        tables.normalization = 0.5;
        let profile = IlluminantObserverProfile::new(tables).unwrap();

        // 460 nm at 40%: 40 · 0.01 · 100 · 2 · 0.5
        let spectrum = normalize(&[40.0], 460).unwrap();
        let xyz = spectral_to_xyz(&spectrum, &profile);
        assert!((xyz.x - 40.0).abs() < 1e-12);
        assert!((xyz.y - 20.0).abs() < 1e-12);
        assert!((xyz.z - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_sparse_profile_ignores_missing_bands() {
        let mut tables = flat_tables();
        tables.illuminant.truncate(20);
        let profile = IlluminantObserverProfile::new(tables).unwrap();

        // Only the first 20 bands carry light
        let spectrum = normalize(&[100.0; BAND_COUNT], 360).unwrap();
        let xyz = spectral_to_xyz(&spectrum, &profile);
        let expected = 20.0 * 100.0 / BAND_COUNT as f64;
        assert!((xyz.y - expected).abs() < 1e-9);
    }
}
