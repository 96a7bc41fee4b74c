//! Reference data
//!
//! - The CIEDE2000 test pairs published by Sharma, Wu & Dalal (2005)
//! - Synthetic light source profiles with known, hand-checkable behavior

use colormeter_core::color::Lab;
use colormeter_core::spectral::{
    BAND_COUNT, FilledSpectrum, IlluminantObserverProfile, Observer, ProfileTables,
};
use colormeter_core::Result;

/// One published CIEDE2000 test pair
#[derive(Debug, Clone, Copy)]
pub struct Ciede2000Case {
    /// Row number in the published table
    pub id: usize,
    /// Reference color (first argument)
    pub lab1: Lab,
    /// Sample color (second argument)
    pub lab2: Lab,
    /// ΔE00 rounded to four decimals
    pub expected: f64,
}

/// `[L1, a1, b1, L2, a2, b2, ΔE00]`
const SHARMA_TABLE: [[f64; 7]; 34] = [
    [50.0000, 2.6772, -79.7751, 50.0000, 0.0000, -82.7485, 2.0425],
    [50.0000, 3.1571, -77.2803, 50.0000, 0.0000, -82.7485, 2.8615],
    [50.0000, 2.8361, -74.0200, 50.0000, 0.0000, -82.7485, 3.4412],
    [50.0000, -1.3802, -84.2814, 50.0000, 0.0000, -82.7485, 1.0000],
    [50.0000, -1.1848, -84.8006, 50.0000, 0.0000, -82.7485, 1.0000],
    [50.0000, -0.9009, -85.5211, 50.0000, 0.0000, -82.7485, 1.0000],
    [50.0000, 0.0000, 0.0000, 50.0000, -1.0000, 2.0000, 2.3669],
    [50.0000, -1.0000, 2.0000, 50.0000, 0.0000, 0.0000, 2.3669],
    [50.0000, 2.4900, -0.0010, 50.0000, -2.4900, 0.0009, 7.1792],
    [50.0000, 2.4900, -0.0010, 50.0000, -2.4900, 0.0010, 7.1792],
    [50.0000, 2.4900, -0.0010, 50.0000, -2.4900, 0.0011, 7.2195],
    [50.0000, 2.4900, -0.0010, 50.0000, -2.4900, 0.0012, 7.2195],
    [50.0000, -0.0010, 2.4900, 50.0000, 0.0009, -2.4900, 4.8045],
    [50.0000, -0.0010, 2.4900, 50.0000, 0.0010, -2.4900, 4.8045],
    [50.0000, -0.0010, 2.4900, 50.0000, 0.0011, -2.4900, 4.7461],
    [50.0000, 2.5000, 0.0000, 50.0000, 0.0000, -2.5000, 4.3065],
    [50.0000, 2.5000, 0.0000, 73.0000, 25.0000, -18.0000, 27.1492],
    [50.0000, 2.5000, 0.0000, 61.0000, -5.0000, 29.0000, 22.8977],
    [50.0000, 2.5000, 0.0000, 56.0000, -27.0000, -3.0000, 31.9030],
    [50.0000, 2.5000, 0.0000, 58.0000, 24.0000, 15.0000, 19.4535],
    [50.0000, 2.5000, 0.0000, 50.0000, 3.1736, 0.5854, 1.0000],
    [50.0000, 2.5000, 0.0000, 50.0000, 3.2972, 0.0000, 1.0000],
    [50.0000, 2.5000, 0.0000, 50.0000, 1.8634, 0.5757, 1.0000],
    [50.0000, 2.5000, 0.0000, 50.0000, 3.2592, 0.3350, 1.0000],
    [60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644],
    [63.0109, -31.0961, -5.8663, 62.8187, -29.7946, -4.0864, 1.2630],
    [61.2901, 3.7196, -5.3901, 61.4292, 2.2480, -4.9620, 1.8731],
    [35.0831, -44.1164, 3.7933, 35.0232, -40.0716, 1.5901, 1.8645],
    [22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373],
    [36.4612, 47.8580, 18.3852, 36.2715, 50.5065, 21.2231, 1.4146],
    [90.8027, -2.0831, 1.4410, 91.1528, -1.6435, 0.0447, 1.4441],
    [90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381],
    [6.7747, -0.2908, -2.4247, 5.8714, -0.0985, -2.2286, 0.6377],
    [2.0776, 0.0795, -1.1350, 0.9033, -0.0636, -0.5514, 0.9082],
];

/// All 34 published CIEDE2000 pairs
pub fn sharma_cases() -> Vec<Ciede2000Case> {
    SHARMA_TABLE
        .iter()
        .enumerate()
        .map(|(i, row)| Ciede2000Case {
            id: i + 1,
            lab1: Lab::new(row[0], row[1], row[2]),
            lab2: Lab::new(row[3], row[4], row[5]),
            expected: row[6],
        })
        .collect()
}

/// Flat illuminant and flat matching functions over all bands
///
/// A 100% reflector integrates to XYZ (100, 100, 100), which is also the
/// reference white, so it measures as Lab (100, 0, 0). Any flat (gray)
/// spectrum measures with a = b = 0.
pub fn flat_profile() -> Result<IlluminantObserverProfile> {
    IlluminantObserverProfile::new(ProfileTables {
        name: "flat".into(),
        observer: Observer::TenDegree,
        illuminant: vec![100.0; BAND_COUNT],
        x_bar: vec![1.0; BAND_COUNT],
        y_bar: vec![1.0; BAND_COUNT],
        z_bar: vec![1.0; BAND_COUNT],
        normalization: 1.0 / BAND_COUNT as f64,
        white: [100.0, 100.0, 100.0],
    })
}

fn gaussian(center: f64, width: f64) -> Vec<f64> {
    (0..BAND_COUNT)
        .map(|i| {
            let nm = FilledSpectrum::wavelength(i) as f64;
            (-0.5 * ((nm - center) / width).powi(2)).exp()
        })
        .collect()
}

/// Observer-shaped profile built from Gaussian lobes
///
/// Not a CIE standard observer, but chromatic: the x̄ lobe has a secondary
/// blue bump and the ȳ lobe peaks at 555 nm. The normalization scales a
/// perfect reflector to Y = 100 and the reference white is that reflector's
/// XYZ, so a 100% reflector measures as Lab (100, 0, 0).
pub fn gaussian_observer_profile() -> Result<IlluminantObserverProfile> {
    let illuminant: Vec<f64> = (0..BAND_COUNT).map(|i| 80.0 + i as f64).collect();
    let x_bar: Vec<f64> = gaussian(600.0, 38.0)
        .iter()
        .zip(gaussian(445.0, 20.0))
        .map(|(red, blue)| red + 0.35 * blue)
        .collect();
    let y_bar = gaussian(555.0, 42.0);
    let z_bar: Vec<f64> = gaussian(450.0, 22.0).iter().map(|v| 1.7 * v).collect();

    // Integrate a perfect reflector (r = 100%, so r · 0.01 = 1)
    let sum = |table: &[f64]| -> f64 { illuminant.iter().zip(table).map(|(s, k)| s * k).sum() };
    let (sx, sy, sz) = (sum(&x_bar), sum(&y_bar), sum(&z_bar));
    let normalization = 100.0 / sy;

    IlluminantObserverProfile::new(ProfileTables {
        name: "gaussian".into(),
        observer: Observer::TwoDegree,
        illuminant,
        x_bar,
        y_bar,
        z_bar,
        normalization,
        white: [sx * normalization, 100.0, sz * normalization],
    })
}

/// The Gaussian profile, serialized
pub fn gaussian_observer_json() -> Result<String> {
    gaussian_observer_profile()?.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharma_table_shape() {
        let cases = sharma_cases();
        assert_eq!(cases.len(), 34);
        assert_eq!(cases[0].id, 1);
        assert_eq!(cases[33].expected, 0.9082);
    }

    #[test]
    fn test_profiles_build() {
        assert_eq!(flat_profile().unwrap().name(), "flat");
        let gaussian = gaussian_observer_profile().unwrap();
        assert!((gaussian.white_point().xyz.y - 100.0).abs() < 1e-9);
        assert!(gaussian.white_point().is_usable());
    }
}
