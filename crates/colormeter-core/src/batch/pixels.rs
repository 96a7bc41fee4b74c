//! Buffer conversions between Lab and packed 8-bit sRGB
//!
//! The per-color math is the scalar display transform; `multiversion` builds
//! AVX2, SSE4.1 and NEON copies of each loop and picks one at runtime.

use crate::color::{Lab, Rgb8};
use crate::{Error, Result};
use multiversion::multiversion;

fn check_packed_len(colors: usize, packed: usize) -> Result<()> {
    if packed != colors * 3 {
        return Err(Error::InvalidInput(format!(
            "packed RGB buffer holds {packed} bytes, {colors} colors need {}",
            colors * 3
        )));
    }
    Ok(())
}

/// Convert Lab colors to packed `[r, g, b, r, g, b, ...]` bytes
///
/// # Errors
///
/// [`Error::InvalidInput`] unless `dst.len() == 3 * labs.len()`.
pub fn labs_to_rgb8(labs: &[Lab], dst: &mut [u8]) -> Result<()> {
    check_packed_len(labs.len(), dst.len())?;
    labs_to_rgb8_unchecked(labs, dst);
    Ok(())
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn labs_to_rgb8_unchecked(labs: &[Lab], dst: &mut [u8]) {
    for (lab, out) in labs.iter().zip(dst.chunks_exact_mut(3)) {
        out.copy_from_slice(&Rgb8::from_lab(*lab).to_array());
    }
}

/// Convert packed sRGB bytes to Lab (D65)
///
/// # Errors
///
/// [`Error::InvalidInput`] unless `src.len() == 3 * dst.len()`.
pub fn rgb8_to_labs(src: &[u8], dst: &mut [Lab]) -> Result<()> {
    check_packed_len(dst.len(), src.len())?;
    rgb8_to_labs_unchecked(src, dst);
    Ok(())
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn rgb8_to_labs_unchecked(src: &[u8], dst: &mut [Lab]) {
    for (rgb, out) in src.chunks_exact(3).zip(dst.iter_mut()) {
        *out = Rgb8::new(rgb[0], rgb[1], rgb[2]).to_lab();
    }
}

/// Name of the instruction set the dispatched loops run on
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labs_to_rgb8_matches_scalar() {
        let labs = [
            Lab::new(50.0, 20.0, -30.0),
            Lab::new(100.0, 500.0, 500.0),
            Lab::new(0.0, 0.0, 0.0),
        ];
        let mut packed = [0u8; 9];
        labs_to_rgb8(&labs, &mut packed).unwrap();

        for (lab, rgb) in labs.iter().zip(packed.chunks_exact(3)) {
            assert_eq!(rgb, Rgb8::from_lab(*lab).to_array());
        }
        assert_eq!(&packed[0..3], &[126, 109, 170]);
        assert_eq!(&packed[3..6], &[255, 0, 0]);
    }

    #[test]
    fn test_rgb8_to_labs_matches_scalar() {
        let packed = [255u8, 0, 0, 255, 255, 255, 0, 0, 0];
        let mut labs = [Lab::default(); 3];
        rgb8_to_labs(&packed, &mut labs).unwrap();

        assert!(labs[0].approx_eq(&Lab::new(53.2329, 80.1093, 67.2201), 1e-3));
        assert!(labs[1].approx_eq(&Rgb8::WHITE.to_lab(), 1e-12));
        assert!(labs[2].approx_eq(&Lab::new(0.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_length_mismatch() {
        let labs = [Lab::default(); 2];
        let mut short = [0u8; 5];
        assert!(labs_to_rgb8(&labs, &mut short).unwrap_err().is_invalid_input());

        let mut out = [Lab::default(); 1];
        assert!(rgb8_to_labs(&[0u8; 4], &mut out).is_err());
    }

    #[test]
    fn test_empty() {
        labs_to_rgb8(&[], &mut []).unwrap();
        rgb8_to_labs(&[], &mut []).unwrap();
    }

    #[test]
    fn test_features_reported() {
        assert!(!active_features().is_empty());
    }
}
