//! sRGB transfer function
//!
//! IEC 61966-2-1 encode/decode used by the display transforms.

/// Linear segment threshold on the encoded side
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear segment threshold on the linear-light side
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB gamma decode (encoded → linear)
///
/// Converts sRGB-encoded value [0,1] to linear light [0,1].
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light [0,1] to sRGB-encoded value [0,1]. Negative input
/// stays on the linear segment, so the result is never NaN.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear > SRGB_ENCODE_THRESHOLD {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        linear * 12.92
    }
}

/// Apply [`srgb_gamma_encode`] to each channel
#[inline]
pub fn srgb_encode3(linear: [f64; 3]) -> [f64; 3] {
    linear.map(srgb_gamma_encode)
}

/// Apply [`srgb_gamma_decode`] to each channel
#[inline]
pub fn srgb_decode3(encoded: [f64; 3]) -> [f64; 3] {
    encoded.map(srgb_gamma_decode)
}
