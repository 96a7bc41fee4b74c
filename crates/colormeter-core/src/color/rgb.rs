//! sRGB display transforms
//!
//! Lab → sRGB comes in two flavours sharing one core: the 8-bit form clamps
//! after gamma encoding and truncates, the float form clamps linear light to
//! [0, 1] before gamma and keeps full precision. Both decode Lab against the
//! fixed D65 white. sRGB → Lab is the approximate inverse; 8-bit quantization
//! and gamut clamping make exact round trips impossible.

use crate::color::lab::lab_f;
use crate::color::{D65, Lab};
use crate::math::{SRGB_TO_XYZ, XYZ_TO_SRGB, srgb_decode3, srgb_encode3};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Gamma-encoded sRGB in [0, 1] without byte quantization
    ///
    /// Linear light is clamped to [0, 1] before the transfer function.
    pub fn from_lab(lab: Lab) -> Self {
        let [r, g, b] = srgb_encode3(linear_srgb_from_lab(lab).map(|c| c.clamp(0.0, 1.0)));
        Self { r, g, b }
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// 8-bit sRGB color
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Create a new 8-bit RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Gamma-encoded 8-bit sRGB
    ///
    /// Each channel is scaled by 255, clamped to [0, 255] and truncated, so
    /// any Lab input (however far out of gamut) yields a valid byte triple.
    pub fn from_lab(lab: Lab) -> Self {
        let [r, g, b] = srgb_encode3(linear_srgb_from_lab(lab)).map(to_byte);
        Self { r, g, b }
    }

    /// Lab of this sRGB color, D65 white
    ///
    /// Uses `L* = 116·f(Y) − 16` throughout, including the dark segment.
    pub fn to_lab(&self) -> Lab {
        let encoded = self.to_array().map(|c| c as f64 / 255.0);
        let [x, y, z] = SRGB_TO_XYZ * srgb_decode3(encoded);

        let fx = lab_f(x / D65.xyz.x);
        let fy = lab_f(y / D65.xyz.y);
        let fz = lab_f(z / D65.xyz.z);

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl From<[u8; 3]> for Rgb8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_array()
    }
}

impl From<Rgb8> for Rgb {
    fn from(rgb: Rgb8) -> Self {
        Self::new(
            rgb.r as f64 / 255.0,
            rgb.g as f64 / 255.0,
            rgb.b as f64 / 255.0,
        )
    }
}

/// Shared core of both Lab → sRGB entry points: Lab → D65 XYZ → linear sRGB
#[inline]
fn linear_srgb_from_lab(lab: Lab) -> [f64; 3] {
    XYZ_TO_SRGB * lab.to_xyz().to_array()
}

/// Scale an encoded channel to a byte, clamping and truncating
#[inline]
fn to_byte(encoded: f64) -> u8 {
    // NaN saturates to 0 under `as`
    (encoded * 255.0).clamp(0.0, 255.0) as u8
}

/// Lab → 8-bit sRGB
#[inline]
pub fn lab_to_rgb(lab: Lab) -> Rgb8 {
    Rgb8::from_lab(lab)
}

/// Lab → floating-point sRGB in [0, 1]
#[inline]
pub fn lab_to_rgb_linear(lab: Lab) -> Rgb {
    Rgb::from_lab(lab)
}

/// 8-bit sRGB → Lab
#[inline]
pub fn rgb_to_lab(rgb: Rgb8) -> Lab {
    rgb.to_lab()
}
