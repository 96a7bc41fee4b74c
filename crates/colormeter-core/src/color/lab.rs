//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! The forward transform normalizes by the white point of the measuring
//! profile. The inverse always lands in D65 XYZ, since its only consumer is
//! the sRGB display transform.

use crate::color::{D65, WhitePoint, Xyz};
use crate::{Error, Result};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// CIE linear-segment threshold, (6/29)³ to four significant digits
pub const EPSILON: f64 = 0.008856;

/// Slope of the linear segment of `f`
const LINEAR_SLOPE: f64 = 7.787;

/// Offset of the linear segment of `f`
const LINEAR_OFFSET: f64 = 16.0 / 116.0;

/// L* slope below the threshold
const KAPPA: f64 = 903.3;

/// CIELAB color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// View a flat `[L, a, b, L, a, b, ...]` buffer as Lab colors without copying
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the buffer length is not a multiple of 3.
    pub fn cast_slice(flat: &[f64]) -> Result<&[Lab]> {
        bytemuck::try_cast_slice(flat).map_err(|e| {
            Error::InvalidInput(format!(
                "Lab buffer of {} values is not a whole number of colors: {e}",
                flat.len()
            ))
        })
    }

    /// Convert from XYZ with a specific white point
    ///
    /// L* below the threshold uses the `903.3·Y` linear segment directly
    /// rather than `116·f(Y) − 16`.
    pub fn from_xyz_with_white(xyz: Xyz, white: &WhitePoint) -> Self {
        let xr = xyz.x / white.xyz.x;
        let yr = xyz.y / white.xyz.y;
        let zr = xyz.z / white.xyz.z;

        let fx = lab_f(xr);
        let fy = lab_f(yr);
        let fz = lab_f(zr);

        let l = if yr > EPSILON {
            116.0 * fy - 16.0
        } else {
            KAPPA * yr
        };

        Self {
            l,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to XYZ with the fixed D65 white point
    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_with_white(&D65)
    }

    /// Convert to XYZ with a specific white point
    pub fn to_xyz_with_white(&self, white: &WhitePoint) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * white.xyz.x,
            lab_f_inv(fy) * white.xyz.y,
            lab_f_inv(fz) * white.xyz.z,
        )
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// XYZ → Lab against a profile's reference white
#[inline]
pub fn xyz_to_lab(xyz: Xyz, white: &WhitePoint) -> Lab {
    Lab::from_xyz_with_white(xyz, white)
}

/// Lab → XYZ against the fixed D65 white
#[inline]
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    lab.to_xyz()
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
pub(crate) fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + LINEAR_OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
pub(crate) fn lab_f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > EPSILON {
        cube
    } else {
        (t - LINEAR_OFFSET) / LINEAR_SLOPE
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
