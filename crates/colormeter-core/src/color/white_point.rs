//! Reference white points
//!
//! A white point is the XYZ of the perfect diffuse reflector under a given
//! illuminant. The forward XYZ → Lab transform normalizes by the white point
//! of the measuring profile; the display transforms use the fixed [`D65`]
//! white regardless of the profile that produced the Lab value.

use crate::color::Xyz;
use serde::{Deserialize, Serialize};

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhitePoint {
    /// CIE XYZ coordinates, in whatever scale the producer uses
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: Xyz::new(x, y, z),
        }
    }

    /// True when every component is finite and strictly positive, i.e. the
    /// white point can be divided by.
    pub fn is_usable(&self) -> bool {
        self.xyz
            .to_array()
            .iter()
            .all(|c| c.is_finite() && *c > 0.0)
    }
}

/// CIE Standard Illuminant D65, 2° observer, Y normalized to 1.0
///
/// Fixed reference for Lab → XYZ and the sRGB transforms.
pub const D65: WhitePoint = WhitePoint::new(0.95047, 1.0, 1.08883);
