//! Chroma/hue polar form of CIELAB
//!
//! Hue is reported in degrees in [0, 360). Points that sit exactly on an axis
//! get fixed angles instead of going through `atan`, so a zero `a*` never
//! reaches a division.

use crate::color::Lab;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Chroma and hue of a Lab color
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ch {
    /// Chroma, the distance from the neutral axis (≥ 0)
    pub c: f64,
    /// Hue angle in degrees, [0, 360)
    pub h: f64,
}

impl Ch {
    /// Create a new chroma/hue pair
    #[inline]
    pub const fn new(c: f64, h: f64) -> Self {
        Self { c, h }
    }

    /// Polar form of a Lab color
    ///
    /// Lightness is not part of the result; a negative L* is treated as 0.
    pub fn from_lab(lab: Lab) -> Self {
        let Lab { a, b, .. } = lab;
        let c = (a * a + b * b).sqrt();

        let h = if a == 0.0 && b > 0.0 {
            90.0
        } else if a == 0.0 && b < 0.0 {
            270.0
        } else if a >= 0.0 && b == 0.0 {
            0.0
        } else if a < 0.0 && b == 0.0 {
            180.0
        } else {
            let h = (b / a).atan() * (180.0 / PI);
            if a < 0.0 {
                h + 180.0
            } else if b < 0.0 {
                // a vanishing negative angle would otherwise round up to 360
                let wrapped = h + 360.0;
                if wrapped >= 360.0 { 0.0 } else { wrapped }
            } else {
                h
            }
        };

        Self { c, h }
    }

    /// Check if approximately equal to another chroma/hue pair
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.c - other.c).abs() < epsilon && (self.h - other.h).abs() < epsilon
    }
}

impl Lab {
    /// Chroma and hue of this color
    #[inline]
    pub fn to_ch(&self) -> Ch {
        Ch::from_lab(*self)
    }
}

/// Lab → chroma/hue
#[inline]
pub fn lab_to_ch(lab: Lab) -> Ch {
    Ch::from_lab(lab)
}
