//! Naive sRGB → CMYK separation
//!
//! Device-independent "subtractive complement" CMYK, reported as
//! percentages. No ink profile is involved.

use crate::color::Rgb8;
use serde::{Deserialize, Serialize};

/// CMYK in percent (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
    /// Key (black)
    pub k: f64,
}

impl Cmyk {
    /// Create a new CMYK value
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Separate an 8-bit sRGB color
    ///
    /// `K = 1 − max(R, G, B)`; the chromatic channels are divided by `1 − K`,
    /// which is replaced by 1.0 for pure black.
    pub fn from_rgb(rgb: Rgb8) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let k = 1.0 - r.max(g).max(b);
        let divisor = if 1.0 - k == 0.0 { 1.0 } else { 1.0 - k };

        Self {
            c: (1.0 - r - k) / divisor * 100.0,
            m: (1.0 - g - k) / divisor * 100.0,
            y: (1.0 - b - k) / divisor * 100.0,
            k: k * 100.0,
        }
    }

    /// Convert to array [c, m, y, k]
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Check if approximately equal to another CMYK value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl Rgb8 {
    /// CMYK separation of this color
    #[inline]
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_rgb(*self)
    }
}

/// 8-bit sRGB → CMYK percentages
#[inline]
pub fn rgb_to_cmyk(rgb: Rgb8) -> Cmyk {
    Cmyk::from_rgb(rgb)
}
