//! Color difference (ΔE) formulas
//!
//! Every formula is a pure function of two [`Lab`] values returning a
//! non-negative distance. CMC and CIE94 weight the difference by the first
//! color, so callers must keep the reference color first.
//!
//! ```
//! use colormeter_core::color::Lab;
//! use colormeter_core::difference::DifferenceFormula;
//!
//! let standard = Lab::new(50.0, 2.6772, -79.7751);
//! let sample = Lab::new(50.0, 0.0, -82.7485);
//! let de = DifferenceFormula::Ciede2000.calculate(standard, sample);
//! assert!((de - 2.0425).abs() < 1e-3);
//! ```

pub mod ciede2000;
pub mod euclidean;
pub mod weighted;

pub use ciede2000::delta_e_2000;
pub use euclidean::{delta_e_76, delta_e_uv, hunter_delta_e};
pub use weighted::{delta_e_94, delta_e_ch, delta_e_cmc};

use crate::color::Lab;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported ΔE formulas
///
/// The discriminants are stable wire codes (see the `TryFrom<u8>` impl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DifferenceFormula {
    /// CIE 1976 ΔE*ab
    Cie76 = 0,
    /// Chroma/hue ΔE, lightness ignored
    Ch = 1,
    /// CIEDE2000 ΔE*00
    #[default]
    Ciede2000 = 2,
    /// CMC(2:1)
    Cmc = 3,
    /// CIE 1994 ΔE*94
    Cie94 = 4,
    /// Hunter ΔE
    Hunter = 5,
    /// Approximate ΔE(uv)
    Uv = 6,
}

impl DifferenceFormula {
    /// Every formula, in wire-code order
    pub const ALL: [DifferenceFormula; 7] = [
        Self::Cie76,
        Self::Ch,
        Self::Ciede2000,
        Self::Cmc,
        Self::Cie94,
        Self::Hunter,
        Self::Uv,
    ];

    /// Compute ΔE between a reference color and a sample
    #[inline]
    pub fn calculate(self, reference: Lab, sample: Lab) -> f64 {
        match self {
            Self::Cie76 => delta_e_76(reference, sample),
            Self::Ch => delta_e_ch(reference, sample),
            Self::Ciede2000 => delta_e_2000(reference, sample),
            Self::Cmc => delta_e_cmc(reference, sample),
            Self::Cie94 => delta_e_94(reference, sample),
            Self::Hunter => hunter_delta_e(reference, sample),
            Self::Uv => delta_e_uv(reference, sample),
        }
    }

    /// Short identifier, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cie76 => "cie76",
            Self::Ch => "ch",
            Self::Ciede2000 => "ciede2000",
            Self::Cmc => "cmc",
            Self::Cie94 => "cie94",
            Self::Hunter => "hunter",
            Self::Uv => "uv",
        }
    }

    /// Conventional label for reports
    pub fn label(self) -> &'static str {
        match self {
            Self::Cie76 => "ΔE*ab",
            Self::Ch => "ΔE CH",
            Self::Ciede2000 => "ΔE*00",
            Self::Cmc => "ΔE CMC(2:1)",
            Self::Cie94 => "ΔE*94",
            Self::Hunter => "Hunter ΔE",
            Self::Uv => "ΔE uv",
        }
    }

    /// Wire code
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether swapping the arguments can change the result
    pub fn is_directional(self) -> bool {
        matches!(self, Self::Cmc | Self::Cie94)
    }
}

impl TryFrom<u8> for DifferenceFormula {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| Error::InvalidInput(format!("unknown difference formula code {code}")))
    }
}

impl FromStr for DifferenceFormula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidInput(format!("unknown difference formula '{s}'")))
    }
}

impl fmt::Display for DifferenceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
