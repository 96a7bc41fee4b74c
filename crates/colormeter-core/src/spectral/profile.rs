//! Illuminant / standard observer profiles
//!
//! A profile bundles everything needed to turn a reflectance spectrum into
//! tristimulus values: the relative spectral power of the light source, the
//! X/Y/Z color matching functions of the observer, a normalization constant,
//! and the reference white used for Lab.
//!
//! Profiles are validated once at construction and never mutated. Share one
//! by reference (or `Arc`) across threads.
//!
//! # Loading from JSON
//!
//! ```
//! use colormeter_core::spectral::IlluminantObserverProfile;
//!
//! let json = r#"{
//!     "name": "flat",
//!     "observer": "ten_degree",
//!     "illuminant": [100.0, 100.0, 100.0],
//!     "x_bar": [1.0, 1.0, 1.0],
//!     "y_bar": [1.0, 1.0, 1.0],
//!     "z_bar": [1.0, 1.0, 1.0],
//!     "normalization": 0.3333333333333333,
//!     "white": [100.0, 100.0, 100.0]
//! }"#;
//! let profile = IlluminantObserverProfile::from_json(json).unwrap();
//! assert_eq!(profile.name(), "flat");
//! ```

use crate::color::WhitePoint;
use crate::spectral::BAND_COUNT;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Standard observer field of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observer {
    /// CIE 1931 2° standard observer
    TwoDegree,
    /// CIE 1964 10° supplementary standard observer
    #[default]
    TenDegree,
}

impl Observer {
    /// Field of view in degrees
    pub fn degrees(&self) -> u8 {
        match self {
            Self::TwoDegree => 2,
            Self::TenDegree => 10,
        }
    }
}

/// Unvalidated profile data, the serialized form of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTables {
    /// Illuminant name, e.g. "D65"
    pub name: String,
    /// Observer the matching functions belong to
    #[serde(default)]
    pub observer: Observer,
    /// Relative spectral power per band
    pub illuminant: Vec<f64>,
    /// x̄ color matching function per band
    pub x_bar: Vec<f64>,
    /// ȳ color matching function per band
    pub y_bar: Vec<f64>,
    /// z̄ color matching function per band
    pub z_bar: Vec<f64>,
    /// Scale applied to the integrated sums
    pub normalization: f64,
    /// Reference white XYZ for the Lab transform
    pub white: [f64; 3],
}

/// A validated, immutable illuminant/observer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileTables", into = "ProfileTables")]
pub struct IlluminantObserverProfile {
    name: String,
    observer: Observer,
    illuminant: Vec<f64>,
    x_bar: Vec<f64>,
    y_bar: Vec<f64>,
    z_bar: Vec<f64>,
    normalization: f64,
    white: WhitePoint,
}

impl IlluminantObserverProfile {
    /// Validate tables and build a profile
    ///
    /// Tables may be shorter than [`BAND_COUNT`]; missing bands contribute
    /// nothing to the tristimulus sums.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProfile`] if a table is longer than [`BAND_COUNT`] or
    /// holds a non-finite value, if the normalization is not finite, or if a
    /// reference white component is not finite and positive.
    pub fn new(tables: ProfileTables) -> Result<Self> {
        let ProfileTables {
            name,
            observer,
            illuminant,
            x_bar,
            y_bar,
            z_bar,
            normalization,
            white,
        } = tables;

        for (label, table) in [
            ("illuminant", &illuminant),
            ("x_bar", &x_bar),
            ("y_bar", &y_bar),
            ("z_bar", &z_bar),
        ] {
            if table.len() > BAND_COUNT {
                return Err(Error::InvalidProfile(format!(
                    "{label} has {} bands, at most {BAND_COUNT} allowed",
                    table.len()
                )));
            }
            if table.iter().any(|v| !v.is_finite()) {
                return Err(Error::InvalidProfile(format!(
                    "{label} contains a non-finite value"
                )));
            }
        }
        if !normalization.is_finite() {
            return Err(Error::InvalidProfile(format!(
                "normalization must be finite, got {normalization}"
            )));
        }
        let white = WhitePoint::new(white[0], white[1], white[2]);
        if !white.is_usable() {
            return Err(Error::InvalidProfile(format!(
                "reference white must be finite and positive, got {:?}",
                white.xyz.to_array()
            )));
        }

        Ok(Self {
            name,
            observer,
            illuminant,
            x_bar,
            y_bar,
            z_bar,
            normalization,
            white,
        })
    }

    /// Parse and validate a profile from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: ProfileTables = serde_json::from_str(json)?;
        Self::loaded(tables)
    }

    /// Parse and validate a profile from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let tables: ProfileTables = serde_json::from_reader(reader)?;
        Self::loaded(tables)
    }

    fn loaded(tables: ProfileTables) -> Result<Self> {
        let profile = Self::new(tables)?;
        tracing::debug!(
            name = profile.name(),
            observer = profile.observer.degrees(),
            "loaded light source profile"
        );
        Ok(profile)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Illuminant name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observer the matching functions belong to
    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// Scale applied to the integrated sums
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    /// Reference white for the Lab transform
    pub fn white_point(&self) -> &WhitePoint {
        &self.white
    }

    /// `(power, x̄, ȳ, z̄)` for one band; bands past the end of a table read
    /// as zero.
    #[inline]
    pub fn band(&self, index: usize) -> (f64, f64, f64, f64) {
        let at = |table: &[f64]| table.get(index).copied().unwrap_or(0.0);
        (
            at(&self.illuminant),
            at(&self.x_bar),
            at(&self.y_bar),
            at(&self.z_bar),
        )
    }
}

impl TryFrom<ProfileTables> for IlluminantObserverProfile {
    type Error = Error;

    fn try_from(tables: ProfileTables) -> Result<Self> {
        Self::new(tables)
    }
}

impl From<IlluminantObserverProfile> for ProfileTables {
    fn from(profile: IlluminantObserverProfile) -> Self {
        Self {
            name: profile.name,
            observer: profile.observer,
            illuminant: profile.illuminant,
            x_bar: profile.x_bar,
            y_bar: profile.y_bar,
            z_bar: profile.z_bar,
            normalization: profile.normalization,
            white: profile.white.xyz.to_array(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Flat illuminant and flat matching functions over every band, scaled so
    /// a 100% reflector integrates to (100, 100, 100).
    pub(crate) fn flat_tables() -> ProfileTables {
        ProfileTables {
            name: "flat".into(),
            observer: Observer::TenDegree,
            illuminant: vec![100.0; BAND_COUNT],
            x_bar: vec![1.0; BAND_COUNT],
            y_bar: vec![1.0; BAND_COUNT],
            z_bar: vec![1.0; BAND_COUNT],
            normalization: 1.0 / BAND_COUNT as f64,
            white: [100.0, 100.0, 100.0],
        }
    }

    pub(crate) fn flat_profile() -> IlluminantObserverProfile {
        IlluminantObserverProfile::new(flat_tables()).unwrap()
    }

    #[test]
    fn test_valid_profile() {
        let profile = flat_profile();
        assert_eq!(profile.name(), "flat");
        assert_eq!(profile.observer().degrees(), 10);
        assert_eq!(profile.band(0), (100.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_short_tables_read_as_zero() {
        let mut tables = flat_tables();
        tables.z_bar.truncate(40);
        let profile = IlluminantObserverProfile::new(tables).unwrap();
        assert_eq!(profile.band(39).3, 1.0);
        assert_eq!(profile.band(40).3, 0.0);
        assert_eq!(profile.band(42), (100.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_overlong_table_rejected() {
        let mut tables = flat_tables();
        tables.x_bar.push(0.5);
        let err = IlluminantObserverProfile::new(tables).unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)));
        assert!(err.to_string().contains("x_bar"));
    }

    #[test]
    fn test_bad_white_rejected() {
        let mut tables = flat_tables();
        tables.white = [94.8, 0.0, 107.3];
        assert!(matches!(
            IlluminantObserverProfile::new(tables),
            Err(Error::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut tables = flat_tables();
        tables.normalization = f64::INFINITY;
        assert!(IlluminantObserverProfile::new(tables).is_err());

        let mut tables = flat_tables();
        tables.illuminant[3] = f64::NAN;
        assert!(IlluminantObserverProfile::new(tables).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let profile = flat_profile();
        let json = profile.to_json().unwrap();
        let back = IlluminantObserverProfile::from_json(&json).unwrap();
        assert_eq!(back, profile);
        let again = IlluminantObserverProfile::from_reader(json.as_bytes()).unwrap();
        assert_eq!(again, profile);
    }

    #[test]
    fn test_json_roundtrip_is_bit_exact() {
        // Shortest round-trip digits that a fast float parser misreads by one ulp
        let mut tables = flat_tables();
        tables.x_bar[4] = 0.02784679374857675;
        tables.normalization = 0.1 + 0.2;
        let profile = IlluminantObserverProfile::new(tables).unwrap();

        let json = profile.to_json().unwrap();
        for back in [
            IlluminantObserverProfile::from_json(&json).unwrap(),
            IlluminantObserverProfile::from_reader(json.as_bytes()).unwrap(),
        ] {
            assert_eq!(back.band(4).1.to_bits(), 0.02784679374857675_f64.to_bits());
            assert_eq!(back.normalization().to_bits(), (0.1_f64 + 0.2).to_bits());
            assert_eq!(back, profile);
        }
    }

    #[test]
    fn test_json_validation_applies() {
        let json = r#"{
            "name": "broken",
            "illuminant": [],
            "x_bar": [],
            "y_bar": [],
            "z_bar": [],
            "normalization": 1.0,
            "white": [0.0, 100.0, 100.0]
        }"#;
        assert!(matches!(
            IlluminantObserverProfile::from_json(json),
            Err(Error::InvalidProfile(_))
        ));
        assert!(matches!(
            IlluminantObserverProfile::from_json("{"),
            Err(Error::ProfileParse(_))
        ));
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IlluminantObserverProfile>();
    }
}
