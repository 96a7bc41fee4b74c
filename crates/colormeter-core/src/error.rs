//! Error types for colormeter

use thiserror::Error;

/// Result type for colormeter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colormeter operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Caller supplied malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Start wavelength below 360 nm or off the 10 nm grid
    #[error("Invalid start wavelength: {0} nm (expected a multiple of 10, at least 360)")]
    InvalidWavelength(i32),

    /// Fixed-width band array has the wrong length
    #[error("Band count mismatch: expected {expected}, got {actual}")]
    BandCount { expected: usize, actual: usize },

    /// Light source profile failed validation
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Light source profile could not be deserialized
    #[error("Profile parse error: {0}")]
    ProfileParse(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was caused by the caller's measurement input
    /// rather than by profile data or I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::InvalidWavelength(_) | Error::BandCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(Error::InvalidWavelength(350).is_invalid_input());
        assert!(
            Error::BandCount {
                expected: 43,
                actual: 12
            }
            .is_invalid_input()
        );
        assert!(!Error::InvalidProfile("empty".into()).is_invalid_input());
    }

    #[test]
    fn test_messages() {
        let err = Error::InvalidWavelength(365);
        assert!(err.to_string().contains("365"));

        let err = Error::BandCount {
            expected: 43,
            actual: 44,
        };
        assert_eq!(err.to_string(), "Band count mismatch: expected 43, got 44");
    }
}
