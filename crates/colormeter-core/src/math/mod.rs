//! Mathematical operations for the display transforms
//!
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - sRGB transfer function

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_decode3, srgb_encode3, srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};
