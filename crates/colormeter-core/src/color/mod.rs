//! Color space types and conversions
//!
//! This module provides:
//! - CIE XYZ tristimulus values
//! - CIELAB (L*a*b*) and its chroma/hue polar form
//! - sRGB (8-bit and floating point) and CMYK display forms
//! - White point definitions

pub mod cmyk;
pub mod lab;
pub mod lch;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use cmyk::{Cmyk, rgb_to_cmyk};
pub use lab::{Lab, lab_to_xyz, xyz_to_lab};
pub use lch::{Ch, lab_to_ch};
pub use rgb::{Rgb, Rgb8, lab_to_rgb, lab_to_rgb_linear, rgb_to_lab};
pub use white_point::{D65, WhitePoint};
pub use xyz::Xyz;
