//! 3x3 Matrix operations for the sRGB ⇄ XYZ transforms

use std::ops::Mul;

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

// Four-decimal IEC 61966-2-1 pair. Reported RGB/Lab values are defined
// against these exact coefficients.

/// Linear sRGB to XYZ (D65)
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// XYZ (D65) to linear sRGB
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_multiply_vec() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let result = a * [1.0, 0.0, -1.0];
        assert!((result[0] - -2.0).abs() < EPSILON);
        assert!((result[1] - -2.0).abs() < EPSILON);
        assert!((result[2] - -2.0).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_xyz_pair_is_near_inverse() {
        // Four-decimal coefficients: only approximately inverse
        for axis in 0..3 {
            let mut v = [0.0; 3];
            v[axis] = 1.0;
            let roundtrip = XYZ_TO_SRGB * (SRGB_TO_XYZ * v);
            for (i, c) in roundtrip.iter().enumerate() {
                let expected = if i == axis { 1.0 } else { 0.0 };
                assert!(
                    (c - expected).abs() < 1e-4,
                    "sRGB roundtrip drifted on axis {axis}: {roundtrip:?}"
                );
            }
        }
    }

    #[test]
    fn test_known_srgb_to_xyz() {
        // sRGB white (1,1,1) maps to D65
        let white = SRGB_TO_XYZ * [1.0, 1.0, 1.0];
        assert!((white[0] - 0.95047).abs() < 0.001);
        assert!((white[1] - 1.0).abs() < 1e-9);
        assert!((white[2] - 1.08883).abs() < 0.001);
    }
}
