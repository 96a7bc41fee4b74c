//! CIEDE2000 color difference
//!
//! Reference: Sharma, Wu & Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005).

use crate::color::Lab;

/// 25⁷, the chroma pivot of the G and R_C terms
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle of (a′, b) in degrees, wrapped to [0, 360)
#[inline]
fn hue_prime(a_prime: f64, b: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees().rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if h >= 360.0 { 0.0 } else { h }
}

/// Calculate CIEDE2000 color difference
///
/// A difference of 1.0 is approximately the just-noticeable difference.
/// `lab1` is the reference color. Weighting factors are fixed at
/// kL = kC = kH = 1.
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    // Step 1: C′ and h′
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar = (c1 + c2) / 2.0;

    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);

    let h1_prime = hue_prime(a1_prime, b1);
    let h2_prime = hue_prime(a2_prime, b2);

    let chroma_product = c1_prime * c2_prime;

    // Step 2: deltas
    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    let delta_h_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };

    let delta_big_h_prime = 2.0 * chroma_product.sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Step 3: weighting functions
    let l_bar_prime = (l1 + l2) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;

    // Achromatic pairs have no mean hue
    let h_bar_prime = if chroma_product == 0.0 {
        0.0
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_prime).to_radians().cos()
        + 0.32 * (3.0 * h_bar_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_prime - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let r_c = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
    let s_l =
        1.0 + (0.015 * (l_bar_prime - 50.0).powi(2)) / (20.0 + (l_bar_prime - 50.0).powi(2)).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let term1 = delta_l_prime / s_l;
    let term2 = delta_c_prime / s_c;
    let term3 = delta_big_h_prime / s_h;

    (term1 * term1 + term2 * term2 + term3 * term3 + r_t * term2 * term3).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    #[test]
    fn test_identical() {
        let lab = Lab::new(50.0, 20.0, -30.0);
        assert!(delta_e_2000(lab, lab).abs() < 1e-12);
    }

    #[test]
    fn test_blue_pair() {
        let de = delta_e_2000(
            Lab::new(50.0, 2.6772, -79.7751),
            Lab::new(50.0, 0.0, -82.7485),
        );
        assert!((de - 2.0425).abs() < EPSILON, "got {de}");
    }

    #[test]
    fn test_neutral_against_chromatic() {
        // One achromatic color: no mean hue, no hue delta
        let de = delta_e_2000(Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, -1.0, 2.0));
        assert!((de - 2.3669).abs() < EPSILON, "got {de}");
    }

    #[test]
    fn test_hue_wraparound() {
        // Hues either side of 0°/360°
        let de = delta_e_2000(
            Lab::new(50.0, 2.49, -0.001),
            Lab::new(50.0, -2.49, 0.0009),
        );
        assert!((de - 7.1792).abs() < EPSILON, "got {de}");

        let de = delta_e_2000(
            Lab::new(50.0, 2.49, -0.001),
            Lab::new(50.0, -2.49, 0.0011),
        );
        assert!((de - 7.2195).abs() < EPSILON, "got {de}");
    }

    #[test]
    fn test_perceptible() {
        let red = Lab::new(53.0, 80.0, 67.0);
        let green = Lab::new(87.0, -86.0, 83.0);
        assert!(delta_e_2000(red, green) > 50.0);
    }

    #[test]
    fn test_hue_prime_range() {
        assert_eq!(hue_prime(0.0, 0.0), 0.0);
        assert!((hue_prime(0.0, 1.0) - 90.0).abs() < 1e-12);
        assert!((hue_prime(1.0, -1.0) - 315.0).abs() < 1e-12);
        let h = hue_prime(1.0, -1e-300);
        assert!((0.0..360.0).contains(&h));
    }
}
