//! Chroma/hue weighted differences: ΔE(CH), CMC(l:c) and CIE94
//!
//! All three split the a*b* distance into a chroma delta and a hue delta
//! `ΔH = √(Δa² + Δb² − ΔC²)`. Rounding can push that radicand slightly
//! below zero for near-identical hues; it is clamped to zero.

use crate::color::Lab;

/// CMC lightness weight
const CMC_L: f64 = 2.0;

/// CMC chroma weight
const CMC_C: f64 = 1.0;

/// CIE94 graphic-arts chroma constant
const CIE94_K1: f64 = 0.045;

/// CIE94 graphic-arts hue constant
const CIE94_K2: f64 = 0.015;

/// Hue delta left over once the chroma delta is removed from the a*b* distance
#[inline]
fn hue_delta(da: f64, db: f64, dc: f64) -> f64 {
    (da * da + db * db - dc * dc).max(0.0).sqrt()
}

/// ΔE(CH): chroma delta combined with the orthogonal hue delta
///
/// Lightness does not participate.
pub fn delta_e_ch(lab1: Lab, lab2: Lab) -> f64 {
    let dc = lab2.chroma() - lab1.chroma();
    let dh = hue_delta(lab2.a - lab1.a, lab2.b - lab1.b, dc);
    (dc * dc + dh * dh).sqrt()
}

/// CMC(2:1) color difference
///
/// `lab1` is the standard: every weighting function is evaluated on it, so
/// swapping the arguments changes the result.
pub fn delta_e_cmc(lab1: Lab, lab2: Lab) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let dc = c1 - c2;
    let dl = lab1.l - lab2.l;
    let dh = hue_delta(lab1.a - lab2.a, lab1.b - lab2.b, dc);

    let s_l = if lab1.l < 16.0 {
        0.511
    } else {
        (0.040975 * lab1.l) / (1.0 + 0.01765 * lab1.l)
    };
    let s_c = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;

    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();

    // The branch is selected on b*, not on the hue angle
    let t = if (164.0..=345.0).contains(&lab1.b) {
        0.56 + (0.2 * (lab1.b + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (lab1.b + 35.0).to_radians().cos()).abs()
    };
    let s_h = s_c * (f * t + 1.0 - f);

    let term_l = dl / (CMC_L * s_l);
    let term_c = dc / (CMC_C * s_c);
    let term_h = dh / s_h;
    (term_l * term_l + term_c * term_c + term_h * term_h).sqrt()
}

/// CIE 1994 ΔE*94, graphic-arts constants, kL = kC = kH = 1
///
/// `lab1` is the reference: SC and SH scale with its chroma.
pub fn delta_e_94(lab1: Lab, lab2: Lab) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let dc = c1 - c2;
    let dl = lab1.l - lab2.l;
    let dh = hue_delta(lab1.a - lab2.a, lab1.b - lab2.b, dc);

    let s_c = 1.0 + CIE94_K1 * c1;
    let s_h = 1.0 + CIE94_K2 * c1;

    let term_c = dc / s_c;
    let term_h = dh / s_h;
    (dl * dl + term_c * term_c + term_h * term_h).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn sample_pair() -> (Lab, Lab) {
        (Lab::new(50.0, 20.0, -30.0), Lab::new(55.0, 25.0, -20.0))
    }

    #[test]
    fn test_ch_ignores_lightness() {
        let de = delta_e_ch(Lab::new(10.0, 3.0, 4.0), Lab::new(90.0, 3.0, 4.0));
        assert!(de.abs() < EPSILON);
    }

    #[test]
    fn test_ch_pure_chroma_step() {
        // Same hue, chroma 5 → 10
        let de = delta_e_ch(Lab::new(50.0, 3.0, 4.0), Lab::new(50.0, 6.0, 8.0));
        assert!((de - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_cmc_known_values() {
        let (a, b) = sample_pair();
        assert!((delta_e_cmc(a, b) - 6.903014588623729).abs() < EPSILON);
        assert!((delta_e_cmc(b, a) - 7.331857955718729).abs() < EPSILON);
    }

    #[test]
    fn test_cmc_dark_standard() {
        // L1 < 16 uses the constant SL
        let de = delta_e_cmc(Lab::new(10.0, 5.0, 5.0), Lab::new(12.0, 6.0, 4.0));
        assert!((de - 2.6547533626117894).abs() < EPSILON, "got {de}");
    }

    #[test]
    fn test_cmc_high_b_branch() {
        let de = delta_e_cmc(Lab::new(50.0, 0.0, 200.0), Lab::new(50.0, 0.0, 210.0));
        assert!((de - 2.4021935610595135).abs() < EPSILON, "got {de}");
    }

    #[test]
    fn test_cmc_achromatic_standard() {
        let de = delta_e_cmc(Lab::new(50.0, 0.0, 0.0), Lab::new(60.0, 0.0, 0.0));
        assert!((de - 4.594264795607077).abs() < EPSILON, "got {de}");
    }

    #[test]
    fn test_cie94_known_values() {
        let (a, b) = sample_pair();
        assert!((delta_e_94(a, b) - 8.552709717211656).abs() < EPSILON);
        assert!((delta_e_94(b, a) - 8.794328413879136).abs() < EPSILON);
    }

    #[test]
    fn test_cie94_lightness_only() {
        let de = delta_e_94(Lab::new(50.0, 0.0, 0.0), Lab::new(60.0, 0.0, 0.0));
        assert!((de - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_radicand_clamped() {
        // Same hue, different chroma: Δa² + Δb² − ΔC² is zero up to rounding
        let a = Lab::new(50.0, 0.1, 0.3);
        let b = Lab::new(50.0, 0.3, 0.9);
        for de in [delta_e_ch(a, b), delta_e_cmc(a, b), delta_e_94(a, b)] {
            assert!(de.is_finite() && de >= 0.0);
        }
        assert_eq!(hue_delta(3.0, 4.0, 5.000001), 0.0);
    }
}
