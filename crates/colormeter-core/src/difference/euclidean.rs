//! Straight-line distances: CIE76, Hunter and ΔE(uv)

use crate::color::Lab;

/// CIE 1976 ΔE*ab, the Euclidean distance in L*a*b*
#[inline]
pub fn delta_e_76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab2.l - lab1.l;
    let da = lab2.a - lab1.a;
    let db = lab2.b - lab1.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Hunter ΔE
///
/// Evaluated on the CIELAB coordinates, which makes it the same number as
/// [`delta_e_76`]. Kept as a separate entry point so reports can carry the
/// label the operator selected.
#[inline]
pub fn hunter_delta_e(lab1: Lab, lab2: Lab) -> f64 {
    delta_e_76(lab1, lab2)
}

/// Map (a*, b*) onto approximate (u, v) chromaticity
///
/// Not CIELUV: the shared denominator is `a + 15b + 3`. A zero denominator
/// maps to the origin.
#[inline]
fn approximate_uv(lab: Lab) -> (f64, f64) {
    let denominator = lab.a + 15.0 * lab.b + 3.0;
    if denominator == 0.0 {
        return (0.0, 0.0);
    }
    (4.0 * lab.a / denominator, 9.0 * lab.b / denominator)
}

/// ΔE(uv): Euclidean distance over L and an algebraic (u, v) approximation
///
/// This is a quick screening metric, not a CIELUV ΔE*uv. Use
/// [`delta_e_2000`](super::delta_e_2000) for perceptual work.
pub fn delta_e_uv(lab1: Lab, lab2: Lab) -> f64 {
    let (u1, v1) = approximate_uv(lab1);
    let (u2, v2) = approximate_uv(lab2);
    let dl = lab2.l - lab1.l;
    let du = u2 - u1;
    let dv = v2 - v1;
    (dl * dl + du * du + dv * dv).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_delta_e_76_pythagorean() {
        let de = delta_e_76(Lab::new(50.0, 0.0, 0.0), Lab::new(53.0, 4.0, 0.0));
        assert!((de - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_hunter_matches_cie76() {
        let pairs = [
            (Lab::new(50.0, 20.0, -30.0), Lab::new(55.0, 25.0, -20.0)),
            (Lab::new(0.0, 0.0, 0.0), Lab::new(100.0, -128.0, 127.0)),
            (Lab::new(12.5, -3.0, 44.0), Lab::new(12.5, -3.0, 44.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(hunter_delta_e(a, b), delta_e_76(a, b));
        }
    }

    #[test]
    fn test_uv_lightness_only() {
        let de = delta_e_uv(Lab::new(40.0, 10.0, 10.0), Lab::new(47.0, 10.0, 10.0));
        assert!((de - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_uv_zero_denominator_is_finite() {
        // a + 15b + 3 == 0 for the first color
        let de = delta_e_uv(Lab::new(50.0, -3.0, 0.0), Lab::new(50.0, 1.0, 1.0));
        assert!(de.is_finite());
        assert!((de - 97.0_f64.sqrt() / 19.0).abs() < EPSILON, "got {de}");
    }
}
