//! Accuracy measurement using perceptual color difference metrics
//!
//! Uses CIEDE2000 as the primary metric when summarizing how far one set of
//! colors is from another.

use colormeter_core::batch;
use colormeter_core::color::Lab;
use colormeter_core::difference::DifferenceFormula;

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of differences
    pub fn from_differences(mut delta_es: Vec<f64>) -> Self {
        delta_es.sort_by(|a, b| a.total_cmp(b));

        let count = delta_es.len();
        let mean = if count == 0 {
            0.0
        } else {
            delta_es.iter().sum::<f64>() / count as f64
        };
        let max = delta_es.last().copied().unwrap_or(0.0);
        let p95_idx = ((count as f64 * 0.95) as usize).min(count.saturating_sub(1));
        let p95 = delta_es.get(p95_idx).copied().unwrap_or(0.0);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }

    /// Check if differences are acceptable (deltaE < 3.5)
    pub fn is_acceptable(&self) -> bool {
        self.max < 3.5
    }
}

/// Compare two equally long Lab sets pairwise
pub fn compare_labs(formula: DifferenceFormula, reference: &[Lab], result: &[Lab]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());
    let pairs: Vec<(Lab, Lab)> = reference.iter().copied().zip(result.iter().copied()).collect();
    DeltaEStats::from_differences(batch::differences(formula, &pairs))
}

/// Compare two packed sRGB buffers with CIEDE2000
pub fn compare_rgb_buffers(reference: &[u8], result: &[u8]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());
    assert_eq!(reference.len() % 3, 0);

    let pixel_count = reference.len() / 3;
    let mut lab_ref = vec![Lab::default(); pixel_count];
    let mut lab_res = vec![Lab::default(); pixel_count];
    batch::rgb8_to_labs(reference, &mut lab_ref).expect("sized above");
    batch::rgb8_to_labs(result, &mut lab_res).expect("sized above");

    compare_labs(DifferenceFormula::Ciede2000, &lab_ref, &lab_res)
}
