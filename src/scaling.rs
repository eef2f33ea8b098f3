// ✖️ Scale Filter - scale integers and keep only results above a threshold
//
// Default settings double every value and keep those greater than ten.

use crate::radix::radix_sort;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleFilter {
    /// Multiplier applied to every value (default: 2)
    pub factor: i64,

    /// Scaled values must be strictly greater than this (default: 10)
    pub threshold: i64,
}

impl ScaleFilter {
    /// Create filter with default settings
    pub fn new() -> Self {
        ScaleFilter {
            factor: 2,
            threshold: 10,
        }
    }

    pub fn with_threshold(threshold: i64) -> Self {
        ScaleFilter {
            threshold,
            ..Self::new()
        }
    }

    pub fn with_settings(factor: i64, threshold: i64) -> Self {
        ScaleFilter { factor, threshold }
    }

    /// Scale every value and keep those above the threshold, ascending.
    ///
    /// Multiplication saturates at the i64 bounds.
    pub fn apply(&self, values: &[i64]) -> Vec<i64> {
        let kept: Vec<i64> = values
            .iter()
            .map(|v| v.saturating_mul(self.factor))
            .filter(|v| *v > self.threshold)
            .collect();

        // Sort after scaling so a negative factor still yields ascending output
        let scaled = radix_sort(&kept);

        debug!(
            input = values.len(),
            kept = scaled.len(),
            factor = self.factor,
            threshold = self.threshold,
            "applied scale filter"
        );

        scaled
    }
}

impl Default for ScaleFilter {
    fn default() -> Self {
        Self::new()
    }
}
