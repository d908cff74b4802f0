//! Reduction of trial timings to summary statistics
//!
//! Quartiles keep the historical report convention: when the sample
//! count divides evenly the two straddling ranks are averaged, otherwise the
//! report carries half the value at the rounded-up rank.

use crate::error::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Undo the log transform for reporting: `2^x` when `log_normal`, else `x`
#[inline]
pub fn format_time(value: f64, log_normal: bool) -> f64 {
    if log_normal {
        value.exp2()
    } else {
        value
    }
}

/// Value recorded for one trial: `log2(ms)` when `log_normal`, else `ms`
///
/// Trials too fast for the clock are clamped to the smallest positive
/// `f64` so the log stays finite.
#[inline]
pub fn sample_value(elapsed_ms: f64, log_normal: bool) -> f64 {
    if log_normal {
        elapsed_ms.max(f64::MIN_POSITIVE).log2()
    } else {
        elapsed_ms
    }
}

/// Summary of one (qubit count, depth) configuration
///
/// Every statistic has already been passed through [`format_time`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    pub num_qubits: usize,
    pub depth: usize,
    pub iterations: usize,
    /// Average time (ms)
    pub mean: f64,
    /// Population standard deviation (ms)
    pub std_dev: f64,
    pub fastest: f64,
    pub first_quartile: f64,
    pub median: f64,
    pub third_quartile: f64,
    pub slowest: f64,
}

impl TimingSummary {
    /// Reduce raw samples (ms, or log2 ms when `log_normal`)
    ///
    /// # Errors
    /// Returns [`HarnessError::InvalidConfig`] for an empty sample set
    pub fn from_samples(
        num_qubits: usize,
        depth: usize,
        mut samples: Vec<f64>,
        log_normal: bool,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(HarnessError::invalid_config(
                "cannot summarize an empty sample set",
            ));
        }

        let size = samples.len();
        let mean = samples.iter().sum::<f64>() / size as f64;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / size as f64;

        samples.sort_by(|a, b| a.total_cmp(b));

        let report = |x: f64| format_time(x, log_normal);
        Ok(Self {
            num_qubits,
            depth,
            iterations: size,
            mean: report(mean),
            std_dev: report(variance.sqrt()),
            fastest: report(samples[0]),
            first_quartile: report(split_point(&samples, 1, 4)),
            median: report(split_point(&samples, 1, 2)),
            third_quartile: report(split_point(&samples, 3, 4)),
            slowest: report(samples[size - 1]),
        })
    }
}

/// Value at fraction `num/den` of sorted, non-empty `samples`
fn split_point(samples: &[f64], num: usize, den: usize) -> f64 {
    let size = samples.len();
    if size % den == 0 {
        // ranks k and k+1, 1-indexed
        let k = num * size / den;
        (samples[k - 1] + samples[k]) / 2.0
    } else {
        let rank = (num * size + den - 1) / den;
        samples[rank - 1] / 2.0
    }
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} qubits, depth {} ({} iterations):",
            self.num_qubits, self.depth, self.iterations
        )?;
        writeln!(f, "  Average: {:.3} ms (σ {:.3})", self.mean, self.std_dev)?;
        writeln!(
            f,
            "  Quartiles: {:.3} / {:.3} / {:.3} ms",
            self.first_quartile, self.median, self.third_quartile
        )?;
        writeln!(f, "  Range: {:.3} .. {:.3} ms", self.fastest, self.slowest)?;
        Ok(())
    }
}
