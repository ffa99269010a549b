//! Single-pass accumulator for RTT statistics
//!
//! Sum, extrema and exceedances are tracked directly; the sample variance
//! uses Welford's update so no values need to be retained. The Welford mean
//! stands in for the plain one once the running sum overflows.

use crate::{
    error::{AppError, Result},
    input::{ParsedRow, RowError},
    models::report::{Spread, SummaryReport},
};

/// Milliseconds per minute, for the duration metric
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Running state for one summarization
#[derive(Debug, Clone)]
pub struct Accumulator {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
    // Welford running mean and sum of squared deviations
    running_mean: f64,
    m2: f64,
    exceed_threshold_ms: f64,
    exceed_count: usize,
    first_timestamp: Option<i64>,
    last_timestamp: Option<i64>,
}

impl Accumulator {
    pub fn new(exceed_threshold_ms: f64) -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            running_mean: 0.0,
            m2: 0.0,
            exceed_threshold_ms,
            exceed_count: 0,
            first_timestamp: None,
            last_timestamp: None,
        }
    }

    /// Fold one parsed row
    pub fn push(&mut self, row: &ParsedRow) {
        self.add_value(row.rtt);

        if let Some(ts) = row.timestamp {
            if self.first_timestamp.is_none() {
                self.first_timestamp = Some(ts);
            }
            self.last_timestamp = Some(ts);
        }
    }

    /// Fold one RTT value
    pub fn add_value(&mut self, rtt: f64) {
        self.count += 1;
        self.sum += rtt;

        if rtt < self.min {
            self.min = rtt;
        }
        if rtt > self.max {
            self.max = rtt;
        }
        if rtt > self.exceed_threshold_ms {
            self.exceed_count += 1;
        }

        let n = self.count as f64;
        let old_mean = self.running_mean;
        let delta = rtt - old_mean;
        self.running_mean += if delta.is_finite() {
            delta / n
        } else {
            rtt / n - old_mean / n
        };
        self.m2 += delta * (rtt - self.running_mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample (N-1) variance, if at least two values were folded
    pub fn sample_variance(&self) -> Option<f64> {
        if self.count > 1 {
            // Rounding can push m2 a hair below zero for constant inputs
            Some((self.m2 / (self.count - 1) as f64).max(0.0))
        } else {
            None
        }
    }

    /// Derive the final report
    pub fn finish(self, skipped_rows: Vec<RowError>) -> Result<SummaryReport> {
        if self.count == 0 {
            let message = if skipped_rows.is_empty() {
                "no measurement rows found".to_string()
            } else {
                format!(
                    "no valid measurement rows ({} malformed row(s) skipped)",
                    skipped_rows.len()
                )
            };
            return Err(AppError::empty_input(message));
        }

        let spread = match self.sample_variance() {
            Some(variance) if !variance.is_finite() => {
                return Err(AppError::degenerate_sample(
                    "sample variance exceeds the f64 range",
                ));
            }
            Some(variance) => Spread::from_variance(variance),
            None => Spread::Undefined,
        };

        let mean = if self.sum.is_finite() {
            self.sum / self.count as f64
        } else {
            self.running_mean
        };

        // i128 keeps the full i64 span exact
        let duration_minutes = match (self.first_timestamp, self.last_timestamp) {
            (Some(first), Some(last)) => {
                Some((i128::from(last) - i128::from(first)) as f64 / MS_PER_MINUTE)
            }
            _ => None,
        };

        Ok(SummaryReport {
            count: self.count,
            mean,
            min: self.min,
            max: self.max,
            spread,
            exceed_threshold_ms: self.exceed_threshold_ms,
            exceed_count: self.exceed_count,
            first_timestamp: self.first_timestamp,
            last_timestamp: self.last_timestamp,
            duration_minutes,
            skipped_rows,
        })
    }
}
