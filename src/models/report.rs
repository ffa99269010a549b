//! Summary report produced by the summarizer

use crate::error::{AppError, Result};
use crate::input::RowError;
use serde::{Deserialize, Serialize};

/// Sample variance and standard deviation, when defined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Spread {
    /// Two or more samples
    Defined { variance: f64, stddev: f64 },
    /// A single sample has no sample variance
    Undefined,
}

impl Spread {
    pub fn from_variance(variance: f64) -> Self {
        Spread::Defined {
            variance,
            stddev: variance.sqrt(),
        }
    }
}

/// Final statistics for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Number of rows folded into the statistics
    pub count: usize,
    /// Arithmetic mean RTT
    pub mean: f64,
    /// Smallest RTT seen
    pub min: f64,
    /// Largest RTT seen
    pub max: f64,
    pub spread: Spread,
    /// Threshold used for `exceed_count`
    pub exceed_threshold_ms: f64,
    /// Rows with an RTT strictly above the threshold
    pub exceed_count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub first_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_timestamp: Option<i64>,
    /// Minutes between the first and last timestamp
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_minutes: Option<f64>,
    /// Rows dropped in lenient mode
    #[serde(default)]
    pub skipped_rows: Vec<RowError>,
}

impl SummaryReport {
    pub fn variance(&self) -> Option<f64> {
        match self.spread {
            Spread::Defined { variance, .. } => Some(variance),
            Spread::Undefined => None,
        }
    }

    pub fn stddev(&self) -> Option<f64> {
        match self.spread {
            Spread::Defined { stddev, .. } => Some(stddev),
            Spread::Undefined => None,
        }
    }

    /// Standard deviation, failing when the sample is too small to define one.
    ///
    /// Library API for callers that need a defined value; the CLI prints
    /// `undefined` instead.
    pub fn require_stddev(&self) -> Result<f64> {
        self.stddev().ok_or_else(|| {
            AppError::degenerate_sample(format!(
                "sample variance needs at least 2 rows, got {}",
                self.count
            ))
        })
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_rows.len()
    }

    /// Share of rows above the threshold, in percent
    pub fn exceed_percentage(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.exceed_count as f64 / self.count as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(count: usize, spread: Spread) -> SummaryReport {
        SummaryReport {
            count,
            mean: 1500.0,
            min: 500.0,
            max: 2500.0,
            spread,
            exceed_threshold_ms: 2000.0,
            exceed_count: 1,
            first_timestamp: None,
            last_timestamp: None,
            duration_minutes: None,
            skipped_rows: Vec::new(),
        }
    }

    #[test]
    fn test_defined_spread() {
        let report = report(3, Spread::from_variance(1_000_000.0));
        assert_eq!(report.variance(), Some(1_000_000.0));
        assert_eq!(report.stddev(), Some(1000.0));
        assert_eq!(report.require_stddev().unwrap(), 1000.0);
    }

    #[test]
    fn test_undefined_spread() {
        let report = report(1, Spread::Undefined);
        assert_eq!(report.stddev(), None);

        let error = report.require_stddev().unwrap_err();
        assert_eq!(error.category(), "STATS");
        assert!(error.to_string().contains("got 1"));
    }

    #[test]
    fn test_exceed_percentage() {
        let report = report(4, Spread::Undefined);
        assert_eq!(report.exceed_percentage(), 25.0);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(report(1, Spread::Undefined)).unwrap();
        assert_eq!(value["spread"]["status"], "undefined");
        assert!(value.get("duration_minutes").is_none());

        let value = serde_json::to_value(report(3, Spread::from_variance(4.0))).unwrap();
        assert_eq!(value["spread"]["status"], "defined");
        assert_eq!(value["spread"]["stddev"], 2.0);
    }
}
