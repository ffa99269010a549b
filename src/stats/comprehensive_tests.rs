//! Comprehensive tests for the summarizer
//!
//! Property-based tests for the statistical invariants plus edge cases
//! around blank lines and thresholds.

use super::{Summarizer, SummaryConfig};
use crate::{
    input::RowLayout,
    types::ParseMode,
};
use proptest::prelude::*;
use proptest::collection::vec;

/// Property-based test generators
mod generators {
    use super::*;

    /// RTT values in milliseconds with sub-millisecond precision, as found in RTT logs
    pub fn rtt_values() -> impl Strategy<Value = f64> {
        (0u32..20_000_000).prop_map(|v| v as f64 / 1000.0)
    }

    pub fn rtt_samples() -> impl Strategy<Value = Vec<f64>> {
        vec(rtt_values(), 1..300)
    }

    pub fn thresholds() -> impl Strategy<Value = f64> {
        0.0f64..20_000.0
    }
}

fn shape_a(threshold: f64) -> SummaryConfig {
    SummaryConfig {
        layout: RowLayout::new(1, Some(0)),
        exceed_threshold_ms: threshold,
        skip_blank_lines: true,
        parse_mode: ParseMode::Strict,
    }
}

/// Render values as `timestamp,rtt` rows one second apart
fn render_rows(values: &[f64]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{},{}\n", 1_700_000_000_000i64 + i as i64 * 1000, v))
        .collect()
}

fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

/// Test mathematical properties of the summary statistics
mod property_tests {
    use super::*;

    proptest! {
        /// Every folded value lies within [min, max]
        #[test]
        fn min_max_bound_all_values(values in generators::rtt_samples()) {
            let summarizer = Summarizer::new(shape_a(5000.0)).unwrap();
            let report = summarizer.summarize_str(&render_rows(&values)).unwrap();

            for v in &values {
                prop_assert!(report.min <= *v);
                prop_assert!(*v <= report.max);
            }
            prop_assert!(report.min <= report.mean + 1e-9 * report.mean.abs().max(1.0));
            prop_assert!(report.mean <= report.max + 1e-9 * report.max.abs().max(1.0));
        }

        /// Mean and standard deviation match the two-pass definitions
        #[test]
        fn mean_and_stddev_match_two_pass(values in vec(generators::rtt_values(), 2..300)) {
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

            let summarizer = Summarizer::new(shape_a(5000.0)).unwrap();
            let report = summarizer.summarize_str(&render_rows(&values)).unwrap();

            prop_assert!(relative_eq(report.mean, mean, 1e-9));
            let stddev = report.stddev().unwrap();
            prop_assert!((stddev - variance.sqrt()).abs() <= 1e-6 * variance.sqrt().max(1.0));
        }

        /// Exceed count is the exact number of values strictly above the threshold
        #[test]
        fn exceed_count_is_exact(values in generators::rtt_samples(), threshold in generators::thresholds()) {
            let expected = values.iter().filter(|v| **v > threshold).count();

            let summarizer = Summarizer::new(shape_a(threshold)).unwrap();
            let report = summarizer.summarize_str(&render_rows(&values)).unwrap();

            prop_assert_eq!(report.exceed_count, expected);
        }

        /// Raising the threshold never raises the exceed count
        #[test]
        fn exceed_count_monotonic(
            values in generators::rtt_samples(),
            low in generators::thresholds(),
            delta in 0.0f64..10_000.0,
        ) {
            let text = render_rows(&values);
            let low_report = Summarizer::new(shape_a(low)).unwrap().summarize_str(&text).unwrap();
            let high_report = Summarizer::new(shape_a(low + delta)).unwrap().summarize_str(&text).unwrap();

            prop_assert!(high_report.exceed_count <= low_report.exceed_count);
        }

        /// Trailing blank lines change nothing when blank lines are skipped
        #[test]
        fn trailing_blank_lines_are_invisible(values in generators::rtt_samples(), blanks in 1usize..10) {
            let text = render_rows(&values);
            let padded = format!("{}{}", text, "\n".repeat(blanks));

            let summarizer = Summarizer::new(shape_a(5000.0)).unwrap();
            let plain = summarizer.summarize_str(&text).unwrap();
            let with_blanks = summarizer.summarize_str(&padded).unwrap();

            prop_assert_eq!(plain.count, with_blanks.count);
            prop_assert_eq!(plain.mean, with_blanks.mean);
            prop_assert_eq!(plain.min, with_blanks.min);
            prop_assert_eq!(plain.max, with_blanks.max);
            prop_assert_eq!(plain.exceed_count, with_blanks.exceed_count);
        }

        /// Repeated runs give identical reports
        #[test]
        fn summaries_are_deterministic(values in generators::rtt_samples()) {
            let text = render_rows(&values);
            let summarizer = Summarizer::new(shape_a(2000.0)).unwrap();

            let first = summarizer.summarize_str(&text).unwrap();
            let second = summarizer.summarize_str(&text).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Lenient mode equals strict mode on the input with bad rows removed
        #[test]
        fn lenient_equals_filtered_strict(values in generators::rtt_samples(), bad_every in 2usize..7) {
            let mut noisy = String::new();
            for (i, row) in render_rows(&values).lines().enumerate() {
                noisy.push_str(row);
                noisy.push('\n');
                if i % bad_every == 0 {
                    noisy.push_str("garbage,row\n");
                }
            }

            let lenient = Summarizer::new(SummaryConfig {
                parse_mode: ParseMode::Lenient,
                ..shape_a(5000.0)
            }).unwrap();
            let strict = Summarizer::new(shape_a(5000.0)).unwrap();

            let noisy_report = lenient.summarize_str(&noisy).unwrap();
            let clean_report = strict.summarize_str(&render_rows(&values)).unwrap();

            prop_assert_eq!(noisy_report.count, clean_report.count);
            prop_assert_eq!(noisy_report.mean, clean_report.mean);
            prop_assert_eq!(noisy_report.exceed_count, clean_report.exceed_count);
            prop_assert_eq!(noisy_report.skipped_count(), (values.len() + bad_every - 1) / bad_every);
            prop_assert!(strict.summarize_str(&noisy).is_err());
        }
    }
}

/// Edge cases not covered by generators
mod edge_cases {
    use super::*;

    #[test]
    fn constant_values_have_zero_stddev() {
        let summarizer = Summarizer::new(shape_a(5000.0)).unwrap();
        let report = summarizer.summarize_str(&render_rows(&[0.1; 50])).unwrap();
        assert_eq!(report.stddev(), Some(0.0));
    }

    #[test]
    fn interior_blank_lines_skipped() {
        let summarizer = Summarizer::new(shape_a(2000.0)).unwrap();
        let report = summarizer
            .summarize_str("100,1500\n\n\n200,2500\n\n300,500")
            .unwrap();
        assert_eq!(report.count, 3);
        assert_eq!(report.min, 500.0);
    }

    #[test]
    fn custom_column_layout() {
        let config = SummaryConfig {
            layout: RowLayout::new(0, Some(3)),
            ..shape_a(100.0)
        };
        let summarizer = Summarizer::new(config).unwrap();
        let report = summarizer
            .summarize_str("50,x,y,60000\n150,x,y,180000\n")
            .unwrap();

        assert_eq!(report.count, 2);
        assert_eq!(report.exceed_count, 1);
        assert_eq!(report.duration_minutes, Some(2.0));
    }

    #[test]
    fn whitespace_only_line_is_malformed() {
        let summarizer = Summarizer::new(shape_a(2000.0)).unwrap();
        assert!(summarizer.summarize_str("100,1500\n   \n").is_err());
    }
}
