//! JSON formatter for machine consumption

use crate::{
    error::{AppError, Result},
    models::SummaryReport,
};
use super::formatter::OutputFormatter;
use serde_json::json;

/// Renders the report as pretty-printed JSON
pub struct JsonFormatter {
    verbose: bool,
}

impl JsonFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &SummaryReport) -> Result<String> {
        let mut value = serde_json::to_value(report)?;

        // Skipped rows are listed only in verbose mode; the count is always present
        if let Some(object) = value.as_object_mut() {
            object.insert("skipped_count".to_string(), json!(report.skipped_count()));
            if !self.verbose {
                object.remove("skipped_rows");
            }
        }

        let mut output = serde_json::to_string_pretty(&value)
            .map_err(|e| AppError::internal(format!("Failed to serialize report: {}", e)))?;
        output.push('\n');
        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(json!({ "error": error }).to_string())
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(json!({ "warning": warning }).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RowError;
    use crate::models::Spread;
    use serde_json::Value;

    fn report() -> SummaryReport {
        SummaryReport {
            count: 1,
            mean: 42.0,
            min: 42.0,
            max: 42.0,
            spread: Spread::Undefined,
            exceed_threshold_ms: 5000.0,
            exceed_count: 0,
            first_timestamp: None,
            last_timestamp: None,
            duration_minutes: None,
            skipped_rows: vec![RowError::new(2, "oops", "RTT field 1 missing (row has 1 field(s))")],
        }
    }

    #[test]
    fn test_json_report_fields() {
        let output = JsonFormatter::new(false).format_report(&report()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["mean"], 42.0);
        assert_eq!(value["spread"]["status"], "undefined");
        assert_eq!(value["skipped_count"], 1);
        assert!(value.get("skipped_rows").is_none());
        assert!(value.get("duration_minutes").is_none());
    }

    #[test]
    fn test_json_verbose_lists_skipped_rows() {
        let output = JsonFormatter::new(true).format_report(&report()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["skipped_rows"][0]["line"], 2);
        assert_eq!(value["skipped_rows"][0]["content"], "oops");
    }

    #[test]
    fn test_json_error() {
        let output = JsonFormatter::new(false).format_error("no such file").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["error"], "no such file");
    }
}
