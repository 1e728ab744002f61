//! Schema-driven row projection.
//!
//! The destination table owns its physical column order; summaries are
//! projected through the schema so the two never have to agree on layout.

use serde_json::Value;
use wptd_core::{TestSummary, WptdError};

use crate::schema::Column;

/// Project a summary into one row value per schema column, in schema order.
///
/// A column naming a field the summary does not have fails the whole row
/// with an unrecognized-identifier error; no partial row is returned.
pub fn summary_to_row(summary: &TestSummary, schema: &[Column]) -> Result<Vec<Value>, WptdError> {
    let fields = match serde_json::to_value(summary) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            return Err(WptdError::Config(format!(
                "summary serialized to non-object value: {}",
                other
            )))
        }
        Err(e) => return Err(WptdError::Config(format!("summary serialization: {}", e))),
    };

    schema
        .iter()
        .map(|column| {
            fields.get(&column.name).cloned().ok_or_else(|| {
                WptdError::UnrecognizedIdentifier(format!(
                    "summary has no field named '{}'",
                    column.name
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_WPT_HASH: &str = "0000000000000000000000000000000000000000";

    fn sample_summary() -> TestSummary {
        TestSummary {
            long_wpt_hash: TEST_WPT_HASH.to_string(),
            wpt_commit_time: 0,
            name: "/foo/bar.html".to_string(),
            num_tests_passed: 2,
            num_tests_total: 4,
        }
    }

    fn schema_of(names: &[&str]) -> Vec<Column> {
        names
            .iter()
            .map(|n| Column {
                name: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_row_follows_schema_order() {
        let schema = schema_of(&[
            "wpt_commit_time",
            "long_wpt_hash",
            "name",
            "num_tests_passed",
            "num_tests_total",
        ]);
        let row = summary_to_row(&sample_summary(), &schema).unwrap();
        assert_eq!(
            row,
            vec![
                json!(0),
                json!(TEST_WPT_HASH),
                json!("/foo/bar.html"),
                json!(2),
                json!(4),
            ]
        );
    }

    #[test]
    fn test_row_order_is_independent_of_summary_layout() {
        // Reversed relative to the struct's own field order.
        let schema = schema_of(&["num_tests_total", "name"]);
        let row = summary_to_row(&sample_summary(), &schema).unwrap();
        assert_eq!(row, vec![json!(4), json!("/foo/bar.html")]);
    }

    #[test]
    fn test_subset_schema_is_tolerated() {
        let schema = schema_of(&["name"]);
        let row = summary_to_row(&sample_summary(), &schema).unwrap();
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_unknown_column_fails_with_no_partial_row() {
        let schema = schema_of(&["name", "num_tests_skipped"]);
        let err = summary_to_row(&sample_summary(), &schema).unwrap_err();
        assert!(matches!(err, WptdError::UnrecognizedIdentifier(_)));
    }
}
