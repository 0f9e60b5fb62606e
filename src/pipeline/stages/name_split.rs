use serde_json::Value;

use crate::batch::Batch;
use crate::error::{NormalizerError, Result};

use super::Stage;

const SOURCE_COLUMN: &str = "presented_by";

/// Splits `presented_by` into first, middle, and last name columns.
///
/// At most three tokens are produced; a name with more than three words
/// collapses the remainder into the last part. The source column is dropped
/// afterwards.
pub struct NameSplitter;

fn split_name(name: &str) -> (Option<String>, Option<String>, Option<String>) {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let first = tokens.first().map(|s| s.to_string());
    let middle = tokens.get(1).map(|s| s.to_string());
    let last = if tokens.len() > 2 {
        Some(tokens[2..].join(" "))
    } else {
        None
    };
    (first, middle, last)
}

fn to_cell(part: Option<String>) -> Value {
    part.map(Value::String).unwrap_or(Value::Null)
}

impl Stage for NameSplitter {
    fn name(&self) -> &'static str {
        "name_splitter"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let src = batch
            .column_index(SOURCE_COLUMN)
            .ok_or_else(|| NormalizerError::MissingColumn(SOURCE_COLUMN.to_string()))?;

        let first_idx = batch.ensure_column("presented_by_first_name");
        let middle_idx = batch.ensure_column("presented_by_middle_name");
        let last_idx = batch.ensure_column("presented_by_last_name");

        for row in 0..batch.row_count() {
            let (first, middle, last) = match batch.value(row, src) {
                Value::String(s) => split_name(s),
                _ => (None, None, None),
            };
            batch.set(row, first_idx, to_cell(first));
            batch.set(row, middle_idx, to_cell(middle));
            batch.set(row, last_idx, to_cell(last));
        }

        batch.drop_column(SOURCE_COLUMN);
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name_batch(value: Value) -> Batch {
        let mut batch = Batch::new(vec!["presented_by".to_string()]);
        batch.push_row(vec![value]);
        batch
    }

    #[test]
    fn test_three_part_name() {
        let batch = NameSplitter.apply(name_batch(json!("Jane Q Public"))).unwrap();
        assert_eq!(batch.get(0, "presented_by_first_name"), Some(&json!("Jane")));
        assert_eq!(batch.get(0, "presented_by_middle_name"), Some(&json!("Q")));
        assert_eq!(batch.get(0, "presented_by_last_name"), Some(&json!("Public")));
        assert!(!batch.has_column("presented_by"));
    }

    #[test]
    fn test_two_part_name_leaves_last_null() {
        let batch = NameSplitter.apply(name_batch(json!("Jane Public"))).unwrap();
        assert_eq!(batch.get(0, "presented_by_first_name"), Some(&json!("Jane")));
        assert_eq!(batch.get(0, "presented_by_middle_name"), Some(&json!("Public")));
        assert_eq!(batch.get(0, "presented_by_last_name"), Some(&Value::Null));
    }

    #[test]
    fn test_long_name_collapses_into_last_part() {
        let batch = NameSplitter
            .apply(name_batch(json!("Jane Q Public Van Buren")))
            .unwrap();
        assert_eq!(
            batch.get(0, "presented_by_last_name"),
            Some(&json!("Public Van Buren"))
        );
    }

    #[test]
    fn test_null_input_yields_all_null() {
        let batch = NameSplitter.apply(name_batch(Value::Null)).unwrap();
        assert_eq!(batch.get(0, "presented_by_first_name"), Some(&Value::Null));
        assert_eq!(batch.get(0, "presented_by_middle_name"), Some(&Value::Null));
        assert_eq!(batch.get(0, "presented_by_last_name"), Some(&Value::Null));
    }

    #[test]
    fn test_rejoined_parts_preserve_word_sequence() {
        let source = "A  B   C    D";
        let batch = NameSplitter.apply(name_batch(json!(source))).unwrap();
        let parts: Vec<String> = [
            "presented_by_first_name",
            "presented_by_middle_name",
            "presented_by_last_name",
        ]
        .iter()
        .filter_map(|c| batch.get(0, c))
        .filter_map(|v| v.as_str().map(String::from))
        .collect();
        assert_eq!(parts.join(" "), "A B C D");
    }

    #[test]
    fn test_missing_source_column_errors() {
        let batch = Batch::new(vec!["price".to_string()]);
        let err = NameSplitter.apply(batch).unwrap_err();
        assert!(matches!(err, NormalizerError::MissingColumn(_)));
    }
}
