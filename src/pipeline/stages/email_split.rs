use serde_json::Value;

use crate::batch::{value_to_string, Batch};
use crate::error::{NormalizerError, Result};

use super::Stage;

const SOURCE_COLUMN: &str = "email";

/// Splits the `email` column into `email_1` and `email_2`.
///
/// Semicolons and spaces are normalized to commas before splitting; empty
/// tokens are dropped and only the first two survivors are kept. The source
/// column is retained for downstream consumers.
pub struct EmailSplitter;

fn split_emails(raw: &str) -> (Option<String>, Option<String>) {
    let normalized = raw.replace(';', ",").replace(' ', ",");
    let mut parts = normalized
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty());
    (
        parts.next().map(String::from),
        parts.next().map(String::from),
    )
}

impl Stage for EmailSplitter {
    fn name(&self) -> &'static str {
        "email_splitter"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let src = batch
            .column_index(SOURCE_COLUMN)
            .ok_or_else(|| NormalizerError::MissingColumn(SOURCE_COLUMN.to_string()))?;

        let first_idx = batch.ensure_column("email_1");
        let second_idx = batch.ensure_column("email_2");

        for row in 0..batch.row_count() {
            let (first, second) = match batch.value(row, src) {
                Value::Null => (None, None),
                other => split_emails(&value_to_string(other)),
            };
            batch.set(row, first_idx, first.map(Value::String).unwrap_or(Value::Null));
            batch.set(row, second_idx, second.map(Value::String).unwrap_or(Value::Null));
        }
        Ok(batch)
    }
}
