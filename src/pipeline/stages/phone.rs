use serde_json::Value;

use crate::batch::{value_to_string, Batch};
use crate::constants;
use crate::error::Result;

use super::Stage;

/// Strips a phone-bearing column down to digits, keeping the last ten to
/// tolerate a leading country code.
///
/// Shorter digit strings are returned as-is, and a cell with no digits at
/// all becomes null. The target column is parametrized so the stage can be
/// reused for any phone-bearing column.
pub struct PhoneNormalizer {
    column: String,
}

impl PhoneNormalizer {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new(constants::DEFAULT_PHONE_COLUMN)
    }
}

fn clean_number(cell: &Value) -> Value {
    if cell.is_null() {
        return Value::Null;
    }
    let digits: String = value_to_string(cell)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Value::Null;
    }
    let start = digits.len().saturating_sub(10);
    Value::String(digits[start..].to_string())
}

impl Stage for PhoneNormalizer {
    fn name(&self) -> &'static str {
        "phone_normalizer"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let Some(idx) = batch.column_index(&self.column) else {
            return Ok(batch);
        };

        for row in 0..batch.row_count() {
            let cleaned = clean_number(batch.value(row, idx));
            batch.set(row, idx, cleaned);
        }
        Ok(batch)
    }
}
