use serde_json::Value;

use crate::batch::Batch;
use crate::constants;
use crate::error::Result;

use super::Stage;

/// Maps `property_status` values through the fixed status lookup.
///
/// Unmapped values, including null, are fixed points; a batch without the
/// column passes through untouched.
pub struct StatusNormalizer;

impl Stage for StatusNormalizer {
    fn name(&self) -> &'static str {
        "status_normalizer"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let Some(idx) = batch.column_index("property_status") else {
            return Ok(batch);
        };

        for row in 0..batch.row_count() {
            let mapped = match batch.value(row, idx) {
                Value::String(s) => constants::canonical_status(s),
                _ => None,
            };
            if let Some(to) = mapped {
                batch.set(row, idx, Value::String(to.to_string()));
            }
        }
        Ok(batch)
    }
}
