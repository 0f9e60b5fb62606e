use serde_json::Value;

use crate::batch::{value_to_string, Batch};
use crate::constants;
use crate::error::Result;

use super::Stage;

/// Builds `full_address` from the five address columns.
///
/// The address columns are null-filled with empty strings first so
/// composition never sees missing data; those fills persist in the output.
/// Each part is trimmed (zip coerced to string) and the non-empty parts are
/// joined with `", "` in the fixed address order. Source columns are kept.
pub struct AddressComposer;

impl Stage for AddressComposer {
    fn name(&self) -> &'static str {
        "address_composer"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let part_idxs: Vec<usize> = constants::ADDRESS_COLUMNS
            .iter()
            .map(|col| batch.ensure_column(col))
            .collect();

        for row in 0..batch.row_count() {
            for &idx in &part_idxs {
                if batch.value(row, idx).is_null() {
                    batch.set(row, idx, Value::String(String::new()));
                }
            }
        }

        let full_idx = batch.ensure_column("full_address");
        for row in 0..batch.row_count() {
            let parts: Vec<String> = part_idxs
                .iter()
                .map(|&idx| value_to_string(batch.value(row, idx)).trim().to_string())
                .filter(|part| !part.is_empty())
                .collect();
            batch.set(row, full_idx, Value::String(parts.join(", ")));
        }
        Ok(batch)
    }
}
