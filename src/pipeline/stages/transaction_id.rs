use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::batch::{value_to_string, Batch};
use crate::constants;
use crate::error::Result;

use super::Stage;

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Derives the deterministic `id` slug from `mls` plus the five address
/// columns.
///
/// The id is a pure function of those six fields, so identical source
/// tuples always produce identical ids; the storage collaborator uses it as
/// its idempotent upsert key.
pub struct TransactionIdGenerator;

/// Lowercase, replace every run of non-alphanumerics with a single hyphen,
/// and strip leading/trailing hyphens.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let hyphenated = NON_ALPHANUMERIC.replace_all(&lowered, "-");
    hyphenated.trim_matches('-').to_string()
}

impl Stage for TransactionIdGenerator {
    fn name(&self) -> &'static str {
        "transaction_id_generator"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let mut field_idxs = vec![batch.ensure_column("mls")];
        for col in constants::ADDRESS_COLUMNS {
            field_idxs.push(batch.ensure_column(col));
        }

        // Null-fill the source fields with empty strings; the fills persist
        for row in 0..batch.row_count() {
            for &idx in &field_idxs {
                if batch.value(row, idx).is_null() {
                    batch.set(row, idx, Value::String(String::new()));
                }
            }
        }

        let id_idx = batch.ensure_column("id");
        for row in 0..batch.row_count() {
            let joined = field_idxs
                .iter()
                .map(|&idx| value_to_string(batch.value(row, idx)))
                .collect::<Vec<_>>()
                .join(" ");
            batch.set(row, id_idx, Value::String(slugify(&joined)));
        }
        Ok(batch)
    }
}
