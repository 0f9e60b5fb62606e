use crate::batch::{value_to_number, Batch};
use crate::error::Result;

use super::Stage;

/// Final schema-enforcement gate before handoff to the storage collaborator.
///
/// Two independent responsibilities: drop unlabeled-index columns whose
/// every value is null, and force the configured numeric columns to numeric
/// type, degrading unparseable values to null instead of failing the batch.
/// Runs last because it assumes all derived columns already exist.
pub struct CoercePrune {
    unnamed_prefix: String,
    numeric_columns: Vec<String>,
}

impl CoercePrune {
    pub fn new(unnamed_prefix: impl Into<String>, numeric_columns: Vec<String>) -> Self {
        Self {
            unnamed_prefix: unnamed_prefix.into(),
            numeric_columns,
        }
    }
}

impl Stage for CoercePrune {
    fn name(&self) -> &'static str {
        "coerce_prune"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let candidates: Vec<String> = batch
            .columns()
            .iter()
            .filter(|col| col.starts_with(&self.unnamed_prefix))
            .cloned()
            .collect();
        for col in candidates {
            if let Some(idx) = batch.column_index(&col) {
                if batch.column_is_all_null(idx) {
                    batch.drop_column(&col);
                }
            }
        }

        for col in &self.numeric_columns {
            let idx = batch.ensure_column(col);
            for row in 0..batch.row_count() {
                let coerced = value_to_number(batch.value(row, idx));
                batch.set(row, idx, coerced);
            }
        }
        Ok(batch)
    }
}
