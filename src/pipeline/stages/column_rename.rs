use crate::batch::Batch;
use crate::constants;
use crate::error::Result;

use super::Stage;

/// Renames raw extract column names to their canonical forms.
///
/// Columns not present in the rename table pass through unchanged, and
/// absent keys are simply not renamed, so re-applying this stage to an
/// already-canonical batch is a no-op.
pub struct ColumnRename;

impl Stage for ColumnRename {
    fn name(&self) -> &'static str {
        "column_rename"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        for (from, to) in constants::COLUMN_RENAMES {
            batch.rename_column(from, to);
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mapped_columns_renamed_and_raw_names_gone() {
        let mut batch = Batch::new(vec![
            "propertyStatus".to_string(),
            "sourcePropertyId".to_string(),
            "price".to_string(),
        ]);
        batch.push_row(vec![json!("New"), json!("MLS123"), json!(100000)]);

        let batch = ColumnRename.apply(batch).unwrap();
        assert!(batch.has_column("property_status"));
        assert!(batch.has_column("mls"));
        assert!(!batch.has_column("propertyStatus"));
        assert!(!batch.has_column("sourcePropertyId"));
        // Unmapped columns are untouched
        assert!(batch.has_column("price"));
    }

    #[test]
    fn test_rename_is_idempotent_on_canonical_batch() {
        let batch = Batch::new(vec!["property_status".to_string(), "mls".to_string()]);
        let once = ColumnRename.apply(batch.clone()).unwrap();
        assert_eq!(once.columns(), batch.columns());
    }
}
