use serde_json::Value;

use crate::batch::Batch;
use crate::error::{NormalizerError, Result};

use super::Stage;

const SOURCE_COLUMN: &str = "open_house";
const OUTPUT_KEYS: [&str; 3] = ["oh_startTime", "oh_company", "oh_contactName"];

/// Extracts open-house event fields from a column that may hold a
/// JSON-encoded object, a JSON-encoded array, an already-decoded value, or
/// nothing at all.
///
/// Multi-event sources are reduced with a first-event-wins policy since
/// downstream consumers need at most one event per listing. Decode failures
/// and non-object values degrade to an empty event; this stage never fails
/// on cell content. The source column is dropped afterwards.
pub struct OpenHouseExtractor;

/// Resolve a cell down to a single event object, or null when there is none.
fn resolve_event(cell: &Value) -> Value {
    match cell {
        Value::Null => Value::Null,
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(decoded) => first_event(&decoded),
            Err(_) => Value::Null,
        },
        other => first_event(other),
    }
}

fn first_event(decoded: &Value) -> Value {
    match decoded {
        Value::Array(items) => items.first().map(first_event).unwrap_or(Value::Null),
        Value::Object(_) => decoded.clone(),
        _ => Value::Null,
    }
}

impl Stage for OpenHouseExtractor {
    fn name(&self) -> &'static str {
        "open_house_extractor"
    }

    fn apply(&self, mut batch: Batch) -> Result<Batch> {
        let src = batch
            .column_index(SOURCE_COLUMN)
            .ok_or_else(|| NormalizerError::MissingColumn(SOURCE_COLUMN.to_string()))?;

        let output_idxs: Vec<usize> = OUTPUT_KEYS
            .iter()
            .map(|key| batch.ensure_column(key))
            .collect();

        for row in 0..batch.row_count() {
            let event = resolve_event(batch.value(row, src));
            for (key, &idx) in OUTPUT_KEYS.iter().zip(&output_idxs) {
                let value = event.get(key).cloned().unwrap_or(Value::Null);
                batch.set(row, idx, value);
            }
        }

        batch.drop_column(SOURCE_COLUMN);
        Ok(batch)
    }
}
