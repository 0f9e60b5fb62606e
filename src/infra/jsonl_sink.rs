use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::app::ports::DocumentSinkPort;
use crate::batch::Batch;

/// Writes the canonical batch as JSON-Lines, one document per row.
///
/// Null-valued fields are omitted from each document rather than stored,
/// matching what the search-index collaborator expects.
pub struct JsonLinesDocumentSink {
    path: PathBuf,
}

impl JsonLinesDocumentSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSinkPort for JsonLinesDocumentSink {
    async fn write_documents(&self, batch: &Batch) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }

        let mut out = String::new();
        for row in batch.rows() {
            let mut document = Map::new();
            for (column, value) in batch.columns().iter().zip(row) {
                if !value.is_null() {
                    document.insert(column.clone(), value.clone());
                }
            }
            out.push_str(&serde_json::to_string(&Value::Object(document))?);
            out.push('\n');
        }

        tokio::fs::write(&self.path, out)
            .await
            .with_context(|| format!("failed to write documents '{}'", self.path.display()))?;
        Ok(())
    }
}
