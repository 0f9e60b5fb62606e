use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use crate::app::ports::TableSinkPort;
use crate::batch::{value_to_string, Batch};

/// Writes the canonical batch as a CSV table, one header row plus one line
/// per record. Nulls are written as empty cells.
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Array(_) | Value::Object(_) => value.to_string(),
        other => value_to_string(other),
    }
}

#[async_trait]
impl TableSinkPort for CsvFileSink {
    async fn write_table(&self, batch: &Batch) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }

        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("failed to create table output '{}'", self.path.display()))?;
        writer.write_record(batch.columns())?;
        for row in batch.rows() {
            writer.write_record(row.iter().map(render_cell))?;
        }
        writer.flush()?;
        Ok(())
    }
}
