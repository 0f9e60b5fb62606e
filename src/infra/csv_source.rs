use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use crate::app::ports::RecordSourcePort;
use crate::batch::Batch;

/// Reads one CSV extract file into a batch.
///
/// Empty cells become null and numeric-looking cells become numbers, so the
/// pipeline sees the same cell types the upstream extract loader produced.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn parse_cell(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(raw.to_string())
}

#[async_trait]
impl RecordSourcePort for CsvFileSource {
    async fn load(&self) -> Result<Batch> {
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to open extract '{}'", self.path.display()))?;

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mut batch = Batch::new(columns);

        for record in reader.records() {
            let record = record?;
            batch.push_row(record.iter().map(parse_cell).collect());
        }
        Ok(batch)
    }
}
