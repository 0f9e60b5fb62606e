use anyhow::Result;
use tracing::info;

use crate::app::ports::{DocumentSinkPort, RecordSourcePort, TableSinkPort};
use crate::batch::Batch;
use crate::pipeline::Pipeline;

/// Outcome of one normalization run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
}

/// Use case wiring one record source through the pipeline into the table
/// and document sinks.
pub struct NormalizeUseCase {
    source: Box<dyn RecordSourcePort>,
    table_sink: Box<dyn TableSinkPort>,
    document_sink: Box<dyn DocumentSinkPort>,
    pipeline: Pipeline,
}

impl NormalizeUseCase {
    pub fn new(
        source: Box<dyn RecordSourcePort>,
        table_sink: Box<dyn TableSinkPort>,
        document_sink: Box<dyn DocumentSinkPort>,
        pipeline: Pipeline,
    ) -> Self {
        Self {
            source,
            table_sink,
            document_sink,
            pipeline,
        }
    }

    /// Normalize one unit of work end to end.
    pub async fn run(&self) -> Result<RunSummary> {
        let batch = self.source.load().await?;
        info!(rows = batch.row_count(), columns = batch.columns().len(), "loaded input batch");

        let batch: Batch = self.pipeline.run(batch)?;

        self.table_sink.write_table(&batch).await?;
        self.document_sink.write_documents(&batch).await?;

        let summary = RunSummary {
            rows: batch.row_count(),
            columns: batch.columns().len(),
        };
        info!(rows = summary.rows, columns = summary.columns, "batch normalized and delivered");
        Ok(summary)
    }
}
