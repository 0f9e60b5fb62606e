use anyhow::Result;
use async_trait::async_trait;

use crate::batch::Batch;

/// Supplies one input batch per unit of work (e.g. one extract file).
#[async_trait]
pub trait RecordSourcePort: Send + Sync {
    async fn load(&self) -> Result<Batch>;
}

/// Accepts the canonical output batch as a table. The collaborator behind
/// this port guarantees idempotent upsert keyed on `id`.
#[async_trait]
pub trait TableSinkPort: Send + Sync {
    async fn write_table(&self, batch: &Batch) -> Result<()>;
}

/// Accepts the canonical output batch as one document per row, with
/// null-valued fields omitted rather than stored.
#[async_trait]
pub trait DocumentSinkPort: Send + Sync {
    async fn write_documents(&self, batch: &Batch) -> Result<()>;
}
