// Normalization stages, in dependency order. Each stage is a stateless
// Batch -> Batch transform; malformed cell values degrade to null and a
// stage only fails when a documented source column is missing entirely.

pub mod address;
pub mod coerce;
pub mod column_rename;
pub mod email_split;
pub mod name_split;
pub mod open_house;
pub mod phone;
pub mod status;
pub mod transaction_id;

use crate::batch::Batch;
use crate::error::Result;

/// A single normalization stage applied to a whole batch.
///
/// Stages compose by strict sequential application: a later stage may assume
/// the columns produced by every earlier stage exist.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, batch: Batch) -> Result<Batch>;
}
