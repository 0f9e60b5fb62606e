// Filesystem adapters behind the application ports.

pub mod csv_sink;
pub mod csv_source;
pub mod jsonl_sink;
