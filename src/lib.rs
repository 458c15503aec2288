//! Split zipped bank marketing campaign extracts into client, campaign and
//! economics CSV tables.

pub mod error;
pub mod load;
pub mod pipeline;
pub mod table;
pub mod transform;
pub mod write;

#[cfg(test)]
mod testutil;

pub use error::SchemaError;
pub use pipeline::{run, PipelineConfig, RunSummary};
