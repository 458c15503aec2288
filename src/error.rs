use thiserror::Error;

/// Raised when a transformer cannot find one of its source columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("`{table}` table requires column `{column}`, which is absent from the input")]
    MissingColumn { table: &'static str, column: String },
}
