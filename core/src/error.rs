use crate::alloc_prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapgenError {
    /// An operation that identifies a single row was requested for a table
    /// without primary key columns
    #[error("table '{table}' has no primary key, required by {operation}")]
    MissingPrimaryKey {
        table: String,
        operation: &'static str,
    },

    /// A stage name in the configuration does not match any known stage
    #[error("unknown stage '{0}'")]
    UnknownStage(String),

    /// A JDBC type name in the metadata could not be parsed
    #[error("unknown jdbc type '{jdbc_type}' for column '{column}'")]
    UnknownJdbcType { column: String, jdbc_type: String },

    /// Metadata that cannot be adapted at all
    #[error("Metadata error: {0}")]
    Metadata(String),
}

/// Result type for generation
pub type Result<T> = core::result::Result<T, MapgenError>;
