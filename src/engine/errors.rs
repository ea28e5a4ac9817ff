use thiserror::Error;
use tracing::{debug, error};

/// Errors raised at the edges of the rollup core: parsing tags and decoding
/// rows handed over by the query layer. Reducers themselves never fail.
#[derive(Debug, Error)]
pub enum TsKvError {
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("Unknown aggregation: {0}")]
    UnknownAggregation(String),

    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column {column} has unexpected value: {value}")]
    BadColumn { column: String, value: String },

    #[error("Invalid row: {0}")]
    InvalidRow(#[from] serde_json::Error),
}

impl TsKvError {
    pub fn log_error(&self) {
        match self {
            TsKvError::UnknownEntityType(s) => {
                error!(target: "tskv_rollup::errors", "Unknown entity type: {}", s);
            }
            TsKvError::UnknownAggregation(s) => {
                error!(target: "tskv_rollup::errors", "Unknown aggregation: {}", s);
            }
            TsKvError::UnknownDataType(s) => {
                error!(target: "tskv_rollup::errors", "Unknown data type: {}", s);
            }
            TsKvError::UnsupportedValue(v) => {
                error!(target: "tskv_rollup::errors", "Unsupported value: {}", v);
            }
            TsKvError::MissingColumn(c) => {
                error!(target: "tskv_rollup::errors", "Missing column: {}", c);
            }
            TsKvError::BadColumn { column, value } => {
                error!(target: "tskv_rollup::errors", "Column {} has unexpected value: {}", column, value);
            }
            TsKvError::InvalidRow(e) => {
                error!(target: "tskv_rollup::errors", "Invalid row: {}", e);
                debug!(target: "tskv_rollup::errors", "Row decode error details: {:?}", e);
            }
        }
    }
}
