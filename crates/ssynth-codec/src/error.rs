use ssynth_model::{ConstructError, LookupError};
use thiserror::Error;

/// The envelope or a descriptor does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("payload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("key '{key}' not in submitted payload")]
    MissingKey { key: &'static str },

    #[error("module mismatch: expected '{expected}', found {found}")]
    ModuleMismatch { expected: String, found: String },

    #[error("version mismatch: expected '{expected}', found {found}")]
    VersionMismatch { expected: String, found: String },

    #[error("'constraints' must be an object, found {found}")]
    ConstraintsNotObject { found: &'static str },

    #[error("malformed descriptor for column '{column}': {message}")]
    MalformedDescriptor { column: String, message: String },
}

/// Failure of one encode or decode call. Nothing partial is ever returned.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to resolve '{reference}': {source}")]
    Resolution {
        reference: String,
        #[source]
        source: LookupError,
    },

    #[error("failed to construct {kind} for column '{column}': {source}")]
    Construction {
        column: String,
        kind: String,
        #[source]
        source: ConstructError,
    },

    #[error("constraints must be a mapping, found {found}")]
    InputType { found: &'static str },

    #[error("column '{column}': parameter '{parameter}' is not a finite number")]
    NonFinite { column: String, parameter: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    pub(crate) fn malformed(column: &str, message: impl Into<String>) -> Self {
        Self::Schema(SchemaError::MalformedDescriptor {
            column: column.to_string(),
            message: message.into(),
        })
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
