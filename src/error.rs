//! Error types shared by the synthesizer, introspector and resolver.
//!
//! Every failure is returned to the caller as a distinct variant. Nothing is
//! retried and nothing is downgraded to a default value.

use thiserror::Error;

/// Structural problems caught before any SQL is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("{entity} definition has an empty name")]
    EmptyName { entity: &'static str },

    #[error("{entity} name '{name}' is stored as '{stored}', which does not decode back to it")]
    IrreversibleName {
        entity: &'static str,
        name: String,
        stored: String,
    },

    #[error("link '{link}' must have at least two hub references, found {found}")]
    TooFewHubReferences { link: String, found: usize },

    #[error("satellite '{satellite}' has no hub reference")]
    MissingHubReference { satellite: String },

    #[error("satellite '{satellite}' must have at least one attribute")]
    NoAttributes { satellite: String },

    #[error("column '{column}' appears more than once in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("table '{table}' is invalid: {message}")]
    InvalidTable { table: String, message: String },

    #[error("insert record for '{entity}' is invalid: {message}")]
    InvalidRecord { entity: String, message: String },
}

/// Top-level error for every data vault operation.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Invalid definition: {0}")]
    DefinitionInvalid(#[from] DefinitionError),

    #[error("Table '{table}' does not match the expected shape: {reason}")]
    SchemaMismatch { table: String, reason: String },

    #[error("Invalid data vault table name '{name}': {reason}")]
    NameFormatInvalid { name: String, reason: String },

    #[error("Table '{table}' not found in schema '{schema}'")]
    NotFound { schema: String, table: String },

    #[error("Catalog query failed: {message}")]
    CatalogFailed { message: String },

    #[error("Statement execution failed: {message}")]
    ExecutionFailed { message: String },
}

impl VaultError {
    pub(crate) fn mismatch(table: &str, reason: impl Into<String>) -> Self {
        VaultError::SchemaMismatch {
            table: table.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn bad_name(name: &str, reason: impl Into<String>) -> Self {
        VaultError::NameFormatInvalid {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = VaultError> = std::result::Result<T, E>;
