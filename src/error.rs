// File: src/error.rs
use crate::core::types::DroppedSymbol;
use std::fmt;
use thiserror::Error;

/// Which collaborator a store failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Gesture,
    Phrase,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Gesture => write!(f, "gesture"),
            StoreKind::Phrase => write!(f, "phrase"),
        }
    }
}

/// Failure reported by a store collaborator.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Errors surfaced by a translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Empty, blank, or over-long input. The pipeline did not run.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A store failed or timed out; the call produced no result.
    #[error("{store} store unavailable: {reason}")]
    StoreUnavailable { store: StoreKind, reason: String },

    /// Only raised in strict mode.
    #[error("{} symbol(s) could not be resolved", .0.len())]
    UnresolvedSymbols(Vec<DroppedSymbol>),
}

impl TranslateError {
    pub fn store(store: StoreKind, err: StoreError) -> Self {
        TranslateError::StoreUnavailable {
            store,
            reason: err.0,
        }
    }
}

/// Errors loading tables, snapshots, or configuration.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("malformed config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid table data: {0}")]
    Invalid(String),
}
