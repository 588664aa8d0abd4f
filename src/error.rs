//! Error types for the daybook journaling engine
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized for downstream consumers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Not entry owner: {0}")]
    NotEntryOwner(u64),

    #[error("Private entry: {0}")]
    PrivateEntry(u64),

    #[error("Can only view own statistics")]
    StatsAccessDenied,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
