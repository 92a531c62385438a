//! Error types for CellGuard

use thiserror::Error;

use crate::RoomId;

/// Core CellGuard errors
///
/// Credential errors never carry the raw card data, only its shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    // Credential errors
    #[error("Malformed credential: expected 2 fields, got {fields}")]
    MalformedCredential { fields: usize },

    // Graph errors
    #[error("Room not found: {0}")]
    UnknownRoom(RoomId),

    #[error("Duplicate room: {0}")]
    DuplicateRoom(RoomId),
}

/// Result type for CellGuard operations
pub type AccessResult<T> = Result<T, AccessError>;
