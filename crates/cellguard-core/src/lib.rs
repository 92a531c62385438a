//! CellGuard Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout CellGuard:
//! - Identifiers (RoomId, GrantId)
//! - Person identity with separate match key and disclosed name
//! - Error types

pub mod id;
pub mod person;
pub mod error;

pub use id::*;
pub use person::*;
pub use error::*;
