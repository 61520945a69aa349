//! SpamScreen Core
//!
//! Core types and error handling shared across SpamScreen components.
//!
//! This crate provides:
//! - The `Label` and `HistoryRecord` value types
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{HistoryRecord, Label};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{HistoryRecord, Label};
}
