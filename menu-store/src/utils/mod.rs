//! Utility module - shared helpers and types
//!
//! - Logging setup
//! - Money arithmetic (rust_decimal)
//! - Form input validation

pub mod logger;
pub mod money;
pub mod validation;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
