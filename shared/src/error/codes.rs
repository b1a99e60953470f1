//! Unified error codes for the menu workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 6xxx: Catalog errors (categories and dishes)
//! - 9xxx: System errors (storage, persistence)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize compactly
/// and can be matched on by the UI layer without string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Cart ====================
    /// Cart line not found
    CartLineNotFound = 4001,
    /// Cart is empty
    CartEmpty = 4002,

    // ==================== 6xxx: Catalog ====================
    /// Category not found
    CategoryNotFound = 6001,
    /// Dish not found in its category
    DishNotFound = 6002,
    /// Category id already exists
    DuplicateCategory = 6003,
    /// Dish id already exists in the category
    DuplicateDish = 6004,
    /// Name is missing
    MissingName = 6005,
    /// Category icon is missing
    MissingIcon = 6006,
    /// Price is not a positive number
    InvalidPrice = 6007,

    // ==================== 9xxx: System ====================
    /// Durable write or read failed
    PersistenceFailed = 9001,
    /// Stored record could not be decoded
    StorageCorrupted = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Cart
            ErrorCode::CartLineNotFound => "Cart line not found",
            ErrorCode::CartEmpty => "Cart is empty",

            // Catalog
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DuplicateCategory => "A category with this name already exists",
            ErrorCode::DuplicateDish => "A dish with this name already exists in the category",
            ErrorCode::MissingName => "Name is required",
            ErrorCode::MissingIcon => "Category icon is required",
            ErrorCode::InvalidPrice => "Price must be a positive number",

            // System
            ErrorCode::PersistenceFailed => "Failed to persist data",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
        }
    }

    /// Whether the error is a user-correctable validation failure
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValueOutOfRange
                | ErrorCode::MissingName
                | ErrorCode::MissingIcon
                | ErrorCode::InvalidPrice
                | ErrorCode::DuplicateCategory
                | ErrorCode::DuplicateDish
        )
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Cart
            4001 => Ok(ErrorCode::CartLineNotFound),
            4002 => Ok(ErrorCode::CartEmpty),

            // Catalog
            6001 => Ok(ErrorCode::CategoryNotFound),
            6002 => Ok(ErrorCode::DishNotFound),
            6003 => Ok(ErrorCode::DuplicateCategory),
            6004 => Ok(ErrorCode::DuplicateDish),
            6005 => Ok(ErrorCode::MissingName),
            6006 => Ok(ErrorCode::MissingIcon),
            6007 => Ok(ErrorCode::InvalidPrice),

            // System
            9001 => Ok(ErrorCode::PersistenceFailed),
            9002 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
