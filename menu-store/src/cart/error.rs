use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Cart errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    #[error("Cart is empty")]
    Empty,
}

impl CartError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::LineNotFound(_) => ErrorCode::CartLineNotFound,
            Self::Empty => ErrorCode::CartEmpty,
        }
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            CartError::LineNotFound(id) => app.with_detail("line", id),
            CartError::Empty => app,
        }
    }
}
