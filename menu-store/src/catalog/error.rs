use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Catalog mutation errors
///
/// All variants are user-correctable; a failed mutation never changes the
/// stored catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Name is required")]
    MissingName,

    #[error("Category icon is required")]
    MissingIcon,

    #[error("Name is too long ({len} chars, max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Dish already exists in {category}: {dish_id}")]
    DuplicateDish { category: String, dish_id: String },

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Category index out of range: {0}")]
    CategoryIndexOutOfRange(usize),

    #[error("Dish not found in {category}: {dish_id}")]
    DishNotFound { category: String, dish_id: String },
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingName => ErrorCode::MissingName,
            Self::MissingIcon => ErrorCode::MissingIcon,
            Self::NameTooLong { .. } => ErrorCode::ValueOutOfRange,
            Self::InvalidPrice(_) => ErrorCode::InvalidPrice,
            Self::DuplicateCategory(_) => ErrorCode::DuplicateCategory,
            Self::DuplicateDish { .. } => ErrorCode::DuplicateDish,
            Self::CategoryNotFound(_) | Self::CategoryIndexOutOfRange(_) => {
                ErrorCode::CategoryNotFound
            }
            Self::DishNotFound { .. } => ErrorCode::DishNotFound,
        }
    }

    /// Both duplicate variants collapse to the same user-facing kind
    pub fn is_duplicate_id(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCategory(_) | Self::DuplicateDish { .. }
        )
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            CatalogError::InvalidPrice(value) => app.with_detail("price", value),
            CatalogError::DuplicateCategory(id) | CatalogError::CategoryNotFound(id) => {
                app.with_detail("category", id)
            }
            CatalogError::DuplicateDish { category, dish_id }
            | CatalogError::DishNotFound { category, dish_id } => app
                .with_detail("category", category)
                .with_detail("dish", dish_id),
            CatalogError::CategoryIndexOutOfRange(index) => app.with_detail("index", index),
            CatalogError::NameTooLong { max, .. } => app.with_detail("max", max),
            CatalogError::MissingName | CatalogError::MissingIcon => app,
        }
    }
}
