//! Data models
//!
//! Shared between the menu engine and the UI layer. Field names serialize in
//! camelCase so stored records stay readable by every app version.

pub mod cart;
pub mod category;
pub mod dish;
pub mod profile;

// Re-exports
pub use cart::*;
pub use category::*;
pub use dish::*;
pub use profile::*;
