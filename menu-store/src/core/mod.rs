//! Core module - configuration and the shared menu state
//!
//! - [`Config`] - environment configuration
//! - [`MenuState`] - catalog, cart and persistence behind one handle

pub mod config;
pub mod state;

pub use config::Config;
pub use state::MenuState;
