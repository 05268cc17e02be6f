//! Error types for the cart.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested item is not on the menu.
    #[error("Menu item not found: {0}")]
    UnknownItem(String),
}
