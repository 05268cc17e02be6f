//! Error types for the session.

use crate::booking::BookingError;
use crate::cart::CartError;
use thiserror::Error;

/// Errors returned by [`SessionClient`](super::SessionClient).
///
/// Domain rejections pass through unchanged, so their `Display` text is still
/// the user-visible message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session closed")]
    Closed,

    #[error("Session dropped response channel")]
    Dropped,

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Cart(#[from] CartError),
}
