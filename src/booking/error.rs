//! Error types for the reservation book.
//!
//! The `Display` text of a [`BookingError`] is the message shown next to the
//! booking form.

use crate::model::ReservationId;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that reject a booking or cancellation. None of them mutate the book.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Name, phone, date or time is blank.
    #[error("Please fill name, date, time and phone.")]
    MissingFields,

    #[error("Invalid date {0:?}: expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid time {0:?}: expected HH:MM.")]
    InvalidTime(String),

    #[error("Guests must be between 1 and 20, got {0}.")]
    InvalidGuests(u32),

    /// The slot already holds `capacity` reservations.
    #[error("No tables available at {date} {time}. Try another time.")]
    SlotFull { date: String, time: String },

    /// No reservation has the given id.
    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),
}

/// Errors moving the reservation list in or out of storage.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Reservation data is not valid JSON: {0}")]
    Codec(#[from] serde_json::Error),
}
