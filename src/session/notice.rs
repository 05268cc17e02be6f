//! User-visible messages for the outcome of a session request.

use super::SessionError;
use crate::model::Reservation;
use std::fmt::Display;

pub const RESERVATION_CONFIRMED: &str = "Reservation confirmed!";
pub const ORDER_CLEARED: &str = "Order cleared (demo).";

/// An inline message shown next to the form or cart that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// The message for a booking attempt.
    pub fn for_booking(result: &Result<Reservation, SessionError>) -> Self {
        match result {
            Ok(_) => Notice::Success(RESERVATION_CONFIRMED.to_string()),
            Err(e) => Notice::Error(e.to_string()),
        }
    }

    pub fn order_cleared() -> Self {
        Notice::Success(ORDER_CLEARED.to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingError;

    #[test]
    fn test_booking_errors_surface_their_message() {
        let full: Result<Reservation, SessionError> = Err(SessionError::Booking(BookingError::SlotFull {
            date: "2024-01-01".to_string(),
            time: "19:00".to_string(),
        }));
        let notice = Notice::for_booking(&full);
        assert!(notice.is_error());
        assert_eq!(notice.text(), "No tables available at 2024-01-01 19:00. Try another time.");

        let missing: Result<Reservation, SessionError> = Err(BookingError::MissingFields.into());
        assert_eq!(
            Notice::for_booking(&missing).to_string(),
            "Please fill name, date, time and phone."
        );
    }

    #[test]
    fn test_order_cleared_is_success() {
        let notice = Notice::order_cleared();
        assert!(!notice.is_error());
        assert_eq!(notice.text(), "Order cleared (demo).");
    }
}
