//! Booking form validation.

use super::BookingError;
use crate::model::ReservationRequest;
use chrono::{NaiveDate, NaiveTime};

/// Smallest party the form accepts.
pub const MIN_GUESTS: u32 = 1;

/// Largest party the form accepts.
pub const MAX_GUESTS: u32 = 20;

/// Checks a raw form submission and returns it normalized (fields trimmed).
///
/// Blank fields are reported before malformed ones, so an empty form always
/// yields [`BookingError::MissingFields`].
pub fn validate(request: &ReservationRequest) -> Result<ReservationRequest, BookingError> {
    let name = request.name.trim();
    let phone = request.phone.trim();
    let date = request.date.trim();
    let time = request.time.trim();

    if name.is_empty() || phone.is_empty() || date.is_empty() || time.is_empty() {
        return Err(BookingError::MissingFields);
    }

    // Same shapes a browser date/time input submits: 2024-01-01 and 19:00.
    if date.len() != 10 || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(BookingError::InvalidDate(date.to_string()));
    }
    if time.len() != 5 || NaiveTime::parse_from_str(time, "%H:%M").is_err() {
        return Err(BookingError::InvalidTime(time.to_string()));
    }

    if !(MIN_GUESTS..=MAX_GUESTS).contains(&request.guests) {
        return Err(BookingError::InvalidGuests(request.guests));
    }

    Ok(ReservationRequest::new(name, phone, date, time, request.guests))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str, date: &str, time: &str, guests: u32) -> ReservationRequest {
        ReservationRequest::new(name, phone, date, time, guests)
    }

    #[test]
    fn test_trims_name_and_phone() {
        let valid = validate(&request("  Hina ", " 0312-0000000 ", "2024-06-01", "13:15", 3)).unwrap();
        assert_eq!(valid.name, "Hina");
        assert_eq!(valid.phone, "0312-0000000");
        assert_eq!(valid.date, "2024-06-01");
        assert_eq!(valid.time, "13:15");
    }

    #[test]
    fn test_blank_fields_are_missing() {
        assert_eq!(validate(&ReservationRequest::default()), Err(BookingError::MissingFields));
        assert_eq!(
            validate(&request("   ", "0300", "2024-01-01", "19:00", 2)),
            Err(BookingError::MissingFields)
        );
        assert_eq!(
            validate(&request("Ali", "", "2024-01-01", "19:00", 2)),
            Err(BookingError::MissingFields)
        );
        assert_eq!(
            validate(&request("Ali", "0300", "", "19:00", 2)),
            Err(BookingError::MissingFields)
        );
        assert_eq!(
            validate(&request("Ali", "0300", "2024-01-01", "", 2)),
            Err(BookingError::MissingFields)
        );
    }

    #[test]
    fn test_rejects_malformed_date_and_time() {
        assert_eq!(
            validate(&request("Ali", "0300", "01/01/2024", "19:00", 2)),
            Err(BookingError::InvalidDate("01/01/2024".to_string()))
        );
        assert_eq!(
            validate(&request("Ali", "0300", "2024-02-30", "19:00", 2)),
            Err(BookingError::InvalidDate("2024-02-30".to_string()))
        );
        assert_eq!(
            validate(&request("Ali", "0300", "2024-01-01", "7pm", 2)),
            Err(BookingError::InvalidTime("7pm".to_string()))
        );
        assert_eq!(
            validate(&request("Ali", "0300", "2024-01-01", "24:00", 2)),
            Err(BookingError::InvalidTime("24:00".to_string()))
        );
    }

    #[test]
    fn test_guest_bounds() {
        assert_eq!(
            validate(&request("Ali", "0300", "2024-01-01", "19:00", 0)),
            Err(BookingError::InvalidGuests(0))
        );
        assert_eq!(
            validate(&request("Ali", "0300", "2024-01-01", "19:00", 21)),
            Err(BookingError::InvalidGuests(21))
        );
        assert!(validate(&request("Ali", "0300", "2024-01-01", "19:00", 1)).is_ok());
        assert!(validate(&request("Ali", "0300", "2024-01-01", "19:00", 20)).is_ok());
    }
}
