//! JSON encoding of the stored reservation list.

use crate::model::Reservation;

/// Serializes the list as a JSON array of `{id, name, date, time, guests, phone}`.
pub fn encode(reservations: &[Reservation]) -> Result<String, serde_json::Error> {
    serde_json::to_string(reservations)
}

/// Parses a stored value. Anything but an array of well-formed records is an error.
pub fn decode(value: &str) -> Result<Vec<Reservation>, serde_json::Error> {
    serde_json::from_str(value)
}
