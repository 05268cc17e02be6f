//! Reservation records and the booking form payload.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Reservations.
///
/// Serialized as a bare string, e.g. `"1704135600000"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub String);

impl From<&str> for ReservationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ReservationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a confirmed table reservation.
///
/// The field names and JSON shape match what the reservation book writes to
/// storage: `{id, name, date, time, guests, phone}` with `guests` as a number.
///
/// See [`ReservationBook`](crate::booking::ReservationBook) for how reservations
/// are created from a [`ReservationRequest`], checked against slot capacity and
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub name: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub phone: String,
}

impl Reservation {
    /// Whether this reservation occupies the given slot.
    pub fn is_in(&self, slot: &Slot) -> bool {
        self.date == slot.date && self.time == slot.time
    }

    pub fn slot(&self) -> Slot {
        Slot::new(self.date.clone(), self.time.clone())
    }
}

impl Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} at {}, {} guests (phone {})",
            self.name, self.date, self.time, self.guests, self.phone
        )
    }
}

/// A (date, time) pair; the unit of capacity-limited availability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub date: String,
    pub time: String,
}

impl Slot {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

/// Payload for booking a table, as typed into the booking form.
///
/// Values are raw: name and phone are trimmed and every field is validated
/// only when the request reaches the reservation book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
}

impl ReservationRequest {
    /// Party size pre-filled in an empty form.
    pub const DEFAULT_GUESTS: u32 = 2;

    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        guests: u32,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            date: date.into(),
            time: time.into(),
            guests,
        }
    }

    pub fn slot(&self) -> Slot {
        Slot::new(self.date.clone(), self.time.clone())
    }
}

impl Default for ReservationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            date: String::new(),
            time: String::new(),
            guests: Self::DEFAULT_GUESTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_json_shape() {
        let reservation = Reservation {
            id: ReservationId::from("1704135600000"),
            name: "Ayesha".to_string(),
            date: "2024-01-01".to_string(),
            time: "19:00".to_string(),
            guests: 4,
            phone: "0300-1234567".to_string(),
        };

        let value = serde_json::to_value(&reservation).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1704135600000",
                "name": "Ayesha",
                "date": "2024-01-01",
                "time": "19:00",
                "guests": 4,
                "phone": "0300-1234567"
            })
        );
    }

    #[test]
    fn test_slot_membership_requires_exact_match() {
        let reservation = Reservation {
            id: ReservationId::from("1"),
            name: "Bilal".to_string(),
            date: "2024-01-01".to_string(),
            time: "19:00".to_string(),
            guests: 2,
            phone: "0301".to_string(),
        };
        assert!(reservation.is_in(&Slot::new("2024-01-01", "19:00")));
        assert!(!reservation.is_in(&Slot::new("2024-01-01", "19:30")));
        assert!(!reservation.is_in(&Slot::new("2024-01-02", "19:00")));
    }

    #[test]
    fn test_empty_form_defaults_to_two_guests() {
        let request = ReservationRequest::default();
        assert_eq!(request.guests, 2);
        assert!(request.name.is_empty());
    }
}
