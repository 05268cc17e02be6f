//! The same-slot capacity check.

use super::BookingError;
use crate::model::{Reservation, Slot};

/// Number of reservations whose date and time both match `slot` exactly.
pub fn booked_in(reservations: &[Reservation], slot: &Slot) -> usize {
    reservations.iter().filter(|r| r.is_in(slot)).count()
}

/// Admits a new booking for `slot` only while fewer than `capacity`
/// reservations hold it.
pub fn check_availability(
    reservations: &[Reservation],
    slot: &Slot,
    capacity: usize,
) -> Result<(), BookingError> {
    if booked_in(reservations, slot) >= capacity {
        return Err(BookingError::SlotFull {
            date: slot.date.clone(),
            time: slot.time.clone(),
        });
    }
    Ok(())
}
