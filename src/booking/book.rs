//! # Reservation Book
//!
//! [`ReservationBook`] owns the reservation list and mirrors it to a
//! [`KeyValueStore`] after every confirmed change.
//!
//! ## Operations
//!
//! * **Load**:
//!     1. Reads the value stored under the configured key.
//!     2. A missing value means no reservations yet.
//!     3. A read or parse failure is logged and the book starts empty.
//!
//! * **Book**:
//!     1. Validates the form ([`validate`](super::validate::validate)).
//!     2. Counts reservations in the requested slot and rejects the request at capacity.
//!     3. Assigns a fresh id and inserts the reservation at the head of the list.
//!     4. Saves.
//!
//! * **Cancel**:
//!     1. Removes the reservation with the given id, keeping the others in order.
//!     2. Saves.
//!
//! A rejected request never mutates the list and never saves. A failed save is
//! logged and otherwise ignored; the in-memory list stays authoritative.

use super::availability::{booked_in, check_availability};
use super::validate::validate;
use super::{codec, BookingError, PersistError};
use crate::config::Config;
use crate::model::{Reservation, ReservationId, ReservationRequest, Slot};
use crate::storage::KeyValueStore;
use tracing::{debug, error, info, warn};

pub struct ReservationBook<S: KeyValueStore> {
    store: S,
    key: String,
    capacity: usize,
    reservations: Vec<Reservation>,
    next_id: Box<dyn FnMut() -> ReservationId + Send>,
}

impl<S: KeyValueStore> ReservationBook<S> {
    /// Loads the book from `store`, starting empty if nothing usable is stored.
    ///
    /// # Arguments
    ///
    /// * `store` - Backend holding the reservation list
    /// * `config` - Supplies the storage key and the per-slot capacity
    /// * `next_id` - Id source for new reservations (see [`time_based_ids`](super::time_based_ids))
    pub fn load(
        store: S,
        config: &Config,
        next_id: impl FnMut() -> ReservationId + Send + 'static,
    ) -> Self {
        let key = config.storage_key.clone();
        let reservations = match read(&store, &key) {
            Ok(reservations) => {
                info!(key = %key, count = reservations.len(), "Loaded reservations");
                reservations
            }
            Err(e) => {
                error!(key = %key, error = %e, "Error reading reservations, starting empty");
                Vec::new()
            }
        };

        Self {
            store,
            key,
            capacity: config.capacity,
            reservations,
            next_id: Box::new(next_id),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reservations, newest first.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| &r.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of reservations already holding `slot`.
    pub fn booked(&self, slot: &Slot) -> usize {
        booked_in(&self.reservations, slot)
    }

    /// Tables still free in `slot`.
    pub fn remaining(&self, slot: &Slot) -> usize {
        self.capacity.saturating_sub(self.booked(slot))
    }

    pub fn check_availability(&self, slot: &Slot) -> Result<(), BookingError> {
        check_availability(&self.reservations, slot, self.capacity)
    }

    /// Validates `request`, checks slot capacity and records the reservation.
    ///
    /// On success the new reservation is at index 0 and has been saved.
    pub fn book(&mut self, request: ReservationRequest) -> Result<&Reservation, BookingError> {
        debug!(?request, "Book");
        let request = validate(&request).inspect_err(|e| warn!(error = %e, "Booking rejected"))?;

        let slot = request.slot();
        self.check_availability(&slot).inspect_err(|e| {
            warn!(slot = %slot, capacity = self.capacity, error = %e, "Booking rejected")
        })?;

        let reservation = Reservation {
            id: self.fresh_id(),
            name: request.name,
            date: request.date,
            time: request.time,
            guests: request.guests,
            phone: request.phone,
        };
        info!(id = %reservation.id, slot = %slot, guests = reservation.guests, "Reservation confirmed");
        self.reservations.insert(0, reservation);
        self.persist();

        Ok(&self.reservations[0])
    }

    /// Removes the reservation with `id`. The rest keep their relative order.
    pub fn cancel(&mut self, id: &ReservationId) -> Result<Reservation, BookingError> {
        debug!(%id, "Cancel");
        let Some(index) = self.reservations.iter().position(|r| &r.id == id) else {
            warn!(%id, "Not found");
            return Err(BookingError::NotFound(id.clone()));
        };

        let removed = self.reservations.remove(index);
        info!(%id, size = self.reservations.len(), "Reservation cancelled");
        self.persist();
        Ok(removed)
    }

    /// Overwrites the stored list with the in-memory one.
    pub fn save(&mut self) -> Result<(), PersistError> {
        let value = codec::encode(&self.reservations)?;
        self.store.set(&self.key, &value)?;
        debug!(key = %self.key, count = self.reservations.len(), "Saved reservations");
        Ok(())
    }

    /// Next id from the generator, bumped past every numeric id already in the
    /// list so a restarted session never reissues one.
    fn fresh_id(&mut self) -> ReservationId {
        let id = (self.next_id)();
        let newest = self
            .reservations
            .iter()
            .filter_map(|r| r.id.0.parse::<i64>().ok())
            .max();
        match (id.0.parse::<i64>(), newest) {
            (Ok(candidate), Some(newest)) if candidate <= newest => {
                ReservationId((newest + 1).to_string())
            }
            _ => id,
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            error!(key = %self.key, error = %e, "Error saving reservations");
        }
    }
}

fn read<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<Reservation>, PersistError> {
    match store.get(key)? {
        Some(value) if !value.trim().is_empty() => Ok(codec::decode(&value)?),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::time_based_ids;
    use crate::clock::ManualClock;
    use crate::storage::mock::MockStore;
    use crate::storage::MemoryStore;

    const KEY: &str = "little-lemon-reservations";

    fn book_with<S: KeyValueStore>(store: S, capacity: usize) -> ReservationBook<S> {
        let config = Config::default().with_capacity(capacity);
        ReservationBook::load(store, &config, time_based_ids(ManualClock::new(1_704_135_600_000)))
    }

    fn request(name: &str, date: &str, time: &str) -> ReservationRequest {
        ReservationRequest::new(name, "0300-1234567", date, time, 2)
    }

    fn ids<S: KeyValueStore>(book: &ReservationBook<S>) -> Vec<String> {
        book.reservations().iter().map(|r| r.id.0.clone()).collect()
    }

    #[test]
    fn test_ninth_booking_for_a_full_slot_is_rejected() {
        let mut book = book_with(MemoryStore::new(), 8);

        for i in 1..=8 {
            let result = book.book(request(&format!("Guest {i}"), "2024-01-01", "19:00"));
            assert!(result.is_ok(), "booking {i} should succeed: {result:?}");
        }
        let before = book.reservations().to_vec();

        let ninth = book.book(request("Guest 9", "2024-01-01", "19:00"));

        assert_eq!(
            ninth.map(|r| r.clone()),
            Err(BookingError::SlotFull {
                date: "2024-01-01".to_string(),
                time: "19:00".to_string(),
            })
        );
        assert_eq!(book.reservations(), before.as_slice());
        assert_eq!(book.remaining(&Slot::new("2024-01-01", "19:00")), 0);
        assert!(book.book(request("Guest 9", "2024-01-01", "19:30")).is_ok());
    }

    #[test]
    fn test_accepted_booking_goes_to_the_head() {
        let mut book = book_with(MemoryStore::new(), 8);
        book.book(request("First", "2024-01-01", "18:00")).unwrap();
        book.book(request("Second", "2024-01-02", "18:00")).unwrap();
        let len_before = book.len();

        let created = book.book(request("  Third  ", "2024-01-03", "18:00")).unwrap().clone();

        assert_eq!(book.len(), len_before + 1);
        assert_eq!(book.reservations()[0], created);
        assert_eq!(created.name, "Third");
        let names: Vec<&str> = book.reservations().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Third", "Second", "First"]);
    }

    #[test]
    fn test_ids_are_unique_within_the_same_millisecond() {
        let mut book = book_with(MemoryStore::new(), 8);
        book.book(request("A", "2024-01-01", "18:00")).unwrap();
        book.book(request("B", "2024-01-01", "18:00")).unwrap();
        assert_eq!(ids(&book), ["1704135600001", "1704135600000"]);
    }

    #[test]
    fn test_invalid_request_does_not_mutate_or_save() {
        let store = MockStore::new();
        let mut book = book_with(store.clone(), 8);

        let result = book.book(ReservationRequest::new("", "0300", "2024-01-01", "19:00", 2));

        assert_eq!(result.map(|r| r.clone()), Err(BookingError::MissingFields));
        assert!(book.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_cancel_removes_exactly_one_and_keeps_order() {
        let mut book = book_with(MemoryStore::new(), 8);
        for name in ["A", "B", "C", "D"] {
            book.book(request(name, "2024-01-01", "19:00")).unwrap();
        }
        let target = book.reservations()[2].id.clone();
        let expected: Vec<String> = ids(&book).into_iter().filter(|id| *id != target.0).collect();

        let removed = book.cancel(&target).unwrap();

        assert_eq!(removed.name, "B");
        assert_eq!(ids(&book), expected);
        assert!(book.get(&target).is_none());
    }

    #[test]
    fn test_cancel_unknown_id_is_not_found_and_does_not_save() {
        let store = MockStore::new();
        let mut book = book_with(store.clone(), 8);
        book.book(request("A", "2024-01-01", "19:00")).unwrap();
        let writes = store.writes();

        let missing = ReservationId::from("42");
        assert_eq!(book.cancel(&missing), Err(BookingError::NotFound(missing.clone())));
        assert_eq!(book.len(), 1);
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn test_every_change_is_saved() {
        let store = MemoryStore::new();
        let mut book = book_with(store.clone(), 8);

        let id = book.book(request("A", "2024-01-01", "19:00")).unwrap().id.clone();
        let saved = codec::decode(&store.peek(KEY).unwrap()).unwrap();
        assert_eq!(saved, book.reservations());

        book.cancel(&id).unwrap();
        assert_eq!(store.peek(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_reload_restores_saved_list() {
        let store = MemoryStore::new();
        let mut book = book_with(store.clone(), 8);
        book.book(request("A", "2024-01-01", "19:00")).unwrap();
        book.book(request("B", "2024-01-01", "20:00")).unwrap();

        let reloaded = book_with(store, 8);

        assert_eq!(reloaded.reservations(), book.reservations());
    }

    #[test]
    fn test_ids_stay_unique_across_restart() {
        let store = MemoryStore::new();
        let mut first = book_with(store.clone(), 8);
        first.book(request("A", "2024-01-01", "19:00")).unwrap();
        first.book(request("B", "2024-01-01", "19:00")).unwrap();
        assert_eq!(ids(&first), ["1704135600001", "1704135600000"]);

        // The new session's clock is behind the ids the last one handed out.
        let config = Config::default();
        let mut second = ReservationBook::load(
            store,
            &config,
            time_based_ids(ManualClock::new(1_704_135_600_001)),
        );
        let c = second.book(request("C", "2024-01-01", "20:00")).unwrap().id.clone();
        let d = second.book(request("D", "2024-01-01", "20:00")).unwrap().id.clone();

        assert_eq!(c, ReservationId::from("1704135600002"));
        assert_eq!(d, ReservationId::from("1704135600003"));
        assert_eq!(
            ids(&second),
            ["1704135600003", "1704135600002", "1704135600001", "1704135600000"]
        );
    }

    #[test]
    fn test_blank_value_starts_empty() {
        for blank in ["", "   \n"] {
            let store = MockStore::with_value(KEY, blank);
            let book = book_with(store.clone(), 8);
            assert!(book.is_empty());
            assert_eq!(store.writes(), 0);
        }
    }

    #[test]
    fn test_missing_value_starts_empty() {
        let store = MockStore::new();
        let book = book_with(store.clone(), 8);
        assert!(book.is_empty());
        assert_eq!(store.reads(), 1);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_corrupt_value_starts_empty() {
        let store = MockStore::with_value(KEY, "{ definitely not a list");
        let mut book = book_with(store.clone(), 8);
        assert!(book.is_empty());

        book.book(request("A", "2024-01-01", "19:00")).unwrap();
        assert_eq!(codec::decode(&store.peek(KEY).unwrap()).unwrap().len(), 1);
    }

    #[test]
    fn test_read_failure_starts_empty() {
        let store = MockStore::with_value(KEY, "[]");
        store.fail_reads(true);
        let book = book_with(store, 8);
        assert!(book.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_the_booking() {
        let store = MockStore::new();
        store.fail_writes(true);
        let mut book = book_with(store.clone(), 8);

        let result = book.book(request("A", "2024-01-01", "19:00"));

        assert!(result.is_ok());
        assert_eq!(book.len(), 1);
        assert_eq!(store.writes(), 1);
        assert!(store.peek(KEY).is_none());
        assert!(matches!(book.save(), Err(PersistError::Storage(_))));
    }

    #[test]
    fn test_capacity_counts_preloaded_reservations() {
        let preloaded: Vec<Reservation> = (0..3)
            .map(|i| Reservation {
                id: ReservationId(i.to_string()),
                name: format!("Old {i}"),
                date: "2024-05-05".to_string(),
                time: "21:00".to_string(),
                guests: 2,
                phone: "0300".to_string(),
            })
            .collect();
        let store = MemoryStore::with_value(KEY, codec::encode(&preloaded).unwrap());
        let mut book = book_with(store, 3);

        assert_eq!(book.booked(&Slot::new("2024-05-05", "21:00")), 3);
        assert!(matches!(
            book.book(request("New", "2024-05-05", "21:00")),
            Err(BookingError::SlotFull { .. })
        ));
    }
}
