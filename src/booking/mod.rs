//! Table reservations: validation, the per-slot capacity check and persistence.
//!
//! The logic is synchronous and independent of the session actor, so it can be
//! driven directly (as the unit tests do) or through
//! [`SessionClient`](crate::session::SessionClient).

pub mod availability;
pub mod book;
pub mod codec;
pub mod error;
pub mod ids;
pub mod validate;

pub use availability::{booked_in, check_availability};
pub use book::ReservationBook;
pub use error::*;
pub use ids::time_based_ids;
pub use validate::{validate, MAX_GUESTS, MIN_GUESTS};
