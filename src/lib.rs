//! # Little Lemon
//!
//! > **Menu, order cart and table booking for the Little Lemon restaurant.**
//!
//! The crate holds the state and rules behind a single-page ordering and
//! booking front end: a static menu, an unpersisted cart, and a reservation
//! book that caps bookings per time slot and mirrors itself to key-value
//! storage after every change.
//!
//! ## Architecture Notes
//!
//! ### 1. One Owner for All State
//! A running application has exactly one [`SessionActor`](session::SessionActor).
//! It owns the menu, the cart and the reservation book and handles UI events one
//! at a time from a channel. Front ends hold a cheap, cloneable
//! [`SessionClient`](session::SessionClient).
//!
//! ### 2. Injected Storage
//! The reservation book only needs "get/set a string by key"
//! ([`KeyValueStore`](storage::KeyValueStore)). Storage failures are logged and
//! never end the session: an unreadable value loads as an empty list, a failed
//! write leaves the in-memory list as it is.
//!
//! ### 3. Typed Rejections
//! Every rejected request is a `thiserror` enum ([`BookingError`](booking::BookingError),
//! [`CartError`](cart::CartError)) whose `Display` text is the message shown to
//! the guest. A rejection never mutates state.
//!
//! ## Module Tour
//!
//! - [`model`]: menu items, reservations, slots and the booking form payload.
//! - [`cart`]: the order cart and its total.
//! - [`booking`]: validation, the per-slot capacity check, ids and persistence.
//! - [`storage`]: the key-value capability and its memory, file and mock backends.
//! - [`session`]: the actor, its messages and its client.
//! - [`lifecycle`]: wiring a [`Restaurant`](lifecycle::Restaurant) from a [`Config`](config::Config), shutdown, tracing.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod booking;
pub mod cart;
pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod session;
pub mod storage;
