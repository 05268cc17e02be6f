//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber used by the binary.
//!
//! ## What Gets Traced
//!
//! - **Session Lifecycle**: startup (with the number of stored reservations), shutdown
//! - **Cart**: items added (with running total), cart cleared
//! - **Reservations**: confirmed bookings, cancellations, rejected requests with the reason
//! - **Storage**: load and save failures (logged, never fatal)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Confirmations and rejections
//! RUST_LOG=info cargo run
//!
//! # Every request payload and storage write
//! RUST_LOG=debug cargo run
//!
//! # Only the reservation book
//! RUST_LOG=little_lemon::booking=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a booking session reads like:
//!
//! ```text
//! INFO Loaded reservations key=little-lemon-reservations count=0
//! INFO Session started reservations=0 capacity=8
//! INFO Reservation confirmed id=1704135600000 slot=2024-01-01 19:00 guests=4
//! WARN Booking rejected slot=2024-01-01 19:00 capacity=8 error=No tables available at 2024-01-01 19:00. Try another time.
//! ```

/// Initializes structured logging, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
