//! Startup, shutdown and observability.
//!
//! - [`Restaurant`] - loads the reservation book, spawns the session and stops it
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod logging;
pub mod restaurant;

pub use self::logging::setup_tracing;
pub use self::restaurant::{LifecycleError, Restaurant};
