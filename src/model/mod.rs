//! Pure data structures shared by the cart, the reservation book and the session.

pub mod menu;
pub mod reservation;

pub use menu::*;
pub use reservation::*;
