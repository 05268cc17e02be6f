//! # Session Messages
//!
//! Every UI event becomes one [`SessionRequest`] carrying a oneshot responder.
//! The [`SessionActor`](super::SessionActor) handles them strictly in arrival order.

use super::SessionError;
use crate::cart::Cart;
use crate::model::{Menu, MenuItem, Reservation, ReservationId, ReservationRequest, Slot};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the session.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

#[derive(Debug)]
pub enum SessionRequest {
    /// Snapshot of the menu catalog.
    Menu { respond_to: Response<Menu> },
    AddToCart {
        item_id: String,
        respond_to: Response<MenuItem>,
    },
    /// Snapshot of the cart.
    Cart { respond_to: Response<Cart> },
    ClearCart { respond_to: Response<()> },
    Book {
        request: ReservationRequest,
        respond_to: Response<Reservation>,
    },
    Cancel {
        id: ReservationId,
        respond_to: Response<Reservation>,
    },
    /// Snapshot of the reservation list, newest first.
    Reservations { respond_to: Response<Vec<Reservation>> },
    /// Tables still free in a slot.
    Remaining {
        slot: Slot,
        respond_to: Response<usize>,
    },
}
