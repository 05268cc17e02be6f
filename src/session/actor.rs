//! # Session Actor
//!
//! The `SessionActor` is the single owner of the running application's state:
//! the menu, the cart and the reservation book. It processes
//! [`SessionRequest`]s one at a time, so no state is ever shared or locked.

use super::message::SessionRequest;
use super::SessionError;
use crate::booking::ReservationBook;
use crate::cart::Cart;
use crate::model::Menu;
use crate::storage::KeyValueStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct SessionActor<S: KeyValueStore> {
    receiver: mpsc::Receiver<SessionRequest>,
    menu: Menu,
    cart: Cart,
    book: ReservationBook<S>,
}

impl<S: KeyValueStore> SessionActor<S> {
    pub(crate) fn new(
        receiver: mpsc::Receiver<SessionRequest>,
        menu: Menu,
        book: ReservationBook<S>,
    ) -> Self {
        Self {
            receiver,
            menu,
            cart: Cart::new(),
            book,
        }
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(
            reservations = self.book.len(),
            capacity = self.book.capacity(),
            "Session started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            reservations = self.book.len(),
            cart_items = self.cart.len(),
            "Shutdown"
        );
    }

    fn handle(&mut self, msg: SessionRequest) {
        match msg {
            SessionRequest::Menu { respond_to } => {
                let _ = respond_to.send(Ok(self.menu.clone()));
            }
            SessionRequest::AddToCart {
                item_id,
                respond_to,
            } => {
                debug!(%item_id, "AddToCart");
                let result = self
                    .cart
                    .add_from_menu(&self.menu, &item_id)
                    .cloned()
                    .map_err(SessionError::from);
                match &result {
                    Ok(item) => info!(%item_id, price = item.price, total = self.cart.total(), "Added to cart"),
                    Err(e) => warn!(%item_id, error = %e, "AddToCart failed"),
                }
                let _ = respond_to.send(result);
            }
            SessionRequest::Cart { respond_to } => {
                let _ = respond_to.send(Ok(self.cart.clone()));
            }
            SessionRequest::ClearCart { respond_to } => {
                let cleared = self.cart.len();
                self.cart.clear();
                info!(cleared, "Cart cleared");
                let _ = respond_to.send(Ok(()));
            }
            SessionRequest::Book {
                request,
                respond_to,
            } => {
                let result = self
                    .book
                    .book(request)
                    .cloned()
                    .map_err(SessionError::from);
                let _ = respond_to.send(result);
            }
            SessionRequest::Cancel { id, respond_to } => {
                let result = self.book.cancel(&id).map_err(SessionError::from);
                let _ = respond_to.send(result);
            }
            SessionRequest::Reservations { respond_to } => {
                let _ = respond_to.send(Ok(self.book.reservations().to_vec()));
            }
            SessionRequest::Remaining { slot, respond_to } => {
                let remaining = self.book.remaining(&slot);
                debug!(%slot, remaining, "Remaining");
                let _ = respond_to.send(Ok(remaining));
            }
        }
    }
}
