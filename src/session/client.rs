//! # Session Client
//!
//! Provides the async API a front end uses to drive the session.

use super::message::{Response, SessionRequest};
use super::SessionError;
use crate::cart::Cart;
use crate::model::{Menu, MenuItem, Reservation, ReservationId, ReservationRequest, Slot};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A cheap-to-clone handle to a running [`SessionActor`](super::SessionActor).
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Dropped)?
    }

    pub async fn menu(&self) -> Result<Menu, SessionError> {
        self.request(|respond_to| SessionRequest::Menu { respond_to })
            .await
    }

    /// Adds the menu item with `item_id` to the cart and returns it.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, item_id: &str) -> Result<MenuItem, SessionError> {
        debug!("Sending request");
        let item_id = item_id.to_string();
        self.request(|respond_to| SessionRequest::AddToCart {
            item_id,
            respond_to,
        })
        .await
    }

    pub async fn cart(&self) -> Result<Cart, SessionError> {
        self.request(|respond_to| SessionRequest::Cart { respond_to })
            .await
    }

    pub async fn cart_total(&self) -> Result<u64, SessionError> {
        Ok(self.cart().await?.total())
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::ClearCart { respond_to })
            .await
    }

    /// Submits the booking form.
    ///
    /// Returns the confirmed reservation, or the rejection whose text belongs
    /// next to the form.
    #[instrument(skip(self))]
    pub async fn book(&self, request: ReservationRequest) -> Result<Reservation, SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::Book {
            request,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: ReservationId) -> Result<Reservation, SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::Cancel { id, respond_to })
            .await
    }

    pub async fn reservations(&self) -> Result<Vec<Reservation>, SessionError> {
        self.request(|respond_to| SessionRequest::Reservations { respond_to })
            .await
    }

    /// Tables still free at `slot`.
    pub async fn remaining(&self, slot: Slot) -> Result<usize, SessionError> {
        self.request(|respond_to| SessionRequest::Remaining { slot, respond_to })
            .await
    }
}
