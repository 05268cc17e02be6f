//! The session controller: one actor owning menu, cart and reservation state.
//!
//! Front ends never touch the state directly. They hold a [`SessionClient`],
//! whose calls become [`SessionRequest`]s processed in order by the
//! [`SessionActor`].

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod notice;

pub use actor::SessionActor;
pub use client::SessionClient;
pub use error::*;
pub use message::{Response, SessionRequest};
pub use notice::Notice;

use crate::booking::ReservationBook;
use crate::model::Menu;
use crate::storage::KeyValueStore;
use tokio::sync::mpsc;

/// Creates a session actor and its client.
///
/// The actor does nothing until [`SessionActor::run`] is spawned.
pub fn new<S: KeyValueStore>(
    menu: Menu,
    book: ReservationBook<S>,
    buffer_size: usize,
) -> (SessionActor<S>, SessionClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let actor = SessionActor::new(receiver, menu, book);
    (actor, SessionClient::new(sender))
}
