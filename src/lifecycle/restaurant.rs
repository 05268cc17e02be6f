use crate::booking::{time_based_ids, ReservationBook};
use crate::clock::{Clock, UtcClock};
use crate::config::Config;
use crate::model::Menu;
use crate::session::{self, SessionClient};
use crate::storage::{FileStore, KeyValueStore};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors raised while stopping the application.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Session task failed: {0}")]
    SessionTask(#[from] tokio::task::JoinError),
}

/// The running Little Lemon application.
///
/// `Restaurant` is responsible for:
/// - **Wiring**: loading the reservation book from the configured store and
///   handing it, with the house menu, to a session actor
/// - **Lifecycle Management**: spawning the session task and stopping it
///
/// Must be created inside a Tokio runtime.
///
/// # Example
///
/// ```ignore
/// let restaurant = Restaurant::start(&Config::from_env());
///
/// restaurant.session.add_to_cart("b1").await?;
/// let reservation = restaurant.session.book(request).await?;
///
/// restaurant.shutdown().await?;
/// ```
pub struct Restaurant {
    /// Client for driving the session.
    pub session: SessionClient,

    handle: JoinHandle<()>,
}

impl Restaurant {
    /// Starts a session persisting reservations under `config.data_dir`,
    /// with ids taken from the system clock.
    pub fn start(config: &Config) -> Self {
        info!(data_dir = %config.data_dir.display(), "Using file storage");
        Self::with_store(config, FileStore::new(&config.data_dir), UtcClock)
    }

    /// Starts a session on an arbitrary store and clock.
    pub fn with_store<S, C>(config: &Config, store: S, clock: C) -> Self
    where
        S: KeyValueStore,
        C: Clock + 'static,
    {
        let book = ReservationBook::load(store, config, time_based_ids(clock));
        let (actor, session) = session::new(Menu::little_lemon(), book, config.channel_buffer);
        let handle = tokio::spawn(actor.run());

        Self { session, handle }
    }

    /// Stops the session and waits for it to finish.
    ///
    /// Dropping the client closes the session's channel; the actor drains what
    /// is left and exits. Clones of the client handed out earlier keep the
    /// session alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down session...");
        drop(self.session);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
