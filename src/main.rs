//! Scripted walk through a Little Lemon session: browse the menu, fill and
//! clear the cart, book a table and cancel it.
//!
//! Reservations persist under `LITTLE_LEMON_DATA_DIR` between runs.

use little_lemon::config::Config;
use little_lemon::lifecycle::{setup_tracing, Restaurant};
use little_lemon::model::{ReservationRequest, Slot};
use little_lemon::session::{Notice, SessionError};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting Little Lemon");

    let restaurant = Restaurant::start(&config);
    let session = &restaurant.session;

    async {
        let menu = session.menu().await?;
        for category in menu.categories() {
            for item in &category.items {
                info!(category = %category.title, item = %item.name, price = item.price, "Menu");
            }
        }

        for id in ["b1", "p1", "d1"] {
            session.add_to_cart(id).await?;
        }
        let total = session.cart_total().await?;
        info!(total, "Your order");

        session.clear_cart().await?;
        let total = session.cart_total().await?;
        info!(notice = %Notice::order_cleared(), total, "Your order");
        Ok::<_, SessionError>(())
    }
    .instrument(tracing::info_span!("ordering"))
    .await
    .map_err(|e| e.to_string())?;

    async {
        let slot = Slot::new("2024-01-01", "19:00");
        let remaining = session.remaining(slot.clone()).await?;
        info!(%slot, remaining, "Availability");

        let result = session
            .book(ReservationRequest::new("Ayesha Khan", "0300-1234567", "2024-01-01", "19:00", 4))
            .await;
        info!(notice = %Notice::for_booking(&result), "Booking form");

        let incomplete = session.book(ReservationRequest::default()).await;
        info!(notice = %Notice::for_booking(&incomplete), "Booking form");

        for reservation in session.reservations().await? {
            info!(id = %reservation.id, %reservation, "Your reservations");
        }

        if let Ok(reservation) = result {
            session.cancel(reservation.id).await?;
        }
        let count = session.reservations().await?.len();
        info!(count, "Your reservations");
        Ok::<_, SessionError>(())
    }
    .instrument(tracing::info_span!("booking"))
    .await
    .map_err(|e| e.to_string())?;

    restaurant.shutdown().await.map_err(|e| e.to_string())?;

    info!("Done");
    Ok(())
}
