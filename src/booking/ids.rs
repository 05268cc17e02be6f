//! Time-based reservation ids.

use crate::clock::Clock;
use crate::model::ReservationId;

/// Returns an id generator yielding the clock's Unix-millisecond timestamp as a
/// decimal string.
///
/// Ids are strictly increasing for the lifetime of the generator: a second call
/// within the same millisecond (or after the clock stepped backwards) yields
/// the previous id plus one.
pub fn time_based_ids<C>(clock: C) -> impl FnMut() -> ReservationId + Send + 'static
where
    C: Clock + 'static,
{
    let mut last = i64::MIN;
    move || {
        let now = clock.now_millis();
        let id = if now > last { now } else { last + 1 };
        last = id;
        ReservationId(id.to_string())
    }
}
