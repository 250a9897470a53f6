use rand::Rng;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use crate::models::place::Place;

/// The random start is picked so at least this much availability remains.
pub const MIN_LEAD: Duration = Duration::weeks(1);
pub const MAX_STAY_DAYS: i64 = 6;

/// Propose a stay of one to six nights inside `[available_from, available_to]`.
///
/// Returns `None` when the window is shorter than a week.
pub fn random_stay<R: Rng>(
    rng: &mut R,
    available_from: OffsetDateTime,
    available_to: OffsetDateTime,
) -> Option<(OffsetDateTime, OffsetDateTime)> {
    let window = available_to - MIN_LEAD - available_from;
    if window.is_negative() {
        return None;
    }

    let start = available_from + Duration::days(rng.random_range(0..=window.whole_days()));
    let end = start + Duration::days(rng.random_range(1..=MAX_STAY_DAYS));
    Some((start, end))
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StayError {
    #[error("the end date must be after the start date")]
    EndNotAfterStart,

    #[error("the place is not available for those dates")]
    OutsideAvailability,
}

pub fn validate_stay(place: &Place, start: OffsetDateTime, end: OffsetDateTime) -> Result<(), StayError> {
    if end <= start {
        return Err(StayError::EndNotAfterStart);
    }
    if start < place.available_from || end > place.available_to {
        return Err(StayError::OutsideAvailability);
    }
    Ok(())
}
