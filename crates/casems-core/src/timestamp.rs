//! Timestamp helpers shared by the entity models.

use chrono::{DateTime, Duration, Utc};

/// Returns the current UTC time.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Returns a timestamp strictly later than `previous`.
///
/// Normally this is just the current time. When the clock has not advanced
/// past `previous` (two updates inside one tick, or a seed record dated in
/// the future) the result is bumped one microsecond past it.
pub fn after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}
