//! Timestamp helpers for record bookkeeping.
//!
//! Timestamps are persisted as INTEGER microseconds since the Unix epoch,
//! so every value handed out here is already truncated to microseconds and
//! survives a store round-trip unchanged.

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Current time, truncated to microsecond precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A timestamp strictly later than `previous`, normally the current time.
///
/// Used for `updated_at` so consecutive updates never share a value even
/// when the wall clock has not moved (or moved backwards).
pub fn next_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Whether `ts` survives [`to_micros`] unchanged.
pub fn is_whole_micros(ts: DateTime<Utc>) -> bool {
    ts.timestamp_subsec_nanos() % 1_000 == 0
}

pub fn to_micros(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_micros()
}

pub fn from_micros(micros: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
}
