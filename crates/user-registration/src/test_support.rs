//! Shared fixtures for unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn utc_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn clock_at_timestamp(utc_now: DateTime<Utc>) -> Arc<dyn Clock> {
    Arc::new(FixtureClock { utc_now })
}

/// Clock reading 09:00 UTC on the given day.
pub(crate) fn clock_at(year: i32, month: u32, day: u32) -> Arc<dyn Clock> {
    clock_at_timestamp(utc_timestamp(year, month, day, 9, 0, 0))
}

/// Clock fixed at 2026-10-19 09:00 UTC.
#[fixture]
pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    clock_at(2026, 10, 19)
}
