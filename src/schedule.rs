//! Day-by-day sun event tables for light-dependent scheduling.

use crate::angles::{self, SECONDS_PER_DAY};
use crate::types::{DayEvents, Daylight, SiteConfig};

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

/// Whole local days since 1970-01-01 for a local-clock timestamp.
pub fn unix_day(t: i64) -> i64 {
    t.div_euclid(i64::from(SECONDS_PER_DAY))
}

/// Minutes past local midnight for a local-clock timestamp.
pub fn minute_of_day(t: i64) -> i32 {
    (t.rem_euclid(i64::from(SECONDS_PER_DAY)) / 60) as i32
}

/// Last day whose local noon still fits in a `u32` timestamp.
const LAST_DAY: u32 = (u32::MAX - SECONDS_PER_DAY / 2) / SECONDS_PER_DAY;

/// Sun events for `days` consecutive local days starting at `first_day`.
///
/// Each day is evaluated at local clock noon. Days that would fall outside the
/// `u32` timestamp range are skipped.
pub fn daily_events(config: &SiteConfig, first_day: u32, days: u32) -> Vec<DayEvents> {
    let reachable = LAST_DAY
        .checked_sub(first_day)
        .map_or(0, |left| days.min(left.saturating_add(1)));
    (first_day..first_day + reachable)
        .map(|day| {
            let snapshot = angles::compute(config, day * SECONDS_PER_DAY + SECONDS_PER_DAY / 2);
            let events = match snapshot.daylight {
                Daylight::Normal => Some((snapshot.sunrise_time, snapshot.sunset_time)),
                Daylight::PolarDay | Daylight::PolarNight => None,
            };
            DayEvents {
                unix_day: i64::from(day),
                solar_noon: snapshot.solar_noon_time,
                events,
                day_length: snapshot.day_length,
                daylight: snapshot.daylight,
            }
        })
        .collect()
}

/// Looks up whether the sun is up at local-clock time `t`.
///
/// Returns `None` when `t` falls on a day not covered by `table`.
pub fn is_daylight(table: &[DayEvents], t: i64) -> Option<bool> {
    let first = table.first()?.unix_day;
    let idx = usize::try_from(unix_day(t) - first).ok()?;
    let day = table.get(idx)?;
    Some(match day.events {
        Some((rise, set)) => t >= rise && t <= set,
        None => day.daylight == Daylight::PolarDay,
    })
}
