use solar_pos::schedule::*;
use solar_pos::types::{Daylight, SiteConfig};

// 2020-06-21 as whole days since 1970-01-01.
const SOLSTICE_2020: u32 = 18_434;

// ── Time utilities ──

#[test]
fn test_time_roundtrip() {
    for m in [0, 1, 59, 60, 61, 120, 719, 720, 721, 1439] {
        assert_eq!(time_to_minutes(minutes_to_time(m)), m, "minutes={}", m);
    }
}

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(minutes_to_time(390), (6, 30));
}

#[test]
fn test_unix_day_floors_negative_times() {
    assert_eq!(unix_day(0), 0);
    assert_eq!(unix_day(86_399), 0);
    assert_eq!(unix_day(86_400), 1);
    assert_eq!(unix_day(-1), -1);
    assert_eq!(minute_of_day(-60), 1439);
}

// ── daily_events ──

#[test]
fn test_daily_events_length_and_days() {
    let table = daily_events(&SiteConfig::default(), SOLSTICE_2020, 7);
    assert_eq!(table.len(), 7);
    for (i, day) in table.iter().enumerate() {
        assert_eq!(day.unix_day, SOLSTICE_2020 as i64 + i as i64);
    }
}

#[test]
fn test_daily_events_solstice_values() {
    let table = daily_events(&SiteConfig::default(), SOLSTICE_2020, 1);
    let day = &table[0];
    assert_eq!(day.daylight, Daylight::Normal);
    // 04:49:37 and 19:29:33 PST.
    let midnight = SOLSTICE_2020 as i64 * 86_400;
    let (sunrise, sunset) = day.events.unwrap();
    assert!((sunrise - (midnight + 4 * 3600 + 49 * 60 + 37)).abs() <= 2);
    assert!((sunset - (midnight + 19 * 3600 + 29 * 60 + 33)).abs() <= 2);
    assert!((day.day_length - 879.93).abs() < 0.01);
}

#[test]
fn test_daily_events_noon_advances_one_day() {
    let table = daily_events(&SiteConfig::default(), SOLSTICE_2020, 30);
    for pair in table.windows(2) {
        let step = pair[1].solar_noon - pair[0].solar_noon;
        assert!((step - 86_400).abs() < 60, "step={}", step);
    }
}

#[test]
fn test_daily_events_days_shorten_after_solstice() {
    let table = daily_events(&SiteConfig::default(), SOLSTICE_2020 + 5, 60);
    for pair in table.windows(2) {
        assert!(pair[1].day_length < pair[0].day_length);
    }
}

#[test]
fn test_daily_events_polar_day_has_no_events() {
    let table = daily_events(&SiteConfig::new(1, 70.0, 15.0), SOLSTICE_2020, 3);
    for day in &table {
        assert_eq!(day.daylight, Daylight::PolarDay);
        assert_eq!(day.events, None);
        assert_eq!(day.day_length, 1440.0);
    }
}

#[test]
fn test_daily_events_stops_at_timestamp_limit() {
    // Last day whose local noon fits in a u32 timestamp.
    let last_day = (u32::MAX - 43_200) / 86_400;
    let table = daily_events(&SiteConfig::default(), last_day - 1, 10);
    assert_eq!(table.len(), 2);
    assert_eq!(table[1].unix_day, last_day as i64);
}

#[test]
fn test_daily_events_huge_day_count_is_bounded() {
    // Last day whose local noon fits in a u32 timestamp.
    let last_day = (u32::MAX - 43_200) / 86_400;
    let table = daily_events(&SiteConfig::default(), last_day - 1, u32::MAX);
    assert_eq!(table.len(), 2);
    assert!(daily_events(&SiteConfig::default(), last_day + 1, u32::MAX).is_empty());
}

// ── is_daylight ──

#[test]
fn test_is_daylight_lookup() {
    let table = daily_events(&SiteConfig::default(), SOLSTICE_2020, 2);
    let midnight = SOLSTICE_2020 as i64 * 86_400;
    assert_eq!(is_daylight(&table, midnight + 12 * 3600), Some(true));
    assert_eq!(is_daylight(&table, midnight + 2 * 3600), Some(false));
    assert_eq!(is_daylight(&table, midnight + 86_400 + 21 * 3600), Some(false));
    assert_eq!(is_daylight(&table, midnight + 86_400 + 8 * 3600), Some(true));
}

#[test]
fn test_is_daylight_outside_table() {
    let table = daily_events(&SiteConfig::default(), SOLSTICE_2020, 2);
    let midnight = SOLSTICE_2020 as i64 * 86_400;
    assert_eq!(is_daylight(&table, midnight - 1), None);
    assert_eq!(is_daylight(&table, midnight + 2 * 86_400), None);
    assert_eq!(is_daylight(&[], midnight), None);
}

#[test]
fn test_is_daylight_polar() {
    let day_table = daily_events(&SiteConfig::new(1, 70.0, 15.0), SOLSTICE_2020, 1);
    let night_table = daily_events(&SiteConfig::new(1, 70.0, 15.0), 18_982, 1);
    assert_eq!(is_daylight(&day_table, SOLSTICE_2020 as i64 * 86_400 + 3600), Some(true));
    assert_eq!(is_daylight(&night_table, 18_982 * 86_400 + 12 * 3600), Some(false));
}
