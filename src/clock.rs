use chrono::Utc;

/// Source of the current local-clock time, as seconds since 1970-01-01.
///
/// On a controller this is typically an RTC that already keeps local time.
pub trait TimeSource {
    fn now(&self) -> u32;
}

/// Reads the host clock and shifts it by a fixed number of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    pub tz_offset: i32,
}

impl SystemClock {
    pub fn new(tz_offset: i32) -> Self {
        Self { tz_offset }
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> u32 {
        let local = Utc::now().timestamp() + i64::from(self.tz_offset) * 3600;
        local.clamp(0, i64::from(u32::MAX)) as u32
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl TimeSource for FixedClock {
    fn now(&self) -> u32 {
        self.0
    }
}
