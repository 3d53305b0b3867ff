use log::{debug, trace};

use crate::angles;
use crate::clock::TimeSource;
use crate::error::Result;
use crate::types::{SiteConfig, SolarSnapshot};

/// Site configuration plus a memo of the last computed instant.
///
/// Queries take `&mut self` because they may refresh the memo. Wrap the
/// calculator in a `Mutex` to share it between threads.
#[derive(Debug, Clone)]
pub struct SolarCalculator {
    config: SiteConfig,
    cache: Option<(u32, SolarSnapshot)>,
}

impl SolarCalculator {
    pub fn new(tz_offset: i32, latitude: f64, longitude: f64) -> Self {
        Self::from_config(SiteConfig::new(tz_offset, latitude, longitude))
    }

    pub fn from_config(config: SiteConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    /// Like [`SolarCalculator::new`] but rejects out-of-range site parameters.
    pub fn try_new(tz_offset: i32, latitude: f64, longitude: f64) -> Result<Self> {
        let config = SiteConfig::new(tz_offset, latitude, longitude);
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Replaces the site parameters. Cached results are dropped even when the
    /// next query repeats the last timestamp.
    pub fn configure(&mut self, tz_offset: i32, latitude: f64, longitude: f64) {
        debug!(
            "reconfigured: tz_offset={} latitude={} longitude={}",
            tz_offset, latitude, longitude
        );
        self.config = SiteConfig::new(tz_offset, latitude, longitude);
        self.cache = None;
    }

    pub fn config(&self) -> SiteConfig {
        self.config
    }

    pub fn tz_offset(&self) -> i32 {
        self.config.tz_offset
    }

    pub fn latitude(&self) -> f64 {
        self.config.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.config.longitude
    }

    /// All derived quantities for `t`, recomputed only when `t` changes.
    pub fn snapshot(&mut self, t: u32) -> &SolarSnapshot {
        match self.cache {
            Some((last, _)) if last == t => trace!("cache hit for t={}", t),
            _ => {
                trace!("recomputing for t={}", t);
                self.cache = None;
            }
        }
        let config = &self.config;
        &self
            .cache
            .get_or_insert_with(|| (t, angles::compute(config, t)))
            .1
    }

    pub fn now(&mut self, clock: &impl TimeSource) -> &SolarSnapshot {
        self.snapshot(clock.now())
    }

    pub fn solar_noon(&mut self, t: u32) -> i64 {
        self.snapshot(t).solar_noon_time
    }

    pub fn sunrise(&mut self, t: u32) -> Result<i64> {
        self.snapshot(t).sunrise()
    }

    pub fn sunset(&mut self, t: u32) -> Result<i64> {
        self.snapshot(t).sunset()
    }

    /// Minutes of daylight: 1440 in polar day, 0 in polar night.
    pub fn day_length(&mut self, t: u32) -> f64 {
        self.snapshot(t).day_length
    }

    /// Elevation above the horizon, corrected for refraction.
    pub fn elevation(&mut self, t: u32) -> f64 {
        self.snapshot(t).elevation_corrected
    }

    pub fn azimuth(&mut self, t: u32) -> Result<f64> {
        self.snapshot(t).azimuth()
    }

    pub fn zenith(&mut self, t: u32) -> f64 {
        self.snapshot(t).zenith
    }
}

impl Default for SolarCalculator {
    fn default() -> Self {
        Self::from_config(SiteConfig::default())
    }
}
