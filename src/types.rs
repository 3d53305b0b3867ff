use crate::error::{Error, Result};

/// Site parameters for the solar calculation.
///
/// `tz_offset` is whole hours from UTC, negative west of Greenwich. Latitude is
/// positive north, longitude negative west. Results are only meaningful for
/// latitudes within about ±72°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub tz_offset: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl SiteConfig {
    pub fn new(tz_offset: i32, latitude: f64, longitude: f64) -> Self {
        Self {
            tz_offset,
            latitude,
            longitude,
        }
    }

    /// Range-checks the site. The calculator itself never calls this.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidLatitude {
                value: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidLongitude {
                value: self.longitude,
            });
        }
        if !(-12..=14).contains(&self.tz_offset) {
            return Err(Error::InvalidTimezoneOffset {
                value: self.tz_offset,
            });
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        // Monterey, CA on Pacific Standard Time.
        Self {
            tz_offset: -8,
            latitude: 36.62,
            longitude: -121.904,
        }
    }
}

/// Whether the sun crosses the horizon on the computed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Daylight {
    Normal,
    PolarDay,
    PolarNight,
}

/// Every quantity derived for one instant.
///
/// Instants are seconds since 1970-01-01 on the site's local clock, the same
/// encoding as the input timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarSnapshot {
    pub solar_noon_time: i64,
    pub sunrise_time: i64,
    pub sunset_time: i64,
    /// Minutes of daylight.
    pub day_length: f64,
    pub elevation_corrected: f64,
    pub azimuth: f64,
    pub zenith: f64,
    pub declination: f64,
    /// Minutes.
    pub equation_of_time: f64,
    pub hour_angle_sunrise: f64,
    /// Minutes past true solar midnight, in [0, 1440).
    pub true_solar_time: f64,
    pub hour_angle: f64,
    pub daylight: Daylight,
}

impl SolarSnapshot {
    fn daylight_check(&self) -> Result<()> {
        match self.daylight {
            Daylight::Normal => Ok(()),
            Daylight::PolarDay => Err(Error::PolarDay),
            Daylight::PolarNight => Err(Error::PolarNight),
        }
    }

    pub fn sunrise(&self) -> Result<i64> {
        self.daylight_check()?;
        Ok(self.sunrise_time)
    }

    pub fn sunset(&self) -> Result<i64> {
        self.daylight_check()?;
        Ok(self.sunset_time)
    }

    pub fn azimuth(&self) -> Result<f64> {
        if self.azimuth.is_finite() {
            Ok(self.azimuth)
        } else {
            Err(Error::AzimuthUndefined {
                zenith: self.zenith,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualAxisAngles {
    pub tilt: f64,
    pub panel_azimuth: f64,
}

/// Sun events for one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvents {
    pub unix_day: i64,
    pub solar_noon: i64,
    /// Sunrise and sunset, absent in polar day or night.
    pub events: Option<(i64, i64)>,
    pub day_length: f64,
    pub daylight: Daylight,
}
