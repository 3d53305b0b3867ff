use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The sun stays above the horizon all day; there is no sunrise or sunset.
    #[error("polar day: the sun does not set")]
    PolarDay,
    /// The sun stays below the horizon all day; there is no sunrise or sunset.
    #[error("polar night: the sun does not rise")]
    PolarNight,
    /// Azimuth is degenerate when the sun is exactly at the zenith or nadir.
    #[error("azimuth undefined with the sun at zenith {zenith}°")]
    AzimuthUndefined { zenith: f64 },
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },
    #[error("invalid timezone offset {value}h (must be between -12 and +14)")]
    InvalidTimezoneOffset { value: i32 },
}
