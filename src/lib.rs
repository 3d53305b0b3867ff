pub mod angles;
pub mod calculator;
pub mod clock;
pub mod error;
pub mod schedule;
pub mod tracker;
pub mod types;

pub use angles::{
    compute, deg_to_rad, equation_of_time, floor_mod, hour_angle, normalize_angle, rad_to_deg,
    solar_azimuth, solar_declination, solar_zenith_angle, true_solar_time,
};

pub use calculator::SolarCalculator;

pub use clock::{FixedClock, SystemClock, TimeSource};

pub use error::{Error, Result};

pub use schedule::{
    daily_events, is_daylight, minute_of_day, minutes_to_time, time_to_minutes, unix_day,
};

pub use tracker::{dual_axis_angles, single_axis_rotation};

pub use types::{DayEvents, Daylight, DualAxisAngles, SiteConfig, SolarSnapshot};
