//! NOAA solar calculator terms.
//!
//! Each function is one column of the NOAA "calcdetails" spreadsheet. All angles
//! are in degrees on the way in and out; conversion to radians happens at the
//! trigonometric call sites only. [`compute`] strings them together for a site
//! and a local-clock timestamp.

use chrono::{DateTime, Datelike, Timelike, Utc};
use log::{debug, warn};

use crate::types::{Daylight, SiteConfig, SolarSnapshot};

/// Julian day of 1970-01-01T00:00:00 UTC.
pub const JULIAN_UNIX_EPOCH: f64 = 2_440_587.5;
/// Julian day of J2000.0.
pub const J2000: f64 = 2_451_545.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
pub const SECONDS_PER_DAY: u32 = 86_400;
pub const MINUTES_PER_DAY: f64 = 1440.0;
/// Zenith of the sun's upper limb at sunrise, including standard refraction.
pub const SUNRISE_ZENITH: f64 = 90.833;
/// Flat refraction allowance added to the geometric elevation.
pub const REFRACTION_CORRECTION: f64 = 0.1;

pub const MIN_ACCURATE_YEAR: i32 = 1901;
pub const MAX_ACCURATE_YEAR: i32 = 2099;
pub const MAX_ACCURATE_LATITUDE: f64 = 72.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Floored modulo: `x - m * floor(x / m)`. The result has the sign of `m`,
/// unlike `%` which truncates toward zero.
pub fn floor_mod(x: f64, m: f64) -> f64 {
    x - m * (x / m).floor()
}

pub fn normalize_angle(angle: f64) -> f64 {
    floor_mod(angle, 360.0)
}

/// Fraction of the day elapsed at the civil time `dt`, e.g. 0.5 at noon.
pub fn fraction_of_day(dt: &DateTime<Utc>) -> f64 {
    ((dt.second() as f64 / 60.0 + dt.minute() as f64) / 60.0 + dt.hour() as f64) / 24.0
}

/// Astronomical Julian day for a local-clock reading `unix_days + frac_day`
/// taken in a zone `tz_offset` hours from UTC.
pub fn julian_day(unix_days: i64, frac_day: f64, tz_offset: i32) -> f64 {
    JULIAN_UNIX_EPOCH + unix_days as f64 + frac_day - tz_offset as f64 / 24.0
}

pub fn julian_century(jdn: f64) -> f64 {
    (jdn - J2000) / DAYS_PER_CENTURY
}

/// Geometric mean longitude of the sun, in [0, 360).
pub fn geom_mean_long_sun(jcn: f64) -> f64 {
    normalize_angle(280.46646 + jcn * (36000.76983 + jcn * 0.0003032))
}

pub fn geom_mean_anomaly_sun(jcn: f64) -> f64 {
    357.52911 + jcn * (35999.05029 - 0.0001537 * jcn)
}

pub fn earth_orbit_eccentricity(jcn: f64) -> f64 {
    0.016708634 - jcn * (0.000042037 + 0.0000001267 * jcn)
}

pub fn sun_equation_of_center(jcn: f64, gmas: f64) -> f64 {
    let m = deg_to_rad(gmas);
    m.sin() * (1.914602 - jcn * (0.004817 + 0.000014 * jcn))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * jcn)
        + (3.0 * m).sin() * 0.000289
}

pub fn sun_true_longitude(gmls: f64, sec: f64) -> f64 {
    gmls + sec
}

/// Longitude of the ascending node of the moon's orbit, driving nutation.
fn omega(jcn: f64) -> f64 {
    deg_to_rad(125.04 - 1934.136 * jcn)
}

pub fn sun_apparent_longitude(jcn: f64, stl: f64) -> f64 {
    stl - 0.00569 - 0.00478 * omega(jcn).sin()
}

pub fn mean_obliquity_ecliptic(jcn: f64) -> f64 {
    23.0 + (26.0 + (21.448 - jcn * (46.815 + jcn * (0.00059 - jcn * 0.001813))) / 60.0) / 60.0
}

pub fn obliquity_correction(jcn: f64, moe: f64) -> f64 {
    moe + 0.00256 * omega(jcn).cos()
}

pub fn solar_declination(oc: f64, sal: f64) -> f64 {
    rad_to_deg((deg_to_rad(oc).sin() * deg_to_rad(sal).sin()).asin())
}

/// Equation of time in minutes.
pub fn equation_of_time(gmls: f64, gmas: f64, eeo: f64, oc: f64) -> f64 {
    let y = deg_to_rad(oc / 2.0).tan().powi(2);
    let l0 = deg_to_rad(gmls);
    let m = deg_to_rad(gmas);
    4.0 * rad_to_deg(
        y * (2.0 * l0).sin() - 2.0 * eeo * m.sin() + 4.0 * eeo * y * m.sin() * (2.0 * l0).cos()
            - 0.5 * y * y * (4.0 * l0).sin()
            - 1.25 * eeo * eeo * (2.0 * m).sin(),
    )
}

/// Cosine of the sunrise hour angle. Outside [-1, 1] there is no sunrise:
/// above 1 the sun never rises, below -1 it never sets.
pub fn hour_angle_sunrise_cos(latitude: f64, declination: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    deg_to_rad(SUNRISE_ZENITH).cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan()
}

/// Sunrise hour angle in degrees with the polar cases clamped to 0 or 180.
pub fn hour_angle_sunrise(cos_has: f64) -> (f64, Daylight) {
    if cos_has > 1.0 {
        (0.0, Daylight::PolarNight)
    } else if cos_has < -1.0 {
        (180.0, Daylight::PolarDay)
    } else {
        (rad_to_deg(cos_has.acos()), Daylight::Normal)
    }
}

/// Solar noon as a fraction of the UTC day.
pub fn solar_noon_fraction(longitude: f64, eot: f64) -> f64 {
    (720.0 - 4.0 * longitude - eot) / MINUTES_PER_DAY
}

/// True solar time in minutes, in [0, 1440).
pub fn true_solar_time(frac_day: f64, eot: f64, longitude: f64, tz_offset: i32) -> f64 {
    floor_mod(
        frac_day * MINUTES_PER_DAY + eot + 4.0 * longitude - 60.0 * tz_offset as f64,
        MINUTES_PER_DAY,
    )
}

pub fn hour_angle(tst: f64) -> f64 {
    let quarter = tst / 4.0;
    if quarter < 0.0 {
        quarter + 180.0
    } else {
        quarter - 180.0
    }
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    let ha = deg_to_rad(hour_angle);
    let cos_zenith = lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

/// Azimuth clockwise from north, in [0, 360). NaN when the sun sits exactly
/// at the zenith or nadir.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64, zenith: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let z = deg_to_rad(zenith);
    let ratio = (lat.sin() * z.cos() - deg_to_rad(declination).sin()) / (lat.cos() * z.sin());
    let a = rad_to_deg(ratio.clamp(-1.0, 1.0).acos());
    let azimuth = if hour_angle > 0.0 { a + 180.0 } else { 540.0 - a };
    normalize_angle(azimuth)
}

fn to_local_seconds(days: f64) -> i64 {
    (days * SECONDS_PER_DAY as f64).floor() as i64
}

/// Runs the full calculation for `t`, a local-clock reading encoded as seconds
/// since the epoch.
pub fn compute(config: &SiteConfig, t: u32) -> SolarSnapshot {
    // Every u32 second count is representable.
    let civil = DateTime::from_timestamp(i64::from(t), 0).unwrap_or(DateTime::UNIX_EPOCH);
    if !(MIN_ACCURATE_YEAR..=MAX_ACCURATE_YEAR).contains(&civil.year()) {
        warn!("year {} is outside the accurate range", civil.year());
    }
    if config.latitude.abs() > MAX_ACCURATE_LATITUDE {
        warn!("latitude {}° is outside the accurate range", config.latitude);
    }

    let frac_day = fraction_of_day(&civil);
    let unix_days = i64::from(t / SECONDS_PER_DAY);
    let offset_day = config.tz_offset as f64 / 24.0;

    let jcn = julian_century(julian_day(unix_days, frac_day, config.tz_offset));
    let gmls = geom_mean_long_sun(jcn);
    let gmas = geom_mean_anomaly_sun(jcn);
    let eeo = earth_orbit_eccentricity(jcn);
    let sec = sun_equation_of_center(jcn, gmas);
    let stl = sun_true_longitude(gmls, sec);
    let sal = sun_apparent_longitude(jcn, stl);
    let moe = mean_obliquity_ecliptic(jcn);
    let oc = obliquity_correction(jcn, moe);
    let declination = solar_declination(oc, sal);
    let eot = equation_of_time(gmls, gmas, eeo, oc);
    debug!(
        "t={} jcn={:.9} gmls={:.4} gmas={:.4} dec={:.4} eot={:.4}",
        t, jcn, gmls, gmas, declination, eot
    );

    let (has, daylight) =
        hour_angle_sunrise(hour_angle_sunrise_cos(config.latitude, declination));

    let noon = solar_noon_fraction(config.longitude, eot);
    let half_day = has * 4.0 / MINUTES_PER_DAY;
    let base = unix_days as f64 + offset_day;

    let tst = true_solar_time(frac_day, eot, config.longitude, config.tz_offset);
    let ha = hour_angle(tst);
    let zenith = solar_zenith_angle(config.latitude, declination, ha);

    SolarSnapshot {
        solar_noon_time: to_local_seconds(base + noon),
        sunrise_time: to_local_seconds(base + noon - half_day),
        sunset_time: to_local_seconds(base + noon + half_day),
        day_length: 8.0 * has,
        elevation_corrected: 90.0 - zenith + REFRACTION_CORRECTION,
        azimuth: solar_azimuth(config.latitude, declination, ha, zenith),
        zenith,
        declination,
        equation_of_time: eot,
        hour_angle_sunrise: has,
        true_solar_time: tst,
        hour_angle: ha,
        daylight,
    }
}
