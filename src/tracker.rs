use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::error::Result;
use crate::types::{DualAxisAngles, SolarSnapshot};

/// Rotation of a north-south single-axis tracker, degrees. Negative in the
/// morning (facing east), positive in the afternoon.
pub fn single_axis_rotation(snapshot: &SolarSnapshot, latitude: f64) -> f64 {
    let ha_rad = deg_to_rad(snapshot.hour_angle);
    let lat_rad = deg_to_rad(latitude);
    rad_to_deg(ha_rad.tan().atan2(lat_rad.cos()))
}

/// Panel tilt and azimuth for a dual-axis tracker pointing straight at the sun.
pub fn dual_axis_angles(snapshot: &SolarSnapshot) -> Result<DualAxisAngles> {
    Ok(DualAxisAngles {
        tilt: snapshot.zenith,
        panel_azimuth: normalize_angle(snapshot.azimuth()? + 180.0),
    })
}
