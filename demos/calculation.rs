use chrono::DateTime;

use solar_pos::{dual_axis_angles, single_axis_rotation, SolarCalculator, SystemClock, TimeSource};

fn clock_time(t: i64) -> String {
    DateTime::from_timestamp(t, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "out of range".to_string())
}

fn main() {
    let mut calc = SolarCalculator::default();
    let now = SystemClock::new(calc.tz_offset()).now();
    let s = *calc.snapshot(now);

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: Monterey, CA ({:.2}°N, {:.3}°W), UTC{:+}",
        calc.latitude(),
        -calc.longitude(),
        calc.tz_offset()
    );
    println!("Local time: {}", clock_time(i64::from(now)));
    println!();
    println!("--- Sun Events ---");
    match (calc.sunrise(now), calc.sunset(now)) {
        (Ok(rise), Ok(set)) => {
            println!("Sunrise: {}", clock_time(rise));
            println!("Sunset: {}", clock_time(set));
        }
        (Err(e), _) | (_, Err(e)) => println!("No sunrise or sunset: {}", e),
    }
    println!("Solar noon: {}", clock_time(s.solar_noon_time));
    println!("Day length: {:.1} minutes", s.day_length);
    println!();
    println!("--- Solar Position ---");
    println!("Declination: {:.2}°", s.declination);
    println!("Equation of Time: {:.2} minutes", s.equation_of_time);
    println!("Hour Angle: {:.2}°", s.hour_angle);
    println!("Elevation: {:.2}°", s.elevation_corrected);
    match s.azimuth() {
        Ok(az) => println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", az),
        Err(e) => println!("Azimuth: {}", e),
    }
    println!();
    println!("--- Tracker Angles ---");
    println!(
        "Single-axis tracker rotation: {:.2}°",
        single_axis_rotation(&s, calc.latitude())
    );
    if let Ok(da) = dual_axis_angles(&s) {
        println!("Dual-axis tilt: {:.2}°", da.tilt);
        println!("Dual-axis panel azimuth: {:.2}°", da.panel_azimuth);
    }
}
