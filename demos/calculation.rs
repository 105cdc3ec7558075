use chrono::TimeZone;
use chrono_tz::America::Los_Angeles;

use sun_position::angles::{sun_position, sun_vector};
use sun_position::time::elapsed_seconds;
use sun_position::types::{GeoPosition, SkyPathConfig};
use sun_position::SkyPath;

fn main() -> sun_position::Result<()> {
    let position = GeoPosition::new(37.7749, -122.4194)?;
    let dt = Los_Angeles.with_ymd_and_hms(2020, 6, 21, 13, 0, 0).unwrap();

    let t = elapsed_seconds(&dt);
    let v = sun_vector(t, position);
    let sun = sun_position(position, &dt);

    println!("=== Sun Position Calculation Example ===");
    println!(
        "Location: San Francisco, CA ({:.4}°N, {:.4}°W)",
        position.latitude(),
        -position.longitude()
    );
    println!("Date/Time: {}", dt);
    println!("Seconds since epoch: {:.0}", t);
    println!();
    println!("--- Local frame vector (km) ---");
    println!("Perpendicular: {:.1}", v.perp);
    println!("North: {:.1}", v.north);
    println!("East: {:.1}", v.east);
    println!();
    println!("--- Angles ---");
    println!("Bearing: {:.2}° (0°=N, 90°=E, 180°=S)", sun.bearing);
    println!("Elevation: {:.2}°", sun.elevation);
    println!();
    println!("--- Sky path (above horizon) ---");
    let path = SkyPath::new(&dt, position, SkyPathConfig::default())?;
    for s in path.above_horizon().filter(|s| s.minute == 0) {
        println!(
            "{:02}:00  bearing {:6.1}°  elevation {:5.1}°",
            s.hour, s.angles.bearing, s.angles.elevation
        );
    }
    Ok(())
}
