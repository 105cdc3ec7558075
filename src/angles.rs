use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chrono::{DateTime, TimeZone};
use log::trace;

use crate::time;
use crate::types::{GeoPosition, Phases, Quadrant, SunAngles, SunVector};

/// Radius of the Earth's orbit, km.
pub const ORBIT_RADIUS_KM: f64 = 149_600_000.0;
/// Mean of the equatorial and polar radii, km.
pub const EARTH_RADIUS_KM: f64 = (6378.0 + 6357.0) / 2.0;
/// Degrees.
pub const EARTH_AXIAL_TILT: f64 = 23.4;
/// Time for one full rotation against the fixed stars.
pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.0905;
pub const SIDEREAL_YEAR_SECONDS: f64 = 366.25 * SIDEREAL_DAY_SECONDS;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Wraps into [0, 360). `rem_euclid` alone can round a tiny negative up to 360.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

pub fn rotation_phase(elapsed: f64, longitude: f64) -> f64 {
    deg_to_rad(longitude) + TAU * elapsed / SIDEREAL_DAY_SECONDS + PI
}

pub fn colatitude(latitude: f64) -> f64 {
    FRAC_PI_2 - deg_to_rad(latitude)
}

pub fn orbital_phase(elapsed: f64) -> f64 {
    TAU * elapsed / SIDEREAL_YEAR_SECONDS
}

pub fn phases(elapsed: f64, position: GeoPosition) -> Phases {
    Phases {
        rotation: rotation_phase(elapsed, position.longitude()),
        colatitude: colatitude(position.latitude()),
        orbit: orbital_phase(elapsed),
    }
}

/// Sun direction in the observer's (vertical, north, east) frame.
///
/// The Earth sits on a circular orbit, its axis tilted against the orbital
/// plane, and turns about that axis. The vertical component is measured from
/// the surface, one Earth radius out from the centre.
pub fn sun_vector(elapsed: f64, position: GeoPosition) -> SunVector {
    let p = phases(elapsed, position);
    let (sin_tilt, cos_tilt) = deg_to_rad(EARTH_AXIAL_TILT).sin_cos();
    let (sin_orb, cos_orb) = p.orbit.sin_cos();
    let (sin_rot, cos_rot) = p.rotation.sin_cos();
    let (sin_col, cos_col) = p.colatitude.sin_cos();

    let perp = ORBIT_RADIUS_KM
        * (sin_tilt * sin_orb * cos_col
            - cos_tilt * sin_orb * sin_rot * sin_col
            - cos_orb * cos_rot * sin_col)
        - EARTH_RADIUS_KM;
    let north = ORBIT_RADIUS_KM
        * (sin_tilt * sin_orb * sin_col
            + cos_tilt * sin_orb * sin_rot * cos_col
            + cos_orb * cos_rot * cos_col);
    let east = ORBIT_RADIUS_KM * (cos_orb * sin_rot - cos_tilt * sin_orb * cos_rot);

    SunVector { perp, north, east }
}

/// Compass bearing in [0, 360) of a horizontal (north, east) direction.
///
/// A zero east component has no arctangent; it resolves to due north (0) or
/// due south (180) by the sign of `north`.
pub fn bearing_from_components(north: f64, east: f64) -> f64 {
    let raw = || rad_to_deg((north / east).atan());
    let bearing = match Quadrant::from_components(north, east) {
        Quadrant::NorthEast => 90.0 - raw(),
        Quadrant::NorthWest | Quadrant::SouthWest => 450.0 - (raw() + 180.0),
        Quadrant::SouthEast => 450.0 - (raw() + 360.0),
        Quadrant::DueNorth => 0.0,
        Quadrant::DueSouth => 180.0,
    };
    normalize_angle(bearing)
}

/// Radians counter-clockwise from due east, in [0, 2pi), for a compass bearing.
pub fn theta_from_bearing(bearing: f64) -> f64 {
    let theta = deg_to_rad(normalize_angle(90.0 - bearing));
    if theta >= TAU {
        0.0
    } else {
        theta
    }
}

/// Angle between the local vertical and `v`, radians in [0, pi].
pub fn zenith_angle(v: &SunVector) -> f64 {
    (v.perp / v.magnitude()).clamp(-1.0, 1.0).acos()
}

pub fn sun_angles(elapsed: f64, position: GeoPosition) -> SunAngles {
    let v = sun_vector(elapsed, position);
    trace!(
        "sun vector at t={:.0}s: perp={:.1} north={:.1} east={:.1}",
        elapsed, v.perp, v.north, v.east
    );
    let bearing = bearing_from_components(v.north, v.east);
    let phi = zenith_angle(&v);
    SunAngles {
        bearing,
        elevation: 90.0 - rad_to_deg(phi),
        theta: theta_from_bearing(bearing),
        phi,
    }
}

pub fn sun_position<Tz: TimeZone>(position: GeoPosition, instant: &DateTime<Tz>) -> SunAngles {
    sun_angles(time::elapsed_seconds(instant), position)
}
