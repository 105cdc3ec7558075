pub mod angles;
pub mod error;
pub mod geo;
pub mod logging;
pub mod plot;
pub mod sky_path;
pub mod time;
pub mod types;

pub use angles::{
    bearing_from_components, colatitude, deg_to_rad, normalize_angle, orbital_phase, phases,
    rad_to_deg, rotation_phase, sun_angles, sun_position, sun_vector, theta_from_bearing,
    zenith_angle, EARTH_AXIAL_TILT, EARTH_RADIUS_KM, ORBIT_RADIUS_KM, SIDEREAL_DAY_SECONDS,
    SIDEREAL_YEAR_SECONDS,
};

pub use error::{Error, Result};

pub use geo::{default_place, nautical_zone, zone_of, Gazetteer, Geocoder, TimezoneLookup};

pub use sky_path::{intervals_per_day, minutes_to_time, SkyPath, SkyPathIter};

pub use time::{
    elapsed_seconds, epoch, instant_at, localize, now_in, parse_date_time, parse_local,
    EPOCH_UNIX_SECONDS,
};

pub use types::{
    GeoPosition, Phases, Place, Quadrant, SkyPathConfig, SkySample, SunAngles, SunVector,
};
