use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Geographic coordinates in decimal degrees.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180]; `new` is the
/// only way to build one, so every value in circulation satisfies both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// For compile-time constants already known to be in range.
    pub(crate) const fn from_trusted(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Direction to the sun in the observer's local frame, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunVector {
    /// Along the local vertical, positive upwards.
    pub perp: f64,
    pub north: f64,
    pub east: f64,
}

impl SunVector {
    pub fn magnitude(&self) -> f64 {
        (self.perp * self.perp + self.north * self.north + self.east * self.east).sqrt()
    }
}

/// Horizontal half-plane pair the sun's (north, east) projection falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// north >= 0, east > 0
    NorthEast,
    /// north >= 0, east < 0
    NorthWest,
    /// north < 0, east < 0
    SouthWest,
    /// north < 0, east > 0
    SouthEast,
    /// east == 0, north >= 0
    DueNorth,
    /// east == 0, north < 0
    DueSouth,
}

impl Quadrant {
    pub fn from_components(north: f64, east: f64) -> Self {
        if east > 0.0 {
            if north >= 0.0 {
                Quadrant::NorthEast
            } else {
                Quadrant::SouthEast
            }
        } else if east < 0.0 {
            if north >= 0.0 {
                Quadrant::NorthWest
            } else {
                Quadrant::SouthWest
            }
        } else if north < 0.0 {
            Quadrant::DueSouth
        } else {
            Quadrant::DueNorth
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunAngles {
    /// Degrees clockwise from true north, in [0, 360).
    pub bearing: f64,
    /// Degrees above the horizon, in [-90, 90].
    pub elevation: f64,
    /// Radians counter-clockwise from due east to the point on the horizon below the sun.
    pub theta: f64,
    /// Radians from the local vertical to the sun.
    pub phi: f64,
}

impl SunAngles {
    /// Bearing truncated toward zero, as the original tool printed it.
    pub fn bearing_degrees(&self) -> i32 {
        self.bearing as i32
    }

    pub fn elevation_degrees(&self) -> i32 {
        self.elevation as i32
    }

    pub fn is_above_horizon(&self) -> bool {
        self.phi < std::f64::consts::FRAC_PI_2
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPathConfig {
    pub interval_minutes: u32,
}

impl Default for SkyPathConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySample {
    pub hour: u32,
    pub minute: u32,
    pub time: DateTime<FixedOffset>,
    pub angles: SunAngles,
}

/// A resolved observation point.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub position: GeoPosition,
    /// Known IANA zone, if the geocoder had one.
    pub zone: Option<Tz>,
}

/// Angular phases of the observer and the Earth, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phases {
    /// Observer's rotational phase about the Earth's axis.
    pub rotation: f64,
    pub colatitude: f64,
    /// Orbital phase since the spring equinox.
    pub orbit: f64,
}
