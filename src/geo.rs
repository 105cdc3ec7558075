//! Place-name and timezone resolution.
//!
//! Both lookups sit behind traits so callers can plug in an online service;
//! [`Gazetteer`] is a small offline implementation of each.

use chrono_tz::{Africa, America, Asia, Atlantic, Australia, Europe, Pacific, Tz};
use log::{debug, info};

use crate::angles::{deg_to_rad, rad_to_deg};
use crate::error::{Error, Result};
use crate::types::{GeoPosition, Place};

pub const DEFAULT_PLACE_NAME: &str = "San Francisco, CA";
pub const DEFAULT_LATITUDE: f64 = 37.7749;
pub const DEFAULT_LONGITUDE: f64 = -122.4194;

/// Gazetteer cities further than this (degrees of arc) are not used for zone lookup.
pub const NEAREST_CITY_MAX_DEGREES: f64 = 2.0;

pub trait Geocoder {
    fn resolve(&self, place_name: &str) -> Result<Place>;
}

pub trait TimezoneLookup {
    fn zone_for(&self, position: GeoPosition) -> Tz;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazetteerEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub latitude: f64,
    pub longitude: f64,
    pub zone: Tz,
}

const fn city(
    name: &'static str,
    aliases: &'static [&'static str],
    latitude: f64,
    longitude: f64,
    zone: Tz,
) -> GazetteerEntry {
    GazetteerEntry {
        name,
        aliases,
        latitude,
        longitude,
        zone,
    }
}

pub static CITIES: &[GazetteerEntry] = &[
    city(DEFAULT_PLACE_NAME, &["sf"], DEFAULT_LATITUDE, DEFAULT_LONGITUDE, America::Los_Angeles),
    city("Los Angeles, CA", &["la"], 34.0522, -118.2437, America::Los_Angeles),
    city("Seattle, WA", &[], 47.6062, -122.3321, America::Los_Angeles),
    city("Phoenix, AZ", &[], 33.4484, -112.0740, America::Phoenix),
    city("Denver, CO", &[], 39.7392, -104.9903, America::Denver),
    city("Chicago, IL", &[], 41.8781, -87.6298, America::Chicago),
    city("New York, NY", &["new york city", "nyc"], 40.7128, -74.0060, America::New_York),
    city("Anchorage, AK", &[], 61.2181, -149.9003, America::Anchorage),
    city("Honolulu, HI", &[], 21.3069, -157.8583, Pacific::Honolulu),
    city("Vancouver, BC", &[], 49.2827, -123.1207, America::Vancouver),
    city("Toronto, ON", &[], 43.6532, -79.3832, America::Toronto),
    city("Mexico City, Mexico", &["cdmx"], 19.4326, -99.1332, America::Mexico_City),
    city("Bogota, Colombia", &["bogotá"], 4.7110, -74.0721, America::Bogota),
    city("Lima, Peru", &[], -12.0464, -77.0428, America::Lima),
    city("Sao Paulo, Brazil", &["são paulo"], -23.5505, -46.6333, America::Sao_Paulo),
    city("Buenos Aires, Argentina", &[], -34.6037, -58.3816, America::Argentina::Buenos_Aires),
    city("Reykjavik, Iceland", &["reykjavík"], 64.1466, -21.9426, Atlantic::Reykjavik),
    city("London, UK", &[], 51.5074, -0.1278, Europe::London),
    city("Paris, France", &[], 48.8566, 2.3522, Europe::Paris),
    city("Madrid, Spain", &[], 40.4168, -3.7038, Europe::Madrid),
    city("Berlin, Germany", &[], 52.5200, 13.4050, Europe::Berlin),
    city("Rome, Italy", &[], 41.9028, 12.4964, Europe::Rome),
    city("Istanbul, Turkey", &[], 41.0082, 28.9784, Europe::Istanbul),
    city("Moscow, Russia", &[], 55.7558, 37.6173, Europe::Moscow),
    city("Casablanca, Morocco", &[], 33.5731, -7.5898, Africa::Casablanca),
    city("Cairo, Egypt", &[], 30.0444, 31.2357, Africa::Cairo),
    city("Lagos, Nigeria", &[], 6.5244, 3.3792, Africa::Lagos),
    city("Nairobi, Kenya", &[], -1.2921, 36.8219, Africa::Nairobi),
    city("Johannesburg, South Africa", &[], -26.2041, 28.0473, Africa::Johannesburg),
    city("Dubai, UAE", &[], 25.2048, 55.2708, Asia::Dubai),
    city("Karachi, Pakistan", &[], 24.8607, 67.0011, Asia::Karachi),
    city("Mumbai, India", &["bombay"], 19.0760, 72.8777, Asia::Kolkata),
    city("Delhi, India", &["new delhi"], 28.7041, 77.1025, Asia::Kolkata),
    city("Bangkok, Thailand", &[], 13.7563, 100.5018, Asia::Bangkok),
    city("Singapore", &[], 1.3521, 103.8198, Asia::Singapore),
    city("Jakarta, Indonesia", &[], -6.2088, 106.8456, Asia::Jakarta),
    city("Manila, Philippines", &[], 14.5995, 120.9842, Asia::Manila),
    city("Beijing, China", &[], 39.9042, 116.4074, Asia::Shanghai),
    city("Shanghai, China", &[], 31.2304, 121.4737, Asia::Shanghai),
    city("Seoul, South Korea", &[], 37.5665, 126.9780, Asia::Seoul),
    city("Tokyo, Japan", &[], 35.6762, 139.6503, Asia::Tokyo),
    city("Perth, Australia", &[], -31.9505, 115.8605, Australia::Perth),
    city("Sydney, Australia", &[], -33.8688, 151.2093, Australia::Sydney),
    city("Auckland, New Zealand", &[], -36.8485, 174.7633, Pacific::Auckland),
];

pub fn default_place() -> Place {
    Place {
        name: DEFAULT_PLACE_NAME.to_string(),
        position: GeoPosition::from_trusted(DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
        zone: Some(America::Los_Angeles),
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn head(name: &str) -> &str {
    name.split(',').next().unwrap_or(name).trim()
}

fn has_qualifier(name: &str) -> bool {
    name.split_once(',')
        .is_some_and(|(_, rest)| !rest.trim().is_empty())
}

/// Parses "lat,lon" in decimal degrees.
pub fn parse_coordinates(input: &str) -> Option<Result<GeoPosition>> {
    let (lat, lon) = input.split_once(',')?;
    let latitude = lat.trim().parse::<f64>().ok()?;
    let longitude = lon.trim().parse::<f64>().ok()?;
    Some(GeoPosition::new(latitude, longitude))
}

/// Angular distance in degrees between two positions.
pub fn great_circle_degrees(a: GeoPosition, b: GeoPosition) -> f64 {
    let (lat1, lat2) = (deg_to_rad(a.latitude()), deg_to_rad(b.latitude()));
    let dlat = lat2 - lat1;
    let dlon = deg_to_rad(b.longitude() - a.longitude());
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    rad_to_deg(2.0 * h.sqrt().min(1.0).asin())
}

/// Fixed-offset `Etc/GMT` zone from longitude, one hour per 15 degrees.
pub fn nautical_zone(longitude: f64) -> Tz {
    let hours = (longitude / 15.0).round() as i32;
    // Etc/GMT names invert the sign: Etc/GMT+8 is UTC-8.
    let name = if hours == 0 {
        "Etc/GMT".to_string()
    } else {
        format!("Etc/GMT{:+}", -hours)
    };
    name.parse::<Tz>().unwrap_or(Tz::UTC)
}

#[derive(Debug, Clone, Copy)]
pub struct Gazetteer {
    entries: &'static [GazetteerEntry],
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self { entries: CITIES }
    }
}

impl Gazetteer {
    pub fn new(entries: &'static [GazetteerEntry]) -> Self {
        Self { entries }
    }

    /// Looks up a city by full name, bare city name or alias.
    ///
    /// A qualified query ("London, Ontario") only matches an entry with the
    /// same qualifier.
    pub fn find(&self, place_name: &str) -> Option<&GazetteerEntry> {
        let query = normalize_name(place_name);
        let bare = !has_qualifier(&query);
        let query_head = head(&query);
        self.entries.iter().find(|entry| {
            let name = normalize_name(entry.name);
            name == query
                || (bare && head(&name) == query_head)
                || entry
                    .aliases
                    .iter()
                    .any(|alias| *alias == query || (bare && *alias == query_head))
        })
    }

    pub fn nearest(&self, position: GeoPosition) -> Option<(&GazetteerEntry, f64)> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let p = GeoPosition::new(entry.latitude, entry.longitude).ok()?;
                Some((entry, great_circle_degrees(position, p)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Geocoder for Gazetteer {
    fn resolve(&self, place_name: &str) -> Result<Place> {
        if let Some(parsed) = parse_coordinates(place_name) {
            let position = parsed?;
            debug!("'{}' parsed as literal coordinates", place_name);
            return Ok(Place {
                name: format!("{:.4}, {:.4}", position.latitude(), position.longitude()),
                position,
                zone: None,
            });
        }
        let entry = self
            .find(place_name)
            .ok_or_else(|| Error::LocationResolution(place_name.trim().to_string()))?;
        Ok(Place {
            name: entry.name.to_string(),
            position: GeoPosition::new(entry.latitude, entry.longitude)?,
            zone: Some(entry.zone),
        })
    }
}

impl TimezoneLookup for Gazetteer {
    fn zone_for(&self, position: GeoPosition) -> Tz {
        match self.nearest(position) {
            Some((entry, distance)) if distance <= NEAREST_CITY_MAX_DEGREES => {
                debug!("zone from {} ({:.2} deg away)", entry.name, distance);
                entry.zone
            }
            _ => {
                let zone = nautical_zone(position.longitude());
                info!("no gazetteer city nearby, using nautical zone {}", zone.name());
                zone
            }
        }
    }
}

/// The place's own zone when the geocoder supplied one, otherwise `lookup`'s.
pub fn zone_of(place: &Place, lookup: &impl TimezoneLookup) -> Tz {
    place.zone.unwrap_or_else(|| lookup.zone_for(place.position))
}
