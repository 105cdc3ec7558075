//! Error types for sun position calculations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not resolve location: {0}")]
    LocationResolution(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("render error: {0}")]
    Render(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
