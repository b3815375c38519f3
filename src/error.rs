use std::io;

use thiserror::Error;

/// Failures while reading or writing geofence data.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] ::serde_json::Error),
    #[error("invalid geojson: {0}")]
    GeoJson(#[from] ::geojson::Error),
}

pub type Result<T> = ::std::result::Result<T, Error>;
