use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeoError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid radius: {0} km")]
    InvalidRadius(f64),
}

pub type GeoResult<T> = Result<T, GeoError>;
