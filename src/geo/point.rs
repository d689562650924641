use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{GeoError, GeoResult};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A position on the WGS-84 ellipsoid in decimal degrees.
///
/// Fields are public so rows read back from storage can be rebuilt without
/// re-validation; anything that computes with a point calls
/// [`GeoPoint::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// NaN and infinities fail both range checks.
    pub fn validate(&self) -> GeoResult<()> {
        let latitude_ok = (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude);
        let longitude_ok = (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude);
        if latitude_ok && longitude_ok {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    pub fn is_pole(&self) -> bool {
        self.latitude == MAX_LATITUDE || self.latitude == MIN_LATITUDE
    }
}

/// Anything that sits at a single geographic position.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> GeoPoint {
        (**self).location()
    }
}
