use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::AddressRecord;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Coordinate ranges are enforced when the request is turned into a
/// `GeoPoint`, not here.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, max = 255))]
    pub street: String,
    #[validate(length(min = 1, max = 255))]
    pub city: String,
    #[validate(length(min = 1, max = 255))]
    pub country: String,
    /// Degrees, -90 to 90
    pub latitude: f64,
    /// Degrees, -180 to 180
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct AddressResponse {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<AddressRecord> for AddressResponse {
    fn from(record: AddressRecord) -> Self {
        Self {
            id: record.id,
            street: record.street,
            city: record.city,
            country: record.country,
            latitude: record.location.latitude,
            longitude: record.location.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct DeleteAddressResponse {
    pub message: String,
}

impl DeleteAddressResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Address deleted successfully".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAddressesParams {
    /// Number of addresses to skip
    #[serde(default)]
    pub skip: i64,
    /// Page size, clamped to 1..=100
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ListAddressesParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ListAddressesParams {
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    pub fn clamped_limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_LIMIT)
    }
}

const fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQueryParams {
    /// Latitude of the query point in degrees
    pub latitude: f64,
    /// Longitude of the query point in degrees
    pub longitude: f64,
    /// Search radius in kilometers, inclusive
    pub distance: f64,
}
