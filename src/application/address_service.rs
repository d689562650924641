use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::api::dtos::{
    AddressResponse, CreateAddressRequest, DeleteAddressResponse, ListAddressesParams,
    NearbyQueryParams,
};
use crate::domain::{GeoPoint, NewAddress};
use crate::error::{AppError, AppResult};
use crate::geo::{GeoError, ProximityFilter, ProximityStats};
use crate::infrastructure::repositories::AddressRepository;

/// Result of a nearby query: matching addresses in store order plus the
/// scan counters.
#[derive(Debug, Clone)]
pub struct NearbyOutcome {
    pub addresses: Vec<AddressResponse>,
    pub stats: ProximityStats,
}

#[derive(Clone)]
pub struct AddressService {
    address_repo: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(address_repo: Arc<dyn AddressRepository>) -> Self {
        Self { address_repo }
    }

    pub async fn create(&self, request: CreateAddressRequest) -> AppResult<AddressResponse> {
        request.validate()?;
        let location = GeoPoint::new(request.latitude, request.longitude)?;

        let new_address = NewAddress {
            street: request.street,
            city: request.city,
            country: request.country,
            location,
        };
        let record = self.address_repo.create(&new_address).await?;

        info!(
            address_id = record.id,
            city = %record.city,
            country = %record.country,
            "address created"
        );
        Ok(record.into())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<AddressResponse> {
        match self.address_repo.find_by_id(id).await? {
            Some(record) => Ok(record.into()),
            None => {
                debug!(address_id = id, "address lookup missed");
                Err(address_not_found())
            }
        }
    }

    pub async fn list(&self, params: ListAddressesParams) -> AppResult<Vec<AddressResponse>> {
        let records = self
            .address_repo
            .list(params.clamped_limit(), params.offset())
            .await?;
        Ok(records.into_iter().map(AddressResponse::from).collect())
    }

    pub async fn delete(&self, id: i64) -> AppResult<DeleteAddressResponse> {
        if !self.address_repo.delete(id).await? {
            debug!(address_id = id, "delete of missing address");
            return Err(address_not_found());
        }

        info!(address_id = id, "address deleted");
        Ok(DeleteAddressResponse::deleted())
    }

    /// Every stored address within `distance` km of the query point,
    /// boundary included, in store order. Any non-negative distance is
    /// accepted; radii beyond the longest geodesic simply match everything.
    pub async fn find_nearby(&self, params: NearbyQueryParams) -> AppResult<NearbyOutcome> {
        let center = GeoPoint {
            latitude: params.latitude,
            longitude: params.longitude,
        };
        let filter = ProximityFilter::new(center, params.distance)?;

        let candidates = self.address_repo.list_all().await?;
        let outcome = filter.apply(candidates).map_err(stored_data_error)?;

        info!(
            latitude = params.latitude,
            longitude = params.longitude,
            radius_km = params.distance,
            evaluated = outcome.stats.evaluated,
            matched = outcome.stats.matched,
            fallbacks = outcome.stats.fallbacks,
            "proximity query completed"
        );

        Ok(NearbyOutcome {
            addresses: outcome
                .matches
                .into_iter()
                .map(AddressResponse::from)
                .collect(),
            stats: outcome.stats,
        })
    }
}

fn address_not_found() -> AppError {
    AppError::NotFound("Address not found".to_string())
}

// The query point was already validated, so a failure here comes from a
// stored row.
fn stored_data_error(err: GeoError) -> AppError {
    warn!(error = %err, "stored address failed coordinate validation");
    AppError::InternalError(anyhow::Error::new(err).context("stored address is corrupted"))
}
