use actix_web::{web, HttpResponse};

use crate::api::dtos::{
    AddressResponse, CreateAddressRequest, DeleteAddressResponse, ErrorResponse,
    ListAddressesParams, NearbyQueryParams,
};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // `/nearby` is registered ahead of `/{id}` so it is not parsed as an id.
    cfg.service(
        web::scope("/addresses")
            .route("", web::post().to(create_address))
            .route("", web::get().to(list_addresses))
            .route("/nearby", web::get().to(nearby_addresses))
            .route("/{id}", web::get().to(get_address))
            .route("/{id}", web::delete().to(delete_address)),
    );
}

#[utoipa::path(
    post,
    path = "/api/v1/addresses",
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address stored", body = AddressResponse),
        (status = 400, description = "Invalid address", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn create_address(
    state: web::Data<AppState>,
    payload: web::Json<CreateAddressRequest>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses",
    params(ListAddressesParams),
    responses(
        (status = 200, description = "Page of stored addresses", body = [AddressResponse]),
    ),
    tag = "addresses"
)]
pub async fn list_addresses(
    state: web::Data<AppState>,
    query: web::Query<ListAddressesParams>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "Stored address", body = AddressResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn get_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/v1/addresses/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address deleted", body = DeleteAddressResponse),
        (status = 404, description = "Address not found", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn delete_address(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let result = state.address_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/addresses/nearby",
    params(NearbyQueryParams),
    responses(
        (status = 200, description = "Addresses within the radius, in store order", body = [AddressResponse]),
        (status = 400, description = "Invalid query point or radius", body = ErrorResponse),
    ),
    tag = "addresses"
)]
pub async fn nearby_addresses(
    state: web::Data<AppState>,
    query: web::Query<NearbyQueryParams>,
) -> AppResult<HttpResponse> {
    let outcome = state
        .address_service
        .find_nearby(query.into_inner())
        .await?;
    state.metrics.record_proximity_query(&outcome.stats);
    Ok(HttpResponse::Ok().json(outcome.addresses))
}
