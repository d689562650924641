use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use crate::application::AddressService;
use crate::error::{AppError, AppResult};
use crate::observability::AppMetrics;

pub mod addresses;

#[derive(Clone)]
pub struct AppState {
    pub address_service: Arc<AddressService>,
    pub metrics: Arc<AppMetrics>,
    pub metrics_allow_private_only: bool,
    /// `None` when the store is not backed by PostgreSQL; readiness then
    /// reports the service as unavailable.
    pub db_pool: Option<PgPool>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        AppError::BadRequest(format!("Invalid JSON body: {err}")).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _| {
        AppError::BadRequest(format!("Invalid query parameters: {err}")).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _| {
        AppError::BadRequest(format!("Invalid path parameter: {err}")).into()
    }))
    .service(web::scope("/api/v1").configure(addresses::configure))
    .route("/health", web::get().to(health))
    .route("/ready", web::get().to(ready))
    .route("/metrics", web::get().to(metrics));
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let pool = state
        .db_pool
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "Service not ready: no database configured".to_string(),
        })?;

    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: format!("Service not ready: {e}"),
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}

async fn metrics(state: web::Data<AppState>, request: HttpRequest) -> AppResult<HttpResponse> {
    if state.metrics_allow_private_only {
        let ip = request
            .peer_addr()
            .map(|addr| addr.ip())
            .ok_or(AppError::Forbidden)?;

        if !is_private_or_loopback(ip) {
            return Err(AppError::Forbidden);
        }
    }

    let (db_size, db_idle) = pool_stats(&state);
    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(state.metrics.render_prometheus(db_size, db_idle)))
}

fn is_private_or_loopback(ip: std::net::IpAddr) -> bool {
    match ip {
        std::net::IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        std::net::IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local(),
    }
}

fn pool_stats(state: &web::Data<AppState>) -> (u32, usize) {
    state
        .db_pool
        .as_ref()
        .map(|pool| (pool.size(), pool.num_idle()))
        .unwrap_or((0, 0))
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use super::*;

    #[test]
    fn is_private_or_loopback_ipv4_private_true() {
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        assert!(is_private_or_loopback(ip));
    }

    #[test]
    fn is_private_or_loopback_ipv4_public_false() {
        let ip = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));
        assert!(!is_private_or_loopback(ip));
    }

    #[test]
    fn is_private_or_loopback_ipv6_loopback_true() {
        let ip = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert!(is_private_or_loopback(ip));
    }

    #[test]
    fn is_private_or_loopback_ipv6_unique_local_true() {
        let ip = IpAddr::V6(Ipv6Addr::new(0xfd00, 0, 0, 0, 0, 0, 0, 1));
        assert!(is_private_or_loopback(ip));
    }
}
