use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::http::header::HeaderName;
use actix_web::{middleware::Logger, web, App, HttpServer};
use address_proximity::api::openapi::configure_swagger_ui;
use address_proximity::api::routes::{self, AppState};
use address_proximity::application::AddressService;
use address_proximity::config::{AppConfig, LoggingConfig};
use address_proximity::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use address_proximity::infrastructure::repositories::AddressRepositoryImpl;
use address_proximity::middleware::request_logging::{
    create_request_span, get_client_ip, get_status_class, get_user_agent,
    request_id_header_value, resolve_request_id, REQUEST_ID_HEADER,
};
use address_proximity::observability::AppMetrics;
use anyhow::Context;
use tracing::{info, Instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_ascii_lowercase()));

    if logging.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load application configuration")?;
    config
        .validate()
        .context("invalid application configuration")?;

    init_tracing(&config.logging);

    let pool = create_pool(&config.database)
        .await
        .context("failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("database migrations failed")?;

    let address_repo = Arc::new(AddressRepositoryImpl::new(pool.clone()));
    let state = AppState {
        address_service: Arc::new(AddressService::new(address_repo)),
        metrics: Arc::new(AppMetrics::default()),
        metrics_allow_private_only: config.metrics.allow_private_only,
        db_pool: Some(pool),
    };

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let metrics = state.metrics.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.environment,
        "starting address proximity service"
    );

    HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let request_id = resolve_request_id(&req);
                let path = req.path().to_string();
                let method = req.method().to_string();
                let client_ip = get_client_ip(&req);
                let user_agent = get_user_agent(&req);
                let span = create_request_span(&request_id, &method, &path, &client_ip, &user_agent);
                let metrics = metrics.clone();
                let start = Instant::now();

                let fut = span.in_scope(|| srv.call(req));
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        HeaderName::from_static(REQUEST_ID_HEADER),
                        request_id_header_value(&request_id),
                    );

                    let status = response.status().as_u16();
                    let latency_ms = start.elapsed().as_millis() as u64;
                    metrics.record_request(status, latency_ms);

                    info!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        status = status,
                        status_class = get_status_class(status),
                        latency_ms = latency_ms,
                        client_ip = %client_ip,
                        user_agent = %user_agent,
                        "request completed"
                    );
                    Ok::<_, actix_web::Error>(response)
                }
                .instrument(span)
            })
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(configure_swagger_ui)
    })
    .bind((bind_host, bind_port))
    .context("failed to bind http listener")?
    .run()
    .await
    .context("http server terminated with an error")
}
