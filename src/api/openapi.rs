use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::addresses::create_address,
        crate::api::routes::addresses::list_addresses,
        crate::api::routes::addresses::nearby_addresses,
        crate::api::routes::addresses::get_address,
        crate::api::routes::addresses::delete_address,
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::CreateAddressRequest,
            crate::api::dtos::AddressResponse,
            crate::api::dtos::DeleteAddressResponse,
            crate::api::dtos::ErrorResponse,
            crate::api::dtos::ErrorDetail,
        )
    ),
    tags(
        (name = "addresses", description = "Address storage and proximity search"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Address Proximity API",
        version = "0.1.0",
        description = "Postal address store with geodesic proximity queries",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn openapi_lists_address_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/addresses"));
        assert!(paths.contains_key("/api/v1/addresses/nearby"));
        assert!(paths.contains_key("/api/v1/addresses/{id}"));
        assert!(paths.contains_key("/health"));
    }
}
