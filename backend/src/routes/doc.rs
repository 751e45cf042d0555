//! OpenAPI document for the REST API, served at `/api-docs/openapi.json`

use super::{auth, health, laptops, profile};
use axum::Json;
use laptop_inventory_shared::{
    AuthTokens, CreateLaptopRequest, ErrorDetail, ErrorResponse, LaptopResponse, LoginRequest,
    RegisterRequest, UpdateLaptopRequest, UserProfile,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the bearer token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "laptops", version = "v1"),
    modifiers(&SecurityAddon),
    paths(
        auth::register,
        auth::login,
        profile::get_profile,
        laptops::list_laptops,
        laptops::create_laptop,
        laptops::get_laptop,
        laptops::update_laptop,
        laptops::delete_laptop,
        health::health_check,
        health::readiness_check,
        health::liveness_check,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        AuthTokens,
        CreateLaptopRequest,
        UpdateLaptopRequest,
        LaptopResponse,
        UserProfile,
        ErrorResponse,
        ErrorDetail,
        health::HealthResponse,
        health::HealthChecks,
        health::CheckStatus,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "profile", description = "The authenticated user"),
        (name = "laptops", description = "Laptops owned by the authenticated user"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
