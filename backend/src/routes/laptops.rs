//! Laptop API routes
//!
//! Every handler requires a bearer token; the subject id from the token is
//! the owner every query is scoped to.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::LaptopService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use laptop_inventory_shared::{
    CreateLaptopRequest, ErrorResponse, LaptopId, LaptopResponse, UpdateLaptopRequest,
};

/// Create laptop routes
pub fn laptop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_laptops).post(create_laptop))
        .route(
            "/:id",
            get(get_laptop).put(update_laptop).delete(delete_laptop),
        )
}

/// GET /api/v1/laptops - List the caller's laptops
#[utoipa::path(
    get,
    path = "/api/v1/laptops",
    tag = "laptops",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Laptops owned by the caller", body = [LaptopResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub(super) async fn list_laptops(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<LaptopResponse>>> {
    let laptops = LaptopService::list(state.db(), auth.user_id).await?;
    Ok(Json(laptops.into_iter().map(LaptopResponse::from).collect()))
}

/// POST /api/v1/laptops - Create a laptop
#[utoipa::path(
    post,
    path = "/api/v1/laptops",
    tag = "laptops",
    security(("bearer_auth" = [])),
    request_body = CreateLaptopRequest,
    responses(
        (status = 201, description = "Laptop created", body = LaptopResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub(super) async fn create_laptop(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateLaptopRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LaptopResponse>)> {
    let Json(req) = payload?;
    req.validate().map_err(ApiError::Validation)?;

    let laptop = LaptopService::create(state.db(), auth.user_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(laptop.into())))
}

/// GET /api/v1/laptops/:id - Get one of the caller's laptops
#[utoipa::path(
    get,
    path = "/api/v1/laptops/{id}",
    tag = "laptops",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Laptop id")),
    responses(
        (status = 200, description = "The laptop", body = LaptopResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No laptop with this id for the caller", body = ErrorResponse)
    )
)]
pub(super) async fn get_laptop(
    State(state): State<AppState>,
    auth: AuthUser,
    id: Result<Path<LaptopId>, PathRejection>,
) -> ApiResult<Json<LaptopResponse>> {
    let Path(id) = id?;
    let laptop = LaptopService::get_owned(state.db(), auth.user_id, id).await?;
    Ok(Json(laptop.into()))
}

/// PUT /api/v1/laptops/:id - Partially update a laptop
#[utoipa::path(
    put,
    path = "/api/v1/laptops/{id}",
    tag = "laptops",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Laptop id")),
    request_body = UpdateLaptopRequest,
    responses(
        (status = 200, description = "Updated laptop", body = LaptopResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No laptop with this id for the caller", body = ErrorResponse)
    )
)]
pub(super) async fn update_laptop(
    State(state): State<AppState>,
    auth: AuthUser,
    id: Result<Path<LaptopId>, PathRejection>,
    payload: Result<Json<UpdateLaptopRequest>, JsonRejection>,
) -> ApiResult<Json<LaptopResponse>> {
    let Path(id) = id?;
    let Json(req) = payload?;
    req.validate().map_err(ApiError::Validation)?;

    let laptop = LaptopService::update(state.db(), auth.user_id, id, req.into()).await?;
    Ok(Json(laptop.into()))
}

/// DELETE /api/v1/laptops/:id - Delete a laptop
#[utoipa::path(
    delete,
    path = "/api/v1/laptops/{id}",
    tag = "laptops",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Laptop id")),
    responses(
        (status = 204, description = "Laptop deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No laptop with this id for the caller", body = ErrorResponse)
    )
)]
pub(super) async fn delete_laptop(
    State(state): State<AppState>,
    auth: AuthUser,
    id: Result<Path<LaptopId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    LaptopService::delete(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
