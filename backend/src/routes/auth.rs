//! Authentication routes
//!
//! Provides endpoints for user registration and login. Password hashing
//! runs on the blocking thread pool inside the user service.

use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use laptop_inventory_shared::{AuthTokens, ErrorResponse, LoginRequest, RegisterRequest};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = AuthTokens),
        (status = 400, description = "Invalid input or email already registered", body = ErrorResponse)
    )
)]
pub(super) async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthTokens>)> {
    let Json(req) = payload?;
    req.validate().map_err(ApiError::Validation)?;

    let registered = UserService::register(
        state.db(),
        state.jwt(),
        state.passwords(),
        &req.name,
        &req.email,
        &req.password,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(registered.tokens)))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = AuthTokens),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub(super) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthTokens>> {
    let Json(req) = payload?;
    req.validate().map_err(ApiError::Validation)?;

    let authenticated =
        UserService::login(state.db(), state.jwt(), state.passwords(), &req.email, &req.password)
            .await?;

    Ok(Json(authenticated.tokens))
}
