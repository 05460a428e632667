//! Auth handlers — signup, login, token refresh.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use crate::dto::request::{LoginRequest, RefreshParams, SignupRequest};
use crate::dto::response::{LoginResponse, RefreshResponse, SignupResponse};
use crate::error::ApiError;
use crate::extractors::BearerToken;
use crate::state::AppState;

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    req.validate()?;

    let user = state.users.register(&req.username, &req.password).await?;

    Ok(Json(SignupResponse {
        user_id: user.id.to_string(),
        username: user.username,
    }))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()?;

    let user = state.users.authenticate(&req.username, &req.password).await?;
    let tokens = state.issuer.issue(user.id)?;

    Ok(Json(LoginResponse {
        user_id: user.id.to_string(),
        username: user.username,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
    }))
}

/// GET /refresh_token
///
/// The access token (expired or not) arrives as the bearer credential; the
/// refresh token arrives as a query parameter. Any rotation failure is
/// propagated as-is, so a rejected pair can never produce a success
/// response.
pub async fn refresh_token(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(params): Query<RefreshParams>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let pair = state
        .refresher
        .refresh(bearer.token(), &params.refresh_token)?;

    Ok(Json(pair.into()))
}
