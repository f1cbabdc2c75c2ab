use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::user::requests::{LoginRequest, RegisterRequest, UpdatePresetsRequest};
use shared::models::user::User;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/user/{user_name}", get(get_profile))
        .route("/user/update_presets", post(update_presets))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .user_service
        .register_user(&payload.user_name, &payload.password, &payload.email)
        .await
        .map_err(|e| {
            error!("Failed to register user {}: {}", payload.user_name, e);
            ApiError::from(e)
        })?;
    debug!("User registered: {}", user.user_name);
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    state
        .user_service
        .get_user_by_credentials(&payload.user_name, &payload.password)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to authenticate user {}: {}", payload.user_name, e);
            ApiError::from(e)
        })
}

async fn get_profile(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .user_service
        .get_user_profile(&user_name)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to retrieve profile {}: {}", user_name, e);
            ApiError::from(e)
        })
}

async fn update_presets(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePresetsRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .user_service
        .update_presets(&payload.user_name, &payload.password, payload.presets)
        .await
        .map_err(|e| {
            error!("Failed to update presets for {}: {}", payload.user_name, e);
            ApiError::from(e)
        })?;
    debug!("Presets updated for {}", payload.user_name);
    Ok(StatusCode::ACCEPTED)
}
