use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::matchmaking::requests::{FindMatchRequest, JoinQueueRequest};
use shared::models::matchmaking::QueueEntry;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/matchmaking/find_match", post(find_match))
        .route("/matchmaking/add_host", post(add_host))
        .route(
            "/matchmaking/remove_from_queue/{user_name}",
            post(remove_from_queue),
        )
}

async fn find_match(
    State(state): State<AppState>,
    Json(payload): Json<FindMatchRequest>,
) -> Result<Response, ApiError> {
    let host = state
        .matchmaking_service
        .find_host(&payload.user_name, payload.rating)
        .await
        .map_err(|e| {
            error!("Failed to find match for {}: {}", payload.user_name, e);
            ApiError::from(e)
        })?;

    // An empty queue is a content-less success, not a failure
    match host {
        Some(entry) => Ok((StatusCode::OK, Json(entry)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

async fn add_host(
    State(state): State<AppState>,
    Json(payload): Json<JoinQueueRequest>,
) -> Result<StatusCode, ApiError> {
    let entry = QueueEntry::new(&payload.user_name, payload.rating, &payload.join_code);
    state.matchmaking_service.join_queue(entry).await.map_err(|e| {
        error!("Failed to enqueue {}: {}", payload.user_name, e);
        ApiError::from(e)
    })?;

    debug!("{} joined the queue", payload.user_name);
    Ok(StatusCode::ACCEPTED)
}

async fn remove_from_queue(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let acknowledged = state
        .matchmaking_service
        .leave_queue(&user_name)
        .await
        .map_err(|e| {
            error!("Failed to dequeue {}: {}", user_name, e);
            ApiError::from(e)
        })?;

    if acknowledged {
        debug!("{} left the queue", user_name);
        Ok(StatusCode::ACCEPTED)
    } else {
        Err(ApiError::QueueRemovalUnacknowledged)
    }
}
