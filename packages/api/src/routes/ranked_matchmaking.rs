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
use shared::models::matchmaking::responses::{MatchResultResponse, MatchTokenResponse};
use shared::models::matchmaking::{MatchSubmission, QueueEntry};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ranked/find_match", post(find_match))
        .route("/ranked/add_host", post(add_host))
        .route(
            "/ranked/remove_from_queue/{user_name}",
            post(remove_from_queue),
        )
        .route("/ranked/match_token/{user_id}", post(issue_match_token))
        .route("/ranked/submit_result", post(submit_result))
}

async fn find_match(
    State(state): State<AppState>,
    Json(payload): Json<FindMatchRequest>,
) -> Result<Response, ApiError> {
    let host = state
        .ranked_matchmaking_service
        .find_host(&payload.user_name, payload.rating)
        .await
        .map_err(|e| {
            error!("Failed to find ranked match for {}: {}", payload.user_name, e);
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
    state
        .ranked_matchmaking_service
        .join_queue(entry)
        .await
        .map_err(|e| {
            error!("Failed to enqueue {} ranked: {}", payload.user_name, e);
            ApiError::from(e)
        })?;

    debug!("{} joined the ranked queue", payload.user_name);
    Ok(StatusCode::ACCEPTED)
}

async fn remove_from_queue(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let acknowledged = state
        .ranked_matchmaking_service
        .leave_queue(&user_name)
        .await
        .map_err(|e| {
            error!("Failed to dequeue {} ranked: {}", user_name, e);
            ApiError::from(e)
        })?;

    if acknowledged {
        debug!("{} left the ranked queue", user_name);
        Ok(StatusCode::ACCEPTED)
    } else {
        Err(ApiError::QueueRemovalUnacknowledged)
    }
}

/// Hands the session authority a bearer token that must accompany the later
/// result submission. Only ever serve this over an encrypted channel.
async fn issue_match_token(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MatchTokenResponse>, ApiError> {
    let token = state.match_token_service.issue_token(&user_id).map_err(|e| {
        error!("Failed to issue match token for {}: {}", user_id, e);
        ApiError::from(e)
    })?;

    debug!("Match token issued for {}", user_id);
    Ok(Json(MatchTokenResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.match_token_service.validity_seconds(),
    }))
}

async fn submit_result(
    State(state): State<AppState>,
    Json(submission): Json<MatchSubmission>,
) -> Result<(StatusCode, Json<MatchResultResponse>), ApiError> {
    let gems_earned = state
        .match_service
        .submit_result(&submission)
        .await
        .map_err(|e| {
            error!("Failed to settle match result: {}", e);
            ApiError::from(e)
        })?;

    Ok((StatusCode::ACCEPTED, Json(MatchResultResponse { gems_earned })))
}
