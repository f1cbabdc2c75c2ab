use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::matchmaking::responses::ErrorResponse;
use shared::services::errors::{
    match_service_errors::MatchServiceError, match_token_service_errors::MatchTokenError,
    matchmaking_service_errors::MatchmakingServiceError, user_service_errors::UserServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    UserService(UserServiceError),
    MatchmakingService(MatchmakingServiceError),
    MatchTokenService(MatchTokenError),
    MatchService(MatchServiceError),
    QueueRemovalUnacknowledged,
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        ApiError::UserService(error)
    }
}

impl From<MatchmakingServiceError> for ApiError {
    fn from(error: MatchmakingServiceError) -> Self {
        ApiError::MatchmakingService(error)
    }
}

impl From<MatchTokenError> for ApiError {
    fn from(error: MatchTokenError) -> Self {
        ApiError::MatchTokenService(error)
    }
}

impl From<MatchServiceError> for ApiError {
    fn from(error: MatchServiceError) -> Self {
        ApiError::MatchService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UserService(UserServiceError::UserAlreadyExists) => StatusCode::CONFLICT,
            ApiError::UserService(UserServiceError::UserNotFound) => StatusCode::NOT_FOUND,
            ApiError::UserService(UserServiceError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApiError::UserService(UserServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::UserService(UserServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // Queue store faults are transient capacity, not server bugs
            ApiError::MatchmakingService(MatchmakingServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MatchmakingService(MatchmakingServiceError::RepositoryError(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }

            ApiError::MatchTokenService(MatchTokenError::Signing(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MatchTokenService(_) => StatusCode::UNAUTHORIZED,

            ApiError::MatchService(MatchServiceError::InvalidToken(_)) => StatusCode::UNAUTHORIZED,
            ApiError::MatchService(MatchServiceError::MatchTooShort) => StatusCode::BAD_REQUEST,
            ApiError::MatchService(MatchServiceError::UserNotFound) => StatusCode::NOT_FOUND,
            ApiError::MatchService(MatchServiceError::UserServiceError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::QueueRemovalUnacknowledged => StatusCode::SERVICE_UNAVAILABLE,
        };

        let error = match self {
            ApiError::UserService(e) => e.to_string(),
            ApiError::MatchmakingService(e) => e.to_string(),
            ApiError::MatchTokenService(e) => e.to_string(),
            ApiError::MatchService(e) => e.to_string(),
            ApiError::QueueRemovalUnacknowledged => {
                "Removal from queue was not acknowledged".to_string()
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
