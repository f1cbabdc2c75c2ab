pub mod match_service_errors;
pub mod match_token_service_errors;
pub mod matchmaking_service_errors;
pub mod user_service_errors;
