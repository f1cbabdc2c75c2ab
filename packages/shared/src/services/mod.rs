pub mod errors;
pub mod match_service;
pub mod match_token_service;
pub mod matchmaking_service;
pub mod rating_service;
pub mod user_service;
