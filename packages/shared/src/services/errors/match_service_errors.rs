use std::fmt;

use crate::services::errors::match_token_service_errors::MatchTokenError;
use crate::services::errors::user_service_errors::UserServiceError;

#[derive(Debug)]
pub enum MatchServiceError {
    InvalidToken(MatchTokenError),
    MatchTooShort,
    UserNotFound,
    UserServiceError(UserServiceError),
}

impl fmt::Display for MatchServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchServiceError::InvalidToken(err) => write!(f, "Invalid match token: {}", err),
            MatchServiceError::MatchTooShort => {
                write!(f, "Match result was submitted too soon after the match started")
            }
            MatchServiceError::UserNotFound => write!(f, "User not found"),
            MatchServiceError::UserServiceError(err) => write!(f, "User service error: {}", err),
        }
    }
}

impl std::error::Error for MatchServiceError {}
