use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::debug;

use crate::models::matchmaking::MatchSubmission;
use crate::services::errors::match_service_errors::MatchServiceError;
use crate::services::errors::user_service_errors::UserServiceError;
use crate::services::match_token_service::MatchTokenService;
use crate::services::rating_service;
use crate::services::user_service::UserService;

/// Results reported sooner than this after the token was issued are rejected
/// as implausible.
const MIN_MATCH_SECONDS: i64 = 1;

/// Settles reported match results: authenticates the match token, applies
/// reward and rating changes, and persists the updated user.
pub struct MatchService {
    token_service: Arc<MatchTokenService>,
    user_service: Arc<UserService>,
}

impl MatchService {
    pub fn new(token_service: Arc<MatchTokenService>, user_service: Arc<UserService>) -> Self {
        MatchService {
            token_service,
            user_service,
        }
    }

    /// Returns the gems earned on success. Token failures surface as
    /// authentication errors; an implausibly fast submission is an input
    /// error, checked only after the token itself proved valid.
    pub async fn submit_result(
        &self,
        submission: &MatchSubmission,
    ) -> Result<i32, MatchServiceError> {
        let claims = self
            .token_service
            .validate_token(&submission.token)
            .map_err(MatchServiceError::InvalidToken)?;
        let started_at = claims.start_time().map_err(MatchServiceError::InvalidToken)?;

        if Utc::now() - started_at < Duration::seconds(MIN_MATCH_SECONDS) {
            return Err(MatchServiceError::MatchTooShort);
        }

        let mut user = self
            .user_service
            .get_user_by_id(&claims.sub)
            .await
            .map_err(|e| match e {
                UserServiceError::UserNotFound => MatchServiceError::UserNotFound,
                other => MatchServiceError::UserServiceError(other),
            })?;

        let gems = rating_service::reward_for(submission.victory);
        user.gems += gems;
        if submission.ranked {
            user.rating += rating_service::rating_delta(
                submission.local_rating,
                submission.opposition_rating,
                submission.victory,
            );
        }
        if submission.victory {
            user.wins += 1;
        } else {
            user.losses += 1;
        }
        user.updated_at = Utc::now();

        // Unconditional replace: concurrent settlements for the same user can
        // lose one side's update.
        self.user_service
            .update_user(&user)
            .await
            .map_err(MatchServiceError::UserServiceError)?;

        debug!("Settled match for {}: {} gems earned", user.id, gems);
        Ok(gems)
    }
}
