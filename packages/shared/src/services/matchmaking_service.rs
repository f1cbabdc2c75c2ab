use std::sync::Arc;

use tracing::debug;

use crate::models::matchmaking::QueueEntry;
use crate::repositories::queue_repository::QueueRepository;
use crate::services::errors::matchmaking_service_errors::MatchmakingServiceError;

/// Queue policy over a [`QueueRepository`]. One instance per queue (ranked
/// and plain share the mechanics, each on its own table).
#[derive(Clone)]
pub struct MatchmakingService {
    repository: Arc<dyn QueueRepository + Send + Sync>,
}

impl MatchmakingService {
    pub fn new(repository: Arc<dyn QueueRepository + Send + Sync>) -> Self {
        MatchmakingService { repository }
    }

    /// Adds the entry to the queue. Re-joining under the same user name
    /// replaces the previous entry rather than stacking a duplicate.
    pub async fn join_queue(&self, entry: QueueEntry) -> Result<(), MatchmakingServiceError> {
        if entry.user_name.is_empty() {
            return Err(MatchmakingServiceError::ValidationError(
                "User name cannot be empty".to_string(),
            ));
        }
        if entry.join_code.is_empty() {
            return Err(MatchmakingServiceError::ValidationError(
                "Join code cannot be empty".to_string(),
            ));
        }

        self.repository
            .enqueue(&entry)
            .await
            .map_err(|e| MatchmakingServiceError::RepositoryError(e.to_string()))
    }

    /// Returns the host that has been waiting the longest, skipping the
    /// requester's own entry. An empty queue is a successful no-candidate
    /// result, not an error.
    ///
    /// `_rating` is part of the wire contract but does not narrow the search:
    /// candidates are taken in join order regardless of rating proximity.
    pub async fn find_host(
        &self,
        user_name: &str,
        _rating: i32,
    ) -> Result<Option<QueueEntry>, MatchmakingServiceError> {
        if user_name.is_empty() {
            return Err(MatchmakingServiceError::ValidationError(
                "User name cannot be empty".to_string(),
            ));
        }

        let mut candidates = self
            .repository
            .find_candidates(user_name)
            .await
            .map_err(|e| MatchmakingServiceError::RepositoryError(e.to_string()))?;

        // Scans come back unordered; the earliest-joined host wins.
        candidates.sort_by_key(|entry| entry.created_at);
        let host = candidates.into_iter().next();

        if let Some(entry) = &host {
            debug!("Matched {} with host {}", user_name, entry.user_name);
        }
        Ok(host)
    }

    /// Removes the caller's entry. Ok(false) means the store did not confirm
    /// a removal; callers should retry rather than treat it as fatal.
    pub async fn leave_queue(&self, user_name: &str) -> Result<bool, MatchmakingServiceError> {
        if user_name.is_empty() {
            return Err(MatchmakingServiceError::ValidationError(
                "User name cannot be empty".to_string(),
            ));
        }

        self.repository
            .remove(user_name)
            .await
            .map_err(|e| MatchmakingServiceError::RepositoryError(e.to_string()))
    }
}
