pub mod requests;
pub mod responses;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A player waiting in a matchmaking queue, hosting a lobby that an opponent
/// joins with `join_code`. One DynamoDB item per `user_name`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QueueEntry {
    pub user_name: String,
    pub rating: i32,
    pub join_code: String,
    pub created_at: DateTime<Utc>,
}

impl QueueEntry {
    pub fn new(user_name: &str, rating: i32, join_code: &str) -> Self {
        QueueEntry {
            user_name: user_name.to_string(),
            rating,
            join_code: join_code.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// A finished match as reported by the client, authorized by the match token
/// handed out when the session started.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchSubmission {
    pub token: String,
    pub victory: bool,
    pub ranked: bool,
    pub local_rating: i32,
    pub opposition_rating: i32,
}
