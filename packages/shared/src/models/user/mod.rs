pub mod requests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Starting rating for a freshly registered account.
pub const DEFAULT_RATING: i32 = 800;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub password: String,
    pub email: String,
    pub rating: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub gems: i32,
    /// Client-defined loadout presets, stored opaquely.
    pub presets: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: String, password: String, email: String) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4().to_string(),
            user_name,
            password,
            email,
            rating: DEFAULT_RATING,
            wins: 0,
            losses: 0,
            draws: 0,
            gems: 0,
            presets: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Clears fields that must not leave the service on credential-free reads.
    pub fn purge_secure_data(&mut self) {
        self.password.clear();
        self.email.clear();
    }
}
