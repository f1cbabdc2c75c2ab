use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JoinQueueRequest {
    pub user_name: String,
    pub rating: i32,
    pub join_code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FindMatchRequest {
    pub user_name: String,
    pub rating: i32,
}
