pub mod health;
pub mod matchmaking;
pub mod ranked_matchmaking;
pub mod users;
