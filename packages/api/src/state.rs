use std::sync::Arc;

use shared::services::match_service::MatchService;
use shared::services::match_token_service::MatchTokenService;
use shared::services::matchmaking_service::MatchmakingService;
use shared::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub ranked_matchmaking_service: Arc<MatchmakingService>,
    pub matchmaking_service: Arc<MatchmakingService>,
    pub match_token_service: Arc<MatchTokenService>,
    pub match_service: Arc<MatchService>,
}
