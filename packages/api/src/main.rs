use axum::{routing::get, Router};
use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod state;

use shared::repositories::queue_repository::DynamoDbQueueRepository;
use shared::repositories::user_repository::DynamoDbUserRepository;
use shared::services::match_service::MatchService;
use shared::services::match_token_service::{MatchTokenConfig, MatchTokenService};
use shared::services::matchmaking_service::MatchmakingService;
use shared::services::user_service::UserService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    // Set up services
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    let users_table =
        std::env::var("USERS_TABLE").expect("USERS_TABLE environment variable must be set");
    let ranked_queue_table = std::env::var("RANKED_QUEUE_TABLE")
        .expect("RANKED_QUEUE_TABLE environment variable must be set");
    let queue_table =
        std::env::var("QUEUE_TABLE").expect("QUEUE_TABLE environment variable must be set");

    let user_repository = Arc::new(DynamoDbUserRepository::new(client.clone(), users_table));
    let user_service = Arc::new(UserService::new(user_repository));

    let ranked_queue_repository = Arc::new(DynamoDbQueueRepository::new(
        client.clone(),
        ranked_queue_table,
    ));
    let ranked_matchmaking_service = Arc::new(MatchmakingService::new(ranked_queue_repository));

    let queue_repository = Arc::new(DynamoDbQueueRepository::new(client, queue_table));
    let matchmaking_service = Arc::new(MatchmakingService::new(queue_repository));

    let match_token_service = Arc::new(MatchTokenService::new(MatchTokenConfig::from_env()));
    let match_service = Arc::new(MatchService::new(
        match_token_service.clone(),
        user_service.clone(),
    ));

    let app_state = state::AppState {
        user_service,
        ranked_matchmaking_service,
        matchmaking_service,
        match_token_service,
        match_service,
    };

    // Configure CORS
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Merge routes
    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::users::routes())
        .merge(routes::matchmaking::routes())
        .merge(routes::ranked_matchmaking::routes())
        .layer(cors)
        .with_state(app_state);

    run(app).await
}
