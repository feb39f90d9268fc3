use magiclink_service::app_state::AppState;
use magiclink_service::services::{BrevoEmailClient, TokenService};
use magiclink_service::utils::Config;
use magiclink_service::Application;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Configuration errors are fatal; the process must not serve traffic
    // without a signing secret or sender credentials.
    let config = Arc::new(Config::from_env().expect("Failed to load config"));

    let token_service = Arc::new(TokenService::new(config.clone()));
    let email_client = Arc::new(BrevoEmailClient::new(&config));

    let app_state = AppState::new(config, token_service, email_client);

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
