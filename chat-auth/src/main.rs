use chat_auth::app_state::AppState;
use chat_auth::services::{HashmapUserStore, PasetoMaker};
use chat_auth::utils::Config;
use chat_auth::Application;
use env_logger::Env;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().expect("Failed to load config");
    // A wrong-sized key must stop the process; there is no fallback key.
    let token_maker = PasetoMaker::new(config.paseto_key(), config.token_issuer())
        .expect("Invalid PASETO_KEY");

    let app_state = AppState::new(
        Arc::new(RwLock::new(HashmapUserStore::new())),
        Arc::new(token_maker),
        Arc::new(config.clone()),
    );

    let app = Application::build(app_state, config.app_address())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
