use std::sync::Arc;

use reqwest::{Client, Response};
use serde::Serialize;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use chat_auth::app_state::AppState;
use chat_auth::domain::TokenMaker;
use chat_auth::services::{HashmapUserStore, PasetoMaker};
use chat_auth::utils::Config;
use chat_auth::Application;

pub const TEST_KEY: &[u8] = b"test-key-0123456789-test-key-012";
pub const TEST_ISSUER: &str = "chat-auth-test";

#[derive(Serialize)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub token_maker: Arc<dyn TokenMaker>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::new(TEST_KEY.to_vec(), 60, TEST_ISSUER, "127.0.0.1:0");
        let token_maker: Arc<dyn TokenMaker> = Arc::new(
            PasetoMaker::new(config.paseto_key(), config.token_issuer())
                .expect("failed to build token maker"),
        );
        let app_state = AppState::new(
            Arc::new(RwLock::new(HashmapUserStore::new())),
            token_maker.clone(),
            Arc::new(config.clone()),
        );

        let app = Application::build(app_state, config.app_address())
            .await
            .expect("failed to build app");
        let address = app.address.clone();

        spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            token_maker,
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> Response {
        let body = CredentialsBody {
            username: username.to_owned(),
            password: password.to_owned(),
        };

        self.http_client
            .post(format!("{}/api/v1/auth/register", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute register request.")
    }

    pub async fn login(&self, username: &str, password: &str) -> Response {
        let body = CredentialsBody {
            username: username.to_owned(),
            password: password.to_owned(),
        };

        self.http_client
            .post(format!("{}/api/v1/auth/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn me(&self, authorization: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}/api/v1/users/me", &self.address));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }

        request
            .send()
            .await
            .expect("Failed to execute me request.")
    }
}

pub fn get_random_username() -> String {
    format!("user_{}", &Uuid::new_v4().simple().to_string()[..12])
}
