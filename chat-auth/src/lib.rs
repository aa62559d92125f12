use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use log::info;
use std::error::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use app_state::AppState;
use middleware::require_auth;
use routes::{login, me, register};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

pub fn app_router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route("/users/me", get(me::me))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    let api = Router::new()
        .route("/auth/register", post(register::register))
        .route("/auth/login", post(login::login))
        .merge(protected);

    Router::new()
        .nest("/api/v1", api)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    listener: TcpListener,
    router: Router,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);
        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        info!("listening on {}", &self.address);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    info!("gracefully shutting down the server");
}
