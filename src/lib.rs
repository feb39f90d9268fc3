use app_state::AppState;
use axum::{routing::get, Router};
use axum_server::bind;
use routes::{request_link, root, secret, verify_link};
use std::path::Path;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::services::ServeFile;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let signup_page = Path::new(app_state.config.assets_dir()).join("index.html");

    Router::new()
        .route(
            "/",
            get(root::root).post(request_link::request_link),
        )
        .route_service("/signup", ServeFile::new(signup_page))
        .route("/secret", get(secret::secret))
        .route("/verify/:token", get(verify_link::verify_link))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        println!("listening on {}", &self.address);
        self.http_future.await
    }
}
