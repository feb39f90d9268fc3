use std::path::Path;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use log::error;

use crate::app_state::AppState;
use crate::services::AccessDecision;
use crate::utils::config::Config;
use crate::utils::cookie_helpers::{clear_cookie, token_cookie};

pub async fn secret(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Response) {
    let cookie_name = state.config.token_cookie_name();
    let token = jar.get(cookie_name).map(|c| c.value().to_owned());

    match state.access_flow.evaluate_stored(token.as_deref()) {
        AccessDecision::Granted { store, .. } => {
            let jar = match store {
                Some(renewed) => jar.add(token_cookie(
                    cookie_name,
                    &renewed.token,
                    renewed.remaining_ttl_seconds,
                )),
                None => jar,
            };
            (jar, serve_secret_file(&state.config).await)
        }
        AccessDecision::Denied { clear_stored } => {
            let jar = if clear_stored {
                jar.add(clear_cookie(cookie_name))
            } else {
                jar
            };
            (jar, Redirect::to("/signup").into_response())
        }
    }
}

pub(crate) async fn serve_secret_file(config: &Config) -> Response {
    let path = Path::new(config.assets_dir()).join("secret.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("failed to read {}: {}", path.display(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
