use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::routes::secret::serve_secret_file;
use crate::services::AccessDecision;
use crate::utils::cookie_helpers::{clear_cookie, token_cookie};

// Magic-link landing: the token arrives as a path parameter. On success it is
// stored as a cookie scoped to its remaining TTL so later requests can
// present it; on failure any stored copy is cleared.
pub async fn verify_link(
    State(state): State<AppState>,
    Path(token): Path<String>,
    jar: CookieJar,
) -> (CookieJar, Response) {
    let cookie_name = state.config.token_cookie_name();

    match state.access_flow.evaluate_link(&token) {
        AccessDecision::Granted { store, .. } => {
            let jar = match store {
                Some(stored) => jar.add(token_cookie(
                    cookie_name,
                    &stored.token,
                    stored.remaining_ttl_seconds,
                )),
                None => jar,
            };
            (jar, serve_secret_file(&state.config).await)
        }
        AccessDecision::Denied { .. } => (
            jar.add(clear_cookie(cookie_name)),
            Redirect::to("/signup").into_response(),
        ),
    }
}
