use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::services::AccessDecision;
use crate::utils::cookie_helpers::{clear_cookie, token_cookie};

// Entry point: a valid stored token goes straight to the secret page,
// anything else lands on signup (clearing a bad stored token on the way).
pub async fn root(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
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
            (jar, Redirect::to("/secret"))
        }
        AccessDecision::Denied { clear_stored } => {
            let jar = if clear_stored {
                jar.add(clear_cookie(cookie_name))
            } else {
                jar
            };
            (jar, Redirect::to("/signup"))
        }
    }
}
