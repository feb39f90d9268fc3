use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};
use log::error;

use crate::app_state::AppState;
use crate::domain::{Email, RequestLinkBody, RequestLinkResponse};
use crate::errors::RequestLinkError;

// Issuance trigger: mint a token, embed it in a verification link and hand it
// to the email collaborator. Delivery failure is surfaced to the caller, not
// swallowed.
pub async fn request_link(
    State(state): State<AppState>,
    body: Option<Json<RequestLinkBody>>,
) -> Result<impl IntoResponse, RequestLinkError> {
    let destination = body
        .and_then(|Json(b)| b.email)
        .unwrap_or_else(|| state.config.link_email_to().to_owned());
    let email = Email::parse(destination).or(Err(RequestLinkError::InvalidEmail))?;

    let issued = state.token_service.issue(email.as_ref()).map_err(|e| {
        error!("token issuance failed: {}", e);
        RequestLinkError::InternalServerError
    })?;

    let link = format!("{}/verify/{}", state.config.public_url(), issued.token);

    state
        .email_client
        .send_magic_link(&email, &link)
        .await
        .map_err(|e| {
            error!("magic link delivery failed: {}", e);
            RequestLinkError::DeliveryFailed
        })?;

    Ok((
        StatusCode::OK,
        Json(RequestLinkResponse {
            message: "Check your inbox for an access link.".to_string(),
        }),
    ))
}
