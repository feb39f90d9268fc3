use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestLinkError {
    #[error("Something went wrong, please try again later.")]
    InternalServerError,

    #[error("Invalid email address provided")]
    InvalidEmail,

    #[error("Failed to deliver the access link")]
    DeliveryFailed,
}

impl IntoResponse for RequestLinkError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RequestLinkError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            RequestLinkError::DeliveryFailed => StatusCode::BAD_GATEWAY,
            RequestLinkError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
