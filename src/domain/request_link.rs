use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RequestLinkBody {
    // Optional override of the configured destination address.
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RequestLinkResponse {
    pub message: String,
}
