use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,   // Subject (requester identifier)
    pub iss: String,   // Issuer
    pub aud: String,   // Audience
    pub group: String, // Classification, carried for future use
    pub exp: usize,    // Expiration time
    pub iat: usize,    // Issued at time
}
