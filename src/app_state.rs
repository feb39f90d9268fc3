use std::sync::Arc;

use crate::services::{AccessFlow, EmailClient, TokenService};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type ConfigType = Arc<Config>;
pub type TokenServiceType = Arc<TokenService>;
pub type EmailClientType = Arc<dyn EmailClient>;

// Everything here is immutable after startup; token validity travels inside
// the token itself, so no locks or shared mutable state are needed.
#[derive(Clone)]
pub struct AppState {
    pub config: ConfigType,
    pub token_service: TokenServiceType,
    pub email_client: EmailClientType,
    pub access_flow: AccessFlow,
}

impl AppState {
    pub fn new(
        config: ConfigType,
        token_service: TokenServiceType,
        email_client: EmailClientType,
    ) -> Self {
        let access_flow = AccessFlow::new(token_service.clone(), config.renew_on_verify());
        Self {
            config,
            token_service,
            email_client,
            access_flow,
        }
    }
}
