/// Access-link flow: decides what a request with (or without) a presented
/// token should do, independent of any web framework.
///
/// The flow is a small state machine:
/// `Unauthenticated -> LinkIssued -> Verifying -> {Granted | Denied}`.
/// Issuance (the `LinkIssued` transition) lives in the request-link route;
/// this service covers the `Verifying` step for both presentation paths
/// (stored cookie and link parameter) and tells the caller whether to store,
/// keep, or clear the client-side copy of the token.
use log::{debug, warn};
use std::sync::Arc;

use crate::domain::AccessClaims;
use crate::services::token_service::{TokenService, VerifyError};

#[derive(Debug, Clone)]
pub enum AccessDecision {
    Granted {
        claims: AccessClaims,
        // Token the caller should (re-)store, with its remaining TTL.
        store: Option<StoreToken>,
    },
    Denied {
        // True when a token was presented and must be cleared client-side.
        // Clearing happens exactly once per denial, never on acceptance.
        clear_stored: bool,
    },
}

#[derive(Debug, Clone)]
pub struct StoreToken {
    pub token: String,
    pub remaining_ttl_seconds: i64,
}

#[derive(Clone)]
pub struct AccessFlow {
    token_service: Arc<TokenService>,
    renew_on_verify: bool,
}

impl AccessFlow {
    pub fn new(token_service: Arc<TokenService>, renew_on_verify: bool) -> Self {
        Self {
            token_service,
            renew_on_verify,
        }
    }

    // A token presented from client-side storage (the cookie path). Re-storing
    // on success is configurable; the stored copy already carries the token.
    pub fn evaluate_stored(&self, token: Option<&str>) -> AccessDecision {
        let Some(token) = token else {
            return AccessDecision::Denied {
                clear_stored: false,
            };
        };

        match self.token_service.verify(token) {
            Ok(claims) => {
                let store = self
                    .renew_on_verify
                    .then(|| self.store_token(token, &claims));
                AccessDecision::Granted { claims, store }
            }
            Err(err) => self.deny(err),
        }
    }

    // A token presented as a link parameter (the magic-link path). On success
    // the caller must store it so subsequent requests can present it.
    pub fn evaluate_link(&self, token: &str) -> AccessDecision {
        match self.token_service.verify(token) {
            Ok(claims) => {
                let store = Some(self.store_token(token, &claims));
                AccessDecision::Granted { claims, store }
            }
            Err(err) => self.deny(err),
        }
    }

    fn store_token(&self, token: &str, claims: &AccessClaims) -> StoreToken {
        // A token accepted at the expiry instant has zero seconds left; a
        // Max-Age=0 cookie would read as a clear, so the stored TTL is at
        // least one second.
        StoreToken {
            token: token.to_owned(),
            remaining_ttl_seconds: self.token_service.remaining_ttl_seconds(claims).max(1),
        }
    }

    fn deny(&self, err: VerifyError) -> AccessDecision {
        // Malformed and forged tokens look identical to the requester (a
        // redirect), but are logged distinctly for diagnostics.
        match err {
            VerifyError::Malformed => warn!("denied: token failed to decode"),
            VerifyError::InvalidSignature => warn!("denied: token signature mismatch"),
            VerifyError::Expired => debug!("denied: token expired"),
        }
        AccessDecision::Denied { clear_stored: true }
    }
}
