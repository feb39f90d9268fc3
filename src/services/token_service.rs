/// Token issuance and verification service.
///
/// This module provides the `TokenService`, which coordinates:
/// - Creation of short-lived access (JWT) tokens for magic links
/// - Verification (signature + claims + expiry) of presented tokens
///
/// Security model:
/// 1. Tokens are signed with HMAC-SHA512 over the serialized claims using the
///    shared secret from `Config`. Signature comparison is delegated to the
///    underlying JWT library, which compares MACs in constant time.
/// 2. Validity is fully recomputed from the token itself; nothing is persisted
///    server-side and expiry is the only lifecycle end.
/// 3. Expiry is checked against an injected `Clock`, separately from the
///    signature, so an expired token is reported distinctly from a forged one.
///
/// Errors:
/// - Verification maps every failure to a `VerifyError` variant and never
///   panics; this function sits directly on the request path for untrusted
///   input.
use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{AccessClaims, IssuedToken};
use crate::services::clock::{Clock, SystemClock};
use crate::utils::config::Config;

#[derive(Clone)]
pub struct TokenService {
    config: Arc<Config>,
    clock: Arc<dyn Clock>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("token failed to decode")]
    Malformed,

    #[error("token signature mismatch")]
    InvalidSignature,

    #[error("token expired")]
    Expired,
}

impl TokenService {
    /// Construct a `TokenService` using the system clock.
    ///
    /// The secret is guaranteed non-empty by `Config::from_env`, so key setup
    /// cannot fail here.
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Arc<Config>, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret().as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret().as_bytes());
        Self {
            config,
            clock,
            encoding_key,
            decoding_key,
        }
    }

    // Build & sign a token for the given subject. Pure function of config and
    // the current clock reading; no side effects.
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        let now = self.clock.now();
        let expires_at = now + Duration::seconds(self.config.token_ttl_seconds());

        let claims = AccessClaims {
            sub: subject.to_string(),
            iss: self.config.jwt_issuer().to_owned(),
            aud: self.config.jwt_audience().to_owned(),
            group: self.config.token_group().to_owned(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)?;

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at,
        })
    }

    /// Verify a presented token:
    /// - Decodes the payload and recomputes the HS512 signature
    /// - Validates issuer and audience
    /// - Checks expiry against the injected clock
    ///
    /// Returns the claims if valid. Verification is idempotent; calling it
    /// repeatedly on the same token yields the same result.
    ///
    /// Errors:
    /// - `VerifyError::Malformed`: token fails to decode, or claims mismatch
    /// - `VerifyError::InvalidSignature`: decode succeeds, signature check fails
    /// - `VerifyError::Expired`: signature valid but TTL exceeded
    pub fn verify(&self, token: &str) -> Result<AccessClaims, VerifyError> {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.set_issuer(&[self.config.jwt_issuer()]);
        validation.set_audience(&[self.config.jwt_audience()]);
        // Expiry is checked below against our own clock so the error is
        // reported distinctly and boundary behavior is testable.
        validation.validate_exp = false;

        let data = decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => VerifyError::InvalidSignature,
                _ => VerifyError::Malformed,
            }
        })?;

        if (data.claims.exp as i64) < self.clock.now().timestamp() {
            return Err(VerifyError::Expired);
        }

        Ok(data.claims)
    }

    // Seconds until the claims expire, per the service clock. Zero or negative
    // never escapes here because `verify` rejects expired tokens first.
    pub fn remaining_ttl_seconds(&self, claims: &AccessClaims) -> i64 {
        claims.exp as i64 - self.clock.now().timestamp()
    }
}
