use std::env;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    issuer: String,
    audience: String,
    group: String,
    token_ttl_seconds: i64,
    token_cookie_name: String,
    public_url: String,
    link_email_to: String,
    brevo_api_key: String,
    brevo_template_id: i64,
    renew_on_verify: bool,
    assets_dir: String,
}

impl Config {
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn jwt_issuer(&self) -> &str {
        &self.issuer
    }
    pub fn jwt_audience(&self) -> &str {
        &self.audience
    }
    pub fn token_group(&self) -> &str {
        &self.group
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn token_cookie_name(&self) -> &str {
        &self.token_cookie_name
    }
    pub fn public_url(&self) -> &str {
        &self.public_url
    }
    pub fn link_email_to(&self) -> &str {
        &self.link_email_to
    }
    pub fn brevo_api_key(&self) -> &str {
        &self.brevo_api_key
    }
    pub fn brevo_template_id(&self) -> i64 {
        self.brevo_template_id
    }
    pub fn renew_on_verify(&self) -> bool {
        self.renew_on_verify
    }
    pub fn assets_dir(&self) -> &str {
        &self.assets_dir
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET must not be empty"));
        }

        let issuer = req_var("JWT_ISSUER")?;
        let audience = req_var("JWT_AUDIENCE")?;
        let group = opt_var("TOKEN_GROUP").unwrap_or_else(|| "default".into());

        let token_ttl_seconds = parse_i64_or("TOKEN_TTL_SECONDS", 300)?;
        if token_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid("TOKEN_TTL_SECONDS must be positive"));
        }

        let public_url = req_var("PUBLIC_URL")?;
        let public_url = public_url.trim_end_matches('/').to_owned();

        let link_email_to = req_var("LINK_EMAIL_TO")?;
        let brevo_api_key = req_var("BREVO_API_KEY")?;
        if brevo_api_key.is_empty() {
            return Err(ConfigError::Invalid("BREVO_API_KEY must not be empty"));
        }
        let brevo_template_id = parse_i64_or("BREVO_TEMPLATE_ID", 1)?;

        let renew_on_verify = parse_bool_or("RENEW_ON_VERIFY", false)?;

        let token_cookie_name = opt_var("TOKEN_COOKIE_NAME").unwrap_or_else(|| "token".into());
        let assets_dir = opt_var("ASSETS_DIR").unwrap_or_else(|| "assets".into());

        Ok(Self {
            jwt_secret,
            issuer,
            audience,
            group,
            token_ttl_seconds,
            token_cookie_name,
            public_url,
            link_email_to,
            brevo_api_key,
            brevo_template_id,
            renew_on_verify,
            assets_dir,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match opt_var(key) {
        Some(v) => v.parse::<i64>().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn parse_bool_or(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match opt_var(key) {
        Some(v) => match v.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::Invalid(key)),
        },
        None => Ok(default),
    }
}
