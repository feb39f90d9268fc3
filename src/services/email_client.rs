use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use thiserror::Error;

use crate::domain::Email;
use crate::utils::config::Config;

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("email provider rejected the send: status {0}")]
    Rejected(u16),
}

// Notification collaborator: dispatches the magic link to its destination.
#[async_trait::async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_magic_link(&self, to: &Email, link: &str) -> Result<(), EmailError>;
}

/// Transactional email client for the Brevo (formerly Sendinblue) API.
///
/// Sends a templated email whose `link` parameter carries the magic link.
pub struct BrevoEmailClient {
    http: reqwest::Client,
    api_key: String,
    template_id: i64,
}

impl BrevoEmailClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.brevo_api_key().to_owned(),
            template_id: config.brevo_template_id(),
        }
    }
}

#[async_trait::async_trait]
impl EmailClient for BrevoEmailClient {
    async fn send_magic_link(&self, to: &Email, link: &str) -> Result<(), EmailError> {
        let body = json!({
            "to": [{ "email": to.as_ref() }],
            "templateId": self.template_id,
            "params": { "link": link },
        });

        let response = self
            .http
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EmailError::Rejected(response.status().as_u16()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMagicLink {
    pub to: String,
    pub link: String,
}

// In-memory client for tests: records sends, optionally fails them.
#[derive(Default)]
pub struct MockEmailClient {
    sent: Mutex<Vec<SentMagicLink>>,
    fail_sends: AtomicBool,
}

impl MockEmailClient {
    pub fn sent(&self) -> Vec<SentMagicLink> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_magic_link(&self, to: &Email, link: &str) -> Result<(), EmailError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(EmailError::Rejected(500));
        }
        self.sent.lock().unwrap().push(SentMagicLink {
            to: to.as_ref().to_owned(),
            link: link.to_owned(),
        });
        Ok(())
    }
}
