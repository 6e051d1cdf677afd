//! Client for the hosted form relay that turns contact submissions into email.
//!
//! The relay accepts a multipart POST and answers with a JSON object carrying a
//! boolean `success` flag. Anything else is treated as a failed submission.

use http::StatusCode;
use reqwest::{multipart::Form, Client};
use serde::Deserialize;
use thiserror::Error;

use crate::contact::{ContactFields, Relay};

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_SUBJECT: &str = "New message from portfolio contact form";
pub const DEFAULT_FROM_NAME: &str = "Portfolio Website";

/// The relay's access key is embedded in the WASM bundle and is therefore
/// public. It identifies the inbox, it does not protect anything.
const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_WEB3FORMS_ACCESS_KEY";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay rejected submission ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("couldn't reach relay: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected relay response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            access_key: PLACEHOLDER_ACCESS_KEY.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            from_name: DEFAULT_FROM_NAME.to_string(),
        }
    }
}

impl RelayConfig {
    /// Reads `PORTFOLIO_RELAY_ENDPOINT` and `PORTFOLIO_RELAY_ACCESS_KEY` as they
    /// were set when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_RELAY_ENDPOINT"),
            option_env!("PORTFOLIO_RELAY_ACCESS_KEY"),
        )
    }

    fn from_values(endpoint: Option<&str>, access_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.filter(|s| !s.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(key) = access_key.filter(|s| !s.trim().is_empty()) {
            config.access_key = key.trim().to_string();
        }
        config
    }

    /// Field/value pairs in the order they are written to the multipart body.
    pub fn payload(&self, fields: &ContactFields) -> Vec<(&'static str, String)> {
        vec![
            ("name", fields.name.clone()),
            ("email", fields.email.clone()),
            ("message", fields.message.clone()),
            ("access_key", self.access_key.clone()),
            ("subject", self.subject.clone()),
            ("from_name", self.from_name.clone()),
        ]
    }
}

#[derive(Deserialize, Debug)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Interprets a relay response body. Only `{"success": true, ...}` counts as
/// delivered.
pub fn parse_relay_body(status: StatusCode, body: &str) -> Result<(), RelayError> {
    let res: RelayResponse = serde_json::from_str(body)?;
    if res.success {
        Ok(())
    } else {
        Err(RelayError::Rejected {
            status,
            message: res
                .message
                .unwrap_or_else(|| "no reason given".to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    config: RelayConfig,
    http: Client,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

impl Relay for RelayClient {
    async fn send(&self, fields: &ContactFields) -> Result<(), RelayError> {
        let form = self
            .config
            .payload(fields)
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value));
        let response = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        parse_relay_body(status, &body)
    }
}
