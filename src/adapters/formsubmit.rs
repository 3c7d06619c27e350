use crate::core::{ConfigProvider, ContactRelay};
use crate::domain::model::RelayPayload;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Default relay: FormSubmit's AJAX endpoint for the site's inbox.
pub const DEFAULT_ENDPOINT: &str = "https://formsubmit.co/ajax/contact@mondesa.org";

#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Relays contact messages to a FormSubmit-compatible JSON endpoint.
#[derive(Debug, Clone)]
pub struct FormSubmitRelay {
    client: Client,
    endpoint: String,
}

impl FormSubmitRelay {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.contact_endpoint(),
            Duration::from_secs(config.contact_timeout_seconds()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactRelay for FormSubmitRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<()> {
        tracing::debug!("Posting contact message to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Relay response status: {}", status);

        // The body must be JSON even on success; anything else counts as a failure.
        let body: RelayResponse = response.json().await?;

        if status.is_success() {
            Ok(())
        } else {
            Err(SiteError::RelayRejected {
                message: body
                    .message
                    .unwrap_or_else(|| format!("Error sending message (HTTP {})", status)),
            })
        }
    }
}
