//! HTTP Prompt API
//!
//! Talks to the `/prompts` REST resource using reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::{ApiError, Prompt, PromptPatch};
use crate::ports::PromptApi;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest implementation of PromptApi
#[derive(Debug, Clone)]
pub struct HttpPromptApi {
    client: Client,
    base_url: String,
}

impl HttpPromptApi {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:3005`)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("promptdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/prompts", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/prompts/{}", self.base_url, urlencoding::encode(id))
    }
}

/// Turn a non-2xx response into `ApiError::Status`
async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    warn!(status = %status, "Prompt API returned an error status");
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl PromptApi for HttpPromptApi {
    async fn list(&self) -> Result<Vec<Prompt>, ApiError> {
        let url = self.collection_url();
        debug!(url = %url, "GET prompts");

        let resp = check_status(self.client.get(&url).send().await?).await?;
        let prompts: Vec<Prompt> = resp.json().await?;

        Ok(prompts)
    }

    async fn create(&self, prompt: &Prompt) -> Result<Prompt, ApiError> {
        let url = self.collection_url();
        debug!(url = %url, id = %prompt.id, "POST prompt");

        let resp = check_status(self.client.post(&url).json(prompt).send().await?).await?;
        let created: Prompt = resp.json().await?;

        Ok(created)
    }

    async fn patch(&self, id: &str, patch: &PromptPatch) -> Result<(), ApiError> {
        let url = self.item_url(id);
        debug!(url = %url, "PATCH prompt");

        check_status(self.client.patch(&url).json(patch).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id);
        debug!(url = %url, "DELETE prompt");

        check_status(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
