use reqwest::header::USER_AGENT;
use serde_json::Value as JsonValue;

use crate::{config::Settings, error::ReportError};

/// Client for the public listing endpoint.
///
/// No timeout and no retries: one GET per run, waiting as long as the server
/// takes.
pub struct ListingClient {
    inner: reqwest::Client,
    endpoint: String,
    user_agent: String,
    query: Vec<(&'static str, String)>,
}

impl ListingClient {
    pub fn new(settings: &Settings) -> Result<Self, ReportError> {
        let inner = reqwest::Client::builder().build()?;
        Ok(Self {
            inner,
            endpoint: settings.endpoint.clone(),
            user_agent: settings.user_agent.clone(),
            query: settings.query(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Raw response body. Non-2xx statuses become [`ReportError::Request`].
    pub async fn fetch_body(&self) -> Result<String, ReportError> {
        let response = self
            .inner
            .get(&self.endpoint)
            .query(&self.query)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ReportError::Request { status: status.as_u16(), body });
        }
        Ok(body)
    }

    /// Fetches and decodes the listing.
    pub async fn fetch(&self) -> Result<JsonValue, ReportError> {
        let body = self.fetch_body().await?;
        let value = serde_json::from_str::<JsonValue>(&body)?;
        log::debug!("listing.fetched bytes={}", body.len());
        Ok(value)
    }
}
