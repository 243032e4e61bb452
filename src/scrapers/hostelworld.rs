use crate::error::{AnalysisError, Result};
use crate::scrapers::traits::PageSource;
use crate::scrapers::types::ScrapeParams;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches Hostelworld review listing pages over HTTP, one request per page
pub struct HostelworldSource {
    client: Client,
}

impl HostelworldSource {
    pub fn new(params: &ScrapeParams) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .user_agent(params.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl PageSource for HostelworldSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| AnalysisError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Hostelworld returned status: {}", status);
            return Err(AnalysisError::Status {
                url: url.to_string(),
                status,
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !content_type.contains("html") {
                return Err(AnalysisError::Parse {
                    url: url.to_string(),
                    reason: format!("content type {}", content_type),
                });
            }
        }

        let body = response
            .text()
            .await
            .map_err(|source| AnalysisError::Fetch {
                url: url.to_string(),
                source,
            })?;

        debug!("Downloaded {} bytes of HTML", body.len());
        Ok(body)
    }

    fn source_name(&self) -> &'static str {
        "Hostelworld"
    }
}

/// Parse a fetched body into a queryable document
pub fn parse_page(url: &str, body: &str) -> Result<Html> {
    if body.trim().is_empty() {
        return Err(AnalysisError::Parse {
            url: url.to_string(),
            reason: "empty body".to_string(),
        });
    }
    Ok(Html::parse_document(body))
}
