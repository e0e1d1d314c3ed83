use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::HttpSettings;

/// Shared HTTP client for the profile and stats APIs
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = Self::build_client(&settings.user_agent, settings.timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.send_get_request(url, &[]).await
    }

    pub async fn get_with_query(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        self.send_get_request(url, query).await
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_get_request(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to fetch from: {}", url))
    }
}
