use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::StatusCode;
use serde::Deserialize;

use super::source::IdentityLookup;
use crate::http::HttpClient;

/// Profile returned by the Mojang username lookup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MojangProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Mojang profile API client
pub struct MojangClient {
    client: HttpClient,
    base_url: String,
}

impl MojangClient {
    pub fn new(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Resolve a username to its profile
    pub async fn lookup_profile(&self, name: &str) -> Result<IdentityLookup> {
        let url = self.build_profile_url(name);
        debug!("Looking up profile for {}", name);

        let response = self.client.get(&url).await?;
        let status = response.status();

        let body = if status == StatusCode::OK {
            response
                .text()
                .await
                .with_context(|| format!("Failed to read profile response from: {}", url))?
        } else {
            String::new()
        };
        Ok(Self::classify(name, status, &body))
    }

    /// Map a profile response to a lookup outcome; the body only matters on 200
    fn classify(name: &str, status: StatusCode, body: &str) -> IdentityLookup {
        if Self::is_not_found(status) {
            debug!("No Mojang profile for {} ({})", name, status);
            return IdentityLookup::NotFound;
        }

        if status != StatusCode::OK {
            warn!("Profile lookup for {} returned {}", name, status);
            return IdentityLookup::Unavailable(status.as_u16());
        }

        match serde_json::from_str::<MojangProfile>(body) {
            Ok(profile) => IdentityLookup::Found(Some(profile)),
            Err(e) => {
                warn!("Unreadable profile for {}: {}", name, e);
                IdentityLookup::Found(None)
            }
        }
    }

    // --- Helper Methods ---

    fn build_profile_url(&self, name: &str) -> String {
        format!(
            "{}/users/profiles/minecraft/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// Older API versions answer 204, newer ones 404
    fn is_not_found(status: StatusCode) -> bool {
        status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND
    }
}
