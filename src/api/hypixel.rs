use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::Value;

use crate::http::HttpClient;

/// Hypixel player API client
pub struct HypixelClient {
    client: HttpClient,
    base_url: String,
}

impl HypixelClient {
    pub fn new(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch the raw player document; error statuses still carry a JSON body
    pub async fn fetch_player(&self, uuid: &str, api_key: Option<&str>) -> Result<Value> {
        let url = self.build_player_url();
        debug!("Fetching Hypixel player {}", uuid);

        let mut query = vec![("uuid", uuid)];
        match api_key {
            Some(key) => query.insert(0, ("key", key)),
            None => warn!("No Hypixel API key configured"),
        }

        let response = self.client.get_with_query(&url, &query).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read player response from: {}", url))?;

        Self::parse_player_body(uuid, status, &text)
    }

    fn parse_player_body(uuid: &str, status: StatusCode, body: &str) -> Result<Value> {
        if !status.is_success() {
            warn!("Hypixel returned {} for {}", status, uuid);
        }
        serde_json::from_str(body).context("Failed to parse Hypixel player response")
    }

    fn build_player_url(&self) -> String {
        format!("{}/player", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_body_is_still_parsed() {
        let body = r#"{"success": false, "cause": "Invalid API key"}"#;

        let value =
            HypixelClient::parse_player_body("NULL", StatusCode::FORBIDDEN, body).unwrap();

        assert_eq!(value["success"], false);
        assert!(value.get("player").is_none());
    }

    #[test]
    fn test_success_body_is_parsed() {
        let body = r#"{"success": true, "player": null}"#;

        let value = HypixelClient::parse_player_body("abc", StatusCode::OK, body).unwrap();

        assert!(value["player"].is_null());
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        let err = HypixelClient::parse_player_body("abc", StatusCode::BAD_GATEWAY, "<html>")
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to parse Hypixel player response");
    }
}
