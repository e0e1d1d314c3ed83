use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::hypixel::HypixelClient;
use super::mojang::{MojangClient, MojangProfile};
use crate::config::HttpSettings;
use crate::http::HttpClient;

/// Outcome of a username → UUID lookup
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityLookup {
    /// Found; `None` when the body could not be read as a profile
    Found(Option<MojangProfile>),
    /// The name belongs to no account
    NotFound,
    /// Any other response
    Unavailable(u16),
}

/// Where player identities and stats come from
#[async_trait]
pub trait PlayerDataSource: Send + Sync {
    async fn lookup_identity(&self, name: &str) -> Result<IdentityLookup>;

    /// Raw stats document for a UUID, which may be the literal `"NULL"`
    async fn fetch_stats(&self, uuid: &str, api_key: Option<&str>) -> Result<Value>;
}

/// Mojang for identities, Hypixel for stats
pub struct ApiDataSource {
    mojang: MojangClient,
    hypixel: HypixelClient,
}

impl ApiDataSource {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = HttpClient::new(settings)?;
        Ok(Self {
            mojang: MojangClient::new(client.clone(), &settings.mojang_api_url),
            hypixel: HypixelClient::new(client, &settings.hypixel_api_url),
        })
    }
}

#[async_trait]
impl PlayerDataSource for ApiDataSource {
    async fn lookup_identity(&self, name: &str) -> Result<IdentityLookup> {
        self.mojang.lookup_profile(name).await
    }

    async fn fetch_stats(&self, uuid: &str, api_key: Option<&str>) -> Result<Value> {
        self.hypixel.fetch_player(uuid, api_key).await
    }
}
