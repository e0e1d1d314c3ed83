use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static KEY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9]").expect("valid key pattern"));

/// Number of leading key characters shown when echoing an API key
const VISIBLE_KEY_CHARS: usize = 4;

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(rename = "api-key", default)]
    pub api_key: Option<String>,
    /// Keys this tool does not know about, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// JSON config file holding the Hypixel API key
pub struct ConfigStore {
    path: PathBuf,
    config: StoredConfig,
}

impl ConfigStore {
    /// Read the config file, or start empty if it does not exist yet
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config = Self::read_config(&path)?;
        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }

    pub fn set_api_key(&mut self, key: &str) {
        self.config.api_key = Some(key.to_string());
    }

    /// Rewrite the whole file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| config_context("create directory for", &self.path))?;
        }

        let json = serde_json::to_string_pretty(&self.config)
            .context("Failed to serialize config")?;
        fs::write(&self.path, json).with_context(|| config_context("write", &self.path))?;

        info!("Saved config to {}", self.path.display());
        Ok(())
    }

    fn read_config(path: &Path) -> Result<StoredConfig> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(StoredConfig::default());
        }

        let json = fs::read_to_string(path).with_context(|| config_context("read", path))?;
        if json.trim().is_empty() {
            return Ok(StoredConfig::default());
        }

        serde_json::from_str(&json).with_context(|| config_context("parse", path))
    }
}

fn config_context(operation: &str, path: &Path) -> String {
    format!("Failed to {} config file: {}", operation, path.display())
}

/// Show the first characters of a key and mask the rest
pub fn obfuscate_key(key: &str) -> String {
    let split = key
        .char_indices()
        .nth(VISIBLE_KEY_CHARS)
        .map(|(index, _)| index)
        .unwrap_or(key.len());
    let (visible, hidden) = key.split_at(split);
    format!("{}{}", visible, KEY_CHARS.replace_all(hidden, "*"))
}
