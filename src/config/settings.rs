const USER_AGENT: &str = "GoldenStats/1.0";
const MOJANG_API_URL: &str = "https://api.mojang.com";
const HYPIXEL_API_URL: &str = "https://api.hypixel.net";

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    /// No timeout unless set; a hung request stalls only its own lookup.
    pub timeout_secs: Option<u64>,
    pub mojang_api_url: String,
    pub hypixel_api_url: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout_secs: None,
            mojang_api_url: env_or("MOJANG_API_URL", MOJANG_API_URL),
            hypixel_api_url: env_or("HYPIXEL_API_URL", HYPIXEL_API_URL),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http: HttpSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            http: HttpSettings::default(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
