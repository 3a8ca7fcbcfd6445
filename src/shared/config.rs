//! Application configuration. Reddit endpoint, pacing, output location.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "UserPersonaBot/1.0";
pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
/// Items requested per run unless `--limit` says otherwise.
pub const DEFAULT_FETCH_LIMIT: usize = 100;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Sent on every request; Reddit throttles generic agents. Read from REDDIT_PERSONA_USER_AGENT.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Read from REDDIT_PERSONA_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Read from REDDIT_PERSONA_FETCH_LIMIT.
    #[serde(default)]
    pub fetch_limit: Option<usize>,

    /// Children per listing page (Reddit caps this at 100). Read from REDDIT_PERSONA_PAGE_SIZE.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Delay in ms between listing page requests (rate limiting). Read from REDDIT_PERSONA_REQUEST_DELAY_MS.
    #[serde(default)]
    pub request_delay_ms: Option<u64>,

    /// Directory for reports. Read from REDDIT_PERSONA_OUTPUT_DIR.
    #[serde(default)]
    pub output_dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("REDDIT_PERSONA").try_parsing(true));
        if let Ok(path) = std::env::var("REDDIT_PERSONA_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn user_agent_or_default(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
    }

    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn fetch_limit_or_default(&self) -> usize {
        self.fetch_limit.unwrap_or(DEFAULT_FETCH_LIMIT)
    }

    /// Defaults to 100; the client clamps anything larger.
    pub fn page_size_or_default(&self) -> usize {
        self.page_size.unwrap_or(100)
    }

    /// Returns the inter-page delay. Defaults to one second.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms.unwrap_or(1000))
    }

    pub fn output_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.user_agent_or_default(), "UserPersonaBot/1.0");
        assert_eq!(cfg.base_url_or_default(), "https://www.reddit.com");
        assert_eq!(cfg.fetch_limit_or_default(), 100);
        assert_eq!(cfg.page_size_or_default(), 100);
        assert_eq!(cfg.request_delay(), Duration::from_secs(1));
        assert_eq!(cfg.output_dir_or_default(), PathBuf::from("."));
    }

    #[test]
    fn test_file_source_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona.toml");
        std::fs::write(
            &path,
            "user_agent = \"test-agent/0.1\"\nfetch_limit = 25\nrequest_delay_ms = 0\noutput_dir = \"out\"\n",
        )
        .unwrap();

        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from(path.as_path()))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.user_agent_or_default(), "test-agent/0.1");
        assert_eq!(cfg.fetch_limit_or_default(), 25);
        assert_eq!(cfg.request_delay(), Duration::ZERO);
        assert_eq!(cfg.output_dir_or_default(), PathBuf::from("out"));
        assert_eq!(cfg.base_url_or_default(), DEFAULT_BASE_URL);
    }
}
