use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.coinmarketcap.com/data-api/v3/cryptocurrency/listing";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_JSON_PATH: &str = "crypto_report.json";
pub const DEFAULT_REPORT_PATH: &str = "crypto_report.txt";
pub const DEFAULT_LOG_PATH: &str = "crypto_report.log";

#[derive(Debug, Clone)]
pub struct Settings {
    // Network
    pub endpoint: String,
    pub user_agent: String,

    // Listing query
    pub start: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_type: String,
    pub convert: String,

    // Outputs
    pub json_path: PathBuf,
    pub report_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            start: 1,
            limit: 10,
            sort_by: "market_cap".to_string(),
            sort_type: "desc".to_string(),
            convert: "USD".to_string(),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl Settings {
    /// Query pairs in the order they are sent upstream.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortType", self.sort_type.clone()),
            ("convert", self.convert.clone()),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(anyhow!("endpoint must not be empty"));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(anyhow!("endpoint must be an http(s) url (got {endpoint})"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(anyhow!("user_agent must not be empty"));
        }
        if self.start < 1 {
            return Err(anyhow!("start must be >= 1 (got {})", self.start));
        }
        if self.limit < 1 {
            return Err(anyhow!("limit must be >= 1 (got {})", self.limit));
        }
        for (name, path) in [
            ("json_path", &self.json_path),
            ("report_path", &self.report_path),
            ("log_path", &self.log_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
        }
        Ok(())
    }
}
