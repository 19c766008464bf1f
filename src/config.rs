use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::error::ConfigError;

pub const DEFAULT_LISTING_URL: &str = "https://pier14.jacando.com/de/de/job-suche";
pub const DEFAULT_BASE_VACANCY_URL: &str = "https://pier14.jacando.com/de/de/job/";
pub const DEFAULT_USER_AGENT_SUFFIX: &str = "JobUFO GmbH";
pub const DEFAULT_CONTACT_EMAIL: &str = "fallback@jobufo.com";

/// Settings for one scraping run. Every field may be omitted from the JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub listing_url: String,
    /// Detail page URL is this prefix followed by the vacancy id.
    pub base_vacancy_url: String,
    pub output_dir: PathBuf,
    pub output_file_name: String,
    pub max_attempts: u32,
    pub timeout_secs: u64,
    pub user_agent_suffix: String,
    pub contact_email: String,
    pub log_file: PathBuf,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            base_vacancy_url: DEFAULT_BASE_VACANCY_URL.to_string(),
            output_dir: PathBuf::from("parsed_xml"),
            output_file_name: "vacancies.xml".to_string(),
            max_attempts: 3,
            timeout_secs: 10,
            user_agent_suffix: DEFAULT_USER_AGENT_SUFFIX.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            log_file: PathBuf::from("logs/parser.log"),
        }
    }
}

impl ParserConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Falls back to defaults when `path` cannot be read or parsed.
    /// The error is handed back because the logger is configured from the result.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, Option<ConfigError>) {
        match ParserConfig::load(path) {
            Ok(config) => (config, None),
            Err(e) => (ParserConfig::default(), Some(e)),
        }
    }
}
