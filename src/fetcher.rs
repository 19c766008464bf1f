use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT, ACCEPT_LANGUAGE};
use scraper::Html;
use std::time::Duration;
use log::{info, warn, error};
use rand::seq::SliceRandom;
use crate::config::ParserConfig;
use crate::error::FetchError;

const USER_AGENTS: [&str; 6] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
];

/// One GET request. Implemented over HTTP in production and scripted in tests.
pub trait Transport {
    fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Client with a fixed timeout and certificate verification disabled.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE,de;q=0.9,en;q=0.8"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url)
            .header(USER_AGENT, user_agent)
            .send()?;

        // Error pages are parsed like any other body.
        let status = resp.status();
        if !status.is_success() {
            warn!("{} answered with status {}", url, status);
        }

        let text = resp.text()?;
        Ok(text)
    }
}

/// Fetches pages with a bounded number of immediate retries.
pub struct PageFetcher<T = HttpTransport> {
    transport: T,
    max_attempts: u32,
    user_agent_suffix: String,
}

impl PageFetcher<HttpTransport> {
    pub fn from_config(config: &ParserConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(PageFetcher::new(transport, config.max_attempts, config.user_agent_suffix.clone()))
    }
}

impl<T: Transport> PageFetcher<T> {
    pub fn new(transport: T, max_attempts: u32, user_agent_suffix: impl Into<String>) -> Self {
        PageFetcher {
            transport,
            max_attempts,
            user_agent_suffix: user_agent_suffix.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    fn random_user_agent(&self) -> String {
        let mut rng = rand::thread_rng();
        let agent = USER_AGENTS.choose(&mut rng).copied().unwrap_or(USER_AGENTS[0]);
        format!("{} {}", agent, self.user_agent_suffix)
    }

    /// Returns the parsed page, or `None` once every attempt has failed.
    /// At least one attempt is made even if `max_attempts` is 0.
    pub fn fetch(&self, url: &str) -> Option<Html> {
        let max = self.max_attempts.max(1);

        for attempt in 1..=max {
            info!("Trying to get page {}, attempt {} of {}", url, attempt, max);

            let result = self.transport
                .get(url, &self.random_user_agent())
                .and_then(parse_body);

            match result {
                Ok(document) => return Some(document),
                Err(e) => warn!("Cannot get page {} (attempt {} of {}): {}", url, attempt, max, e),
            }
        }

        error!("Giving up on {} after {} attempts", url, max);
        None
    }
}

fn parse_body(body: String) -> Result<Html, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(Html::parse_document(&body))
}
