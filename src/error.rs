use std::io;
use thiserror::Error;

/// Failure of a single fetch attempt.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client could not be built: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response body is empty")]
    EmptyBody,
}

/// Fatal failure of the detail phase. Aborts the whole run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("detail page for vacancy {id} could not be fetched ({url})")]
    DetailPageUnavailable { id: String, url: String },
    #[error("vacancy {id}: meta tag '{name}' is missing or has no content")]
    MissingMeta { id: String, name: &'static str },
    #[error("vacancy {id}: keywords '{content}' have fewer than 3 segments")]
    MalformedKeywords { id: String, content: String },
    #[error("vacancy {id}: description is empty")]
    EmptyDescription { id: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write XML feed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
