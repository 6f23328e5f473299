use thiserror::Error;

use crate::metrics::Tab;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error creating HTTP request: {0}")]
    Request(String),

    #[error("error fetching metrics: {source}. URL: {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error fetching metrics: HTTP status code {status}. URL: {url}")]
    Status { status: u16, url: String },

    #[error("error decoding {tab} metrics: {source}")]
    Decode {
        tab: Tab,
        #[source]
        source: serde_json::Error,
    },

    #[error("error formatting metrics: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    UrlParse(String),

    #[error("fetch task failed: {0}")]
    Task(String),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::UrlParse(e.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Error::Task(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
