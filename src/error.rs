// src/error.rs
//! Error types shared by the fetch, parse and report stages.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("output: {0}")]
    Io(#[from] std::io::Error),
}

/// The remote source could not be read.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: reqwest::StatusCode },
    #[error("unreadable body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Grouping and decimal separators must differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("grouping and decimal separators must differ (both {0:?})")]
pub struct LocaleError(pub char);

/// A non-empty numeric cell that is not a locale-formatted number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {field} of {country:?} as a number: {text:?}")]
pub struct ParseError {
    pub country: String,
    pub field: &'static str,
    pub text: String,
}
