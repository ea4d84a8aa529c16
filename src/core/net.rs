// src/core/net.rs
// One blocking HTTPS GET per call. No retries, no caching.

use tracing::{debug, info};

use crate::config::options::FetchOptions;
use crate::error::FetchError;

/// Perform a GET request and return the response body as a String.
///
/// Fails on transport errors, on any non-2xx status, and on a body that
/// can't be read.
pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(opts.timeout)
        .build()
        .map_err(FetchError::Client)?;

    info!(%url, "fetching");
    let resp = client
        .get(url)
        .send()
        .map_err(|source| FetchError::Transport { url: s!(url), source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: s!(url), status });
    }

    let body = resp
        .text()
        .map_err(|source| FetchError::Body { url: s!(url), source })?;
    debug!(%url, bytes = body.len(), "fetched");
    Ok(body)
}
