// src/core/net.rs
//
// Document retrieval. The pipeline only sees the `Fetch` trait; `HttpFetcher`
// is the real one (blocking reqwest, one GET per call, bounded timeout).

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::FetchOptions;
use crate::error::FetchError;

/// Anything that can turn a source URL into raw markup.
/// Status checks belong to the implementation; callers get a body or an error.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, timeout: opts.timeout })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        logd!("Fetch: GET {url}");
        let resp = self.client.get(url).send().map_err(|e| self.classify(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp.text().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url: s!(url), after: self.timeout }
            } else {
                FetchError::Body { url: s!(url), source: e }
            }
        })?;
        logd!("Fetch: {} bytes from {url}", body.len());
        Ok(body)
    }
}

impl HttpFetcher {
    fn classify(&self, url: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout { url: s!(url), after: self.timeout }
        } else if e.is_builder() {
            FetchError::InvalidUrl { url: s!(url) }
        } else {
            FetchError::Transport { url: s!(url), source: e }
        }
    }
}
