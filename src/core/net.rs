// src/core/net.rs
//
// One blocking GET per page. No retries and no caching: every call hits the
// network again.

use std::time::{Duration, Instant};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{FetchFailure, Result, StatsError};

/// Where page HTML comes from. The scraper only needs this one call, which
/// lets tests and benches feed saved pages instead of the live site.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Live HTTP source with a bounded timeout.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(StatsError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        logf!("Fetching {url}");
        let t = Instant::now();
        let fetch_err = |e: reqwest::Error| StatsError::Fetch { url: s!(url), source: e.into() };

        let resp = self.client.get(url).send().map_err(fetch_err)?;
        check_status(url, resp.status())?;
        let body = resp.text().map_err(fetch_err)?;

        logd!("Fetched {} bytes in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

/// Anything but 2xx is a failed fetch; error pages are never parsed.
fn check_status(url: &str, status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    logw!("HTTP {status} for {url}");
    Err(StatsError::Fetch { url: s!(url), source: FetchFailure::Status(status) })
}
