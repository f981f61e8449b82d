use anyhow::{Context, Result};
use reqwest::blocking::Client;

const USER_AGENT: &str = "Mozilla/5.0";

/// Source of raw HTML pages.
pub trait PageFetcher {
    fn fetch_page(&self, url: &str) -> Result<String>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn fetch_page(&self, url: &str) -> Result<String> {
        (**self).fetch_page(url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::info!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {url}"))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!("HTTP error: {} for {}", response.status(), url));
        }

        response
            .text()
            .with_context(|| format!("Failed to read response body from {url}"))
    }
}
