// Shared fixtures for the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;
use random_episode::launcher::Launcher;
use random_episode::page_fetcher::PageFetcher;

pub const CATALOG_URL: &str = "https://site.test/cartoon-list";

pub const CATALOG_PAGE: &str = r#"<html><body>
<ul>
  <li><a href="https://site.test/simpsons" title="The Simpsons">The Simpsons</a></li>
  <li><a href="https://site.test/simpsons-season-20" title="The Simpsons Season 20">The Simpsons Season 20</a></li>
  <li><a href="https://site.test/futurama" title="Futurama">Futurama</a></li>
</ul>
</body></html>"#;

pub const LEGACY_PAGE: &str = r#"<html><body>
<ul>
  <li><a href="/ep/s1e1" title="Watch The Simpsons Season 1 Episode 1 – Simpsons Roasting on an Open Fire">The Simpsons Season 1 Episode 1 – Simpsons Roasting on an Open Fire</a></li>
  <li><a href="/ep/504" title="Watch The Simpsons Episode 504 Treehouse of Horror III">The Simpsons Episode 504 Treehouse of Horror III</a></li>
  <li><a href="/ep/s1e2" title="Watch The Simpsons Season 1 Episode 2 – Bart the Genius">The Simpsons Season 1 Episode 2 – Bart the Genius</a></li>
  <li><a href="/movie" title="Watch The Simpsons Movie">The Simpsons Movie</a></li>
</ul>
</body></html>"#;

pub const SEASON_20_PAGE: &str = r#"<html><body>
<ul>
  <li><a href="https://site.test/watch/s20e1" title="Watch The Simpsons Season 20 Episode 1">Sex, Pies and Idiot Scrapes</a></li>
  <li><a href="https://site.test/watch/s20e2" title="Watch The Simpsons Season 20 Episode 2">Lost Verizon</a></li>
  <li><a href="https://site.test/watch/s20e3" title="Watch The Simpsons Season 20 Episode 3">Double, Double, Boy in Trouble</a></li>
</ul>
<ul><li><a href="https://site.test/ads" title="Sponsored">Sponsored</a></li></ul>
</body></html>"#;

/// In-memory pages keyed by URL; every request is recorded.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site() -> Self {
        Self::new()
            .page(CATALOG_URL, CATALOG_PAGE)
            .page("https://site.test/simpsons", LEGACY_PAGE)
            .page("https://site.test/simpsons-season-20", SEASON_20_PAGE)
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch_page(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("HTTP error: 404 Not Found for {}", url))
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<String>>,
}

impl RecordingLauncher {
    pub fn launched(&self) -> Vec<String> {
        self.launched.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        self.launched.borrow_mut().push(url.to_string());
        Ok(())
    }
}
