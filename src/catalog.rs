use anyhow::{Context, Result};
use rand::Rng;

use crate::cache_store::CacheStore;
use crate::catalog_scraper::CatalogScraper;
use crate::error::ScrapeError;
use crate::models::{Episode, Season};
use crate::page_fetcher::PageFetcher;
use crate::picker::pick;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub season: Season,
    pub episode: Episode,
}

/// Seasons and episodes served from the cache, scraped on a miss.
pub struct Catalog<F> {
    scraper: CatalogScraper<F>,
    cache: CacheStore,
}

impl<F: PageFetcher> Catalog<F> {
    pub fn new(scraper: CatalogScraper<F>, cache: CacheStore) -> Self {
        Self { scraper, cache }
    }

    pub fn seasons(&self) -> Result<Vec<Season>> {
        let path = self.cache.seasons_path();
        self.cache
            .load_or_fetch(&path, || self.scraper.scrape_seasons())
            .context("Failed to load seasons")
    }

    /// Episodes of `season`: the per-season cache, else the inline list,
    /// else a scrape of the season page. The cache file is rewritten on a miss.
    pub fn episodes(&self, season: &Season) -> Result<Vec<Episode>> {
        let path = self.cache.season_path(&season.text);
        self.cache
            .load_or_fetch(&path, || match (&season.episodes, &season.url) {
                (Some(episodes), _) => Ok(episodes.clone()),
                (None, Some(url)) => self.scraper.scrape_episodes(url),
                (None, None) => Err(ScrapeError::EmptySeason(season.text.clone()).into()),
            })
            .with_context(|| format!("Failed to load episodes for {}", season.text))
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Selection> {
        let seasons = self.seasons()?;
        let season = pick(rng, &seasons, "seasons")?.clone();
        tracing::debug!(season = %season.text, "picked season");

        let episodes = self.episodes(&season)?;
        let episode = pick(rng, &episodes, "episodes")?.clone();
        tracing::debug!(episode = %episode.text, url = %episode.url, "picked episode");

        Ok(Selection { season, episode })
    }
}
