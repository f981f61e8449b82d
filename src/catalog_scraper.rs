use anyhow::{Context, Result};
use reqwest::Url;
use scraper::{Html, Selector};

use crate::error::ScrapeError;
use crate::models::{Episode, Season};
use crate::page_fetcher::PageFetcher;
use crate::title_parser::TitleParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: Option<String>,
}

/// Scrapes season and episode listings from the catalog site.
///
/// Selectors are tied to the current markup of the site and break when it
/// is redesigned.
pub struct CatalogScraper<F> {
    fetcher: F,
    show: String,
    catalog_url: String,
    title_parser: TitleParser,
}

impl<F: PageFetcher> CatalogScraper<F> {
    pub fn new(fetcher: F, show: &str, catalog_url: &str) -> Result<Self> {
        Ok(Self {
            fetcher,
            show: show.to_string(),
            catalog_url: catalog_url.to_string(),
            title_parser: TitleParser::new(show)?,
        })
    }

    /// Lists every season linked from the catalog page.
    ///
    /// The anchor named exactly after the show points at the legacy page
    /// holding several seasons at once; it is expanded in place.
    pub fn scrape_seasons(&self) -> Result<Vec<Season>> {
        let html = self.fetcher.fetch_page(&self.catalog_url)?;
        let selector = format!("ul > li {}", title_prefix_selector(&self.show));
        let anchors = select_anchors(&html, &self.catalog_url, &selector)?;

        let mut seasons = Vec::new();
        for anchor in anchors {
            let Some(href) = anchor.href else {
                tracing::warn!(text = %anchor.text, "season anchor without href");
                continue;
            };

            if anchor.text == self.show {
                let legacy = self
                    .scrape_legacy_seasons(&href)
                    .with_context(|| format!("Failed to expand legacy seasons from {href}"))?;
                seasons.extend(legacy);
            } else {
                seasons.push(Season::linked(anchor.text, href));
            }
        }

        tracing::info!(count = seasons.len(), "scraped seasons");
        Ok(seasons)
    }

    pub fn scrape_legacy_seasons(&self, parent_url: &str) -> Result<Vec<Season>> {
        let html = self.fetcher.fetch_page(parent_url)?;
        let selector = format!(
            "ul > li > {}",
            title_prefix_selector(&format!("Watch {}", self.show))
        );

        let anchors = select_anchors(&html, parent_url, &selector)?
            .into_iter()
            .filter_map(|anchor| match anchor.href {
                Some(href) => Some((anchor.text, href)),
                None => {
                    tracing::warn!(text = %anchor.text, "episode anchor without href");
                    None
                }
            });

        Ok(self.title_parser.merge(anchors)?)
    }

    pub fn scrape_episodes(&self, season_url: &str) -> Result<Vec<Episode>> {
        let html = self.fetcher.fetch_page(season_url)?;
        let selector = format!("ul > li > {}", title_prefix_selector("Watch"));

        let episodes: Vec<Episode> = select_anchors(&html, season_url, &selector)?
            .into_iter()
            .filter_map(|anchor| match anchor.href {
                Some(href) => Some(Episode::new(anchor.text, href)),
                None => {
                    tracing::warn!(text = %anchor.text, "episode anchor without href");
                    None
                }
            })
            .collect();

        tracing::info!(count = episodes.len(), url = season_url, "scraped episodes");
        Ok(episodes)
    }
}

/// `a[title^="<prefix>"]` with the prefix quoted for use inside a selector.
fn title_prefix_selector(prefix: &str) -> String {
    let quoted = prefix.replace('\\', "\\\\").replace('"', "\\\"");
    format!("a[title^=\"{quoted}\"]")
}

/// Runs `selector` over `html` and returns the matched anchors, with
/// relative `href`s resolved against `page_url`.
pub fn select_anchors(
    html: &str,
    page_url: &str,
    selector: &str,
) -> Result<Vec<Anchor>, ScrapeError> {
    let parsed_selector = Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    })?;

    let base = Url::parse(page_url).ok();
    let document = Html::parse_document(html);

    let anchors = document
        .select(&parsed_selector)
        .map(|element| {
            let text = element.text().collect::<String>().trim().to_string();
            let href = element
                .value()
                .attr("href")
                .map(|href| resolve_href(base.as_ref(), href));
            Anchor { text, href }
        })
        .collect();

    Ok(anchors)
}

fn resolve_href(base: Option<&Url>, href: &str) -> String {
    base.and_then(|base| base.join(href).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| href.to_string())
}
