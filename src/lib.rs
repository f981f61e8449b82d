pub mod cache_store;
pub mod catalog;
pub mod catalog_scraper;
pub mod config;
pub mod error;
pub mod launcher;
pub mod models;
pub mod page_fetcher;
pub mod picker;
pub mod runner;
pub mod title_parser;
