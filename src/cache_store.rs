use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde::de::DeserializeOwned;

const SEASONS_FILE: &str = "seasons.json";
const EPISODES_DIR: &str = "episodes";

/// JSON snapshots of scraped data kept under the application directory.
///
/// Files never expire; delete them to force a fresh scrape.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let episodes_dir = dir.join(EPISODES_DIR);
        fs::create_dir_all(&episodes_dir).with_context(|| {
            format!("Failed to create cache directory {}", episodes_dir.display())
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn seasons_path(&self) -> PathBuf {
        self.dir.join(SEASONS_FILE)
    }

    /// Episode list of one season, kept apart from `seasons.json` so no
    /// season title can collide with it.
    pub fn season_path(&self, season_title: &str) -> PathBuf {
        self.dir
            .join(EPISODES_DIR)
            .join(format!("{}.json", sanitize_season_title(season_title)))
    }

    /// Reads a cached value. Missing or corrupt files count as a miss.
    pub fn read<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        tracing::debug!(path = %path.display(), "looking for cache file");

        let text = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&text) {
            Ok(value) => {
                let modified = fs::metadata(path)
                    .and_then(|m| m.modified())
                    .map(|t| {
                        DateTime::<Local>::from(t)
                            .format("%Y-%m-%d %H:%M:%S")
                            .to_string()
                    })
                    .unwrap_or_else(|_| "unknown".to_string());
                tracing::info!(path = %path.display(), %modified, "cache found");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable cache file"
                );
                None
            }
        }
    }

    /// Overwrites `path` with `value` as JSON. Failures are logged and returned.
    pub fn write<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let result = serde_json::to_string(value)
            .context("Failed to serialize cache contents")
            .and_then(|json| {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write cache file {}", path.display()))
            });

        if let Err(e) = &result {
            tracing::error!(
                path = %path.display(),
                error = %format!("{e:#}"),
                "cache write failed"
            );
        }
        result
    }

    /// Returns the cached value at `path`, or runs `fetch` and caches its result.
    pub fn load_or_fetch<T, F>(&self, path: &Path, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.read(path) {
            return Ok(value);
        }

        let value = fetch()?;
        self.write(path, &value)?;
        Ok(value)
    }
}

/// Turns a season title into a file stem: pieces between characters that are
/// not allowed in file names are joined with `_`, trailing dots removed.
pub fn sanitize_season_title(title: &str) -> String {
    let is_invalid = |c: char| {
        matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || c.is_control()
    };
    let joined = title
        .split(is_invalid)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let stem = joined.trim_end_matches('.');
    if stem.is_empty() {
        "season".to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_season_title() {
        assert_eq!(sanitize_season_title("The Simpsons Season 3"), "The Simpsons Season 3");
        assert_eq!(sanitize_season_title("Season 1: Pilot/Intro"), "Season 1_ Pilot_Intro");
        assert_eq!(sanitize_season_title("Season ??? 2..."), "Season _ 2");
        assert_eq!(sanitize_season_title("..."), "season");
    }

    #[test]
    fn test_read_missing_file_is_miss() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        let value: Option<Vec<String>> = store.read(&store.seasons_path());
        assert!(value.is_none());
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = CacheStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
        assert!(store.dir().join("episodes").is_dir());
    }

    #[test]
    fn test_write_failure_is_returned() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        let bad_path = dir.path().join("missing").join("seasons.json");
        assert!(store.write(&bad_path, &vec!["x"]).is_err());
    }
}
