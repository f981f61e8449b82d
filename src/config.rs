use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;

pub const DEFAULT_SHOW: &str = "The Simpsons";
pub const DEFAULT_CATALOG_URL: &str = "https://www.watchcartoononline.io/cartoon-list";
pub const APP_NAME: &str = "RandomSimpsonsEpisode";
pub const SEED_FILE: &str = "random.seed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Once,
    Repeat,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub show: String,
    pub catalog_url: String,
    pub seed: Option<i64>,
    pub mode: RunMode,
    pub dry_run: bool,
}

impl AppConfig {
    pub fn seed_path(&self) -> PathBuf {
        self.data_dir.join(SEED_FILE)
    }
}

/// Per-user local data directory (`%LOCALAPPDATA%` on Windows, XDG on Linux).
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_local_dir().to_path_buf())
}

pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    show: String,
    catalog_url: String,
    seed: Option<i64>,
    mode: RunMode,
    dry_run: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            data_dir: None,
            show: DEFAULT_SHOW.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            seed: None,
            mode: RunMode::Once,
            dry_run: false,
        }
    }

    pub fn data_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn show(mut self, show: impl Into<String>) -> Self {
        self.show = show.into();
        self
    }

    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    pub fn seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn build(self) -> Result<AppConfig> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => default_data_dir().ok_or_else(|| {
                anyhow::anyhow!("Could not determine a data directory; pass --data-dir")
            })?,
        };

        if self.show.trim().is_empty() {
            return Err(anyhow::anyhow!("Show name must not be empty"));
        }

        Ok(AppConfig {
            data_dir,
            show: self.show,
            catalog_url: self.catalog_url,
            seed: self.seed,
            mode: self.mode,
            dry_run: self.dry_run,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
