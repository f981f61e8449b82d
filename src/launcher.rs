use anyhow::{Context, Result};

pub trait Launcher {
    fn launch(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the OS default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        tracing::debug!(url, "opening browser");
        open::that(url).with_context(|| format!("Failed to open {url} in the browser"))
    }
}

/// Prints the URL instead of opening it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintLauncher;

impl Launcher for PrintLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        println!("{url}");
        Ok(())
    }
}
