use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use rand::Rng;

use crate::catalog::Catalog;
use crate::config::RunMode;
use crate::launcher::Launcher;
use crate::page_fetcher::PageFetcher;

/// Stop signal shared between the interrupt handler and the repeat loop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Picks and launches episodes. In [`RunMode::Repeat`] the user is prompted
/// on `input` after every launch; the loop ends on `q`, end of input or
/// cancellation. Returns the number of episodes launched.
pub fn run<F, R, L, I>(
    catalog: &Catalog<F>,
    rng: &mut R,
    launcher: &L,
    mode: RunMode,
    cancel: &CancelToken,
    mut input: I,
) -> Result<usize>
where
    F: PageFetcher,
    R: Rng + ?Sized,
    L: Launcher + ?Sized,
    I: BufRead,
{
    let mut launched = 0;

    loop {
        let selection = catalog.pick(rng)?;
        println!("{}: {}", selection.season.text, selection.episode.text);

        launcher.launch(&selection.episode.url)?;
        launched += 1;

        if mode == RunMode::Once || cancel.is_cancelled() {
            break;
        }

        print!("\nPress Enter for another episode, or type q to quit: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 || cancel.is_cancelled() || line.trim().eq_ignore_ascii_case("q") {
            break;
        }
    }

    Ok(launched)
}
