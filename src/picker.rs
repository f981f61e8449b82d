use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PickError;

/// Reads a decimal seed from `path`. Anything unreadable yields `None`.
pub fn read_seed(path: &Path) -> Option<i64> {
    let text = fs::read_to_string(path).ok()?;
    text.trim().parse::<i64>().ok()
}

/// Builds the run's generator: `seed` if given, else the seed file, else OS
/// randomness.
pub fn make_rng(seed: Option<i64>, seed_path: &Path) -> StdRng {
    match seed.or_else(|| read_seed(seed_path)) {
        Some(seed) => {
            tracing::info!(seed, "using seeded random");
            StdRng::seed_from_u64(seed as u64)
        }
        None => {
            tracing::info!("using random");
            StdRng::from_os_rng()
        }
    }
}

/// Uniformly picks one element of `items`.
pub fn pick<'a, T, R>(rng: &mut R, items: &'a [T], what: &'static str) -> Result<&'a T, PickError>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(PickError::Empty(what));
    }
    let index = rng.random_range(0..items.len());
    Ok(&items[index])
}
