//! Weighted restaurant selection.
//!
//! Each record is weighted by `1 / (times_picked + 1)`, so venues picked
//! less often are proportionally more likely to come up. Selection is
//! standard cumulative-weight sampling over the list in its original
//! order. The picker performs no I/O; persisting the incremented counter
//! is the caller's job.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LunchError, Result};
use crate::restaurant::Restaurant;

/// Source of uniform random draws, injectable so tests can fix the draw.
/// `Send` so a draw source can be held across await points.
pub trait RandomSource: Send {
    /// Draws a value uniformly from `[0, total)`. `total` is positive.
    fn draw(&mut self, total: f64) -> f64;
}

/// Production randomness: a fresh draw from the thread-local rng per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&mut self, total: f64) -> f64 {
        rand::thread_rng().gen_range(0.0..total)
    }
}

/// Deterministic randomness from a fixed seed. Same seed, same picks.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self, total: f64) -> f64 {
        self.0.gen_range(0.0..total)
    }
}

/// Selection weight of one record. A record never picked weighs 1.0 (the
/// maximum); weight only approaches zero, so every record stays pickable.
pub fn weight(record: &Restaurant) -> f64 {
    1.0 / (f64::from(record.times_picked) + 1.0)
}

/// Picks one index from a non-empty list, favoring low pick counts.
///
/// Accumulates weights in list order and returns the first index whose
/// running sum exceeds the draw. The draw lives in `[0, total)`, so a
/// record with any weight at the front of the list is selected by a zero
/// draw. If floating-point rounding lets the draw survive the whole scan,
/// the last index is selected.
pub fn pick_index(records: &[Restaurant], rng: &mut dyn RandomSource) -> Result<usize> {
    if records.is_empty() {
        return Err(LunchError::invalid_input(
            "cannot pick from an empty restaurant list",
        ));
    }

    let weights: Vec<f64> = records.iter().map(weight).collect();
    let total: f64 = weights.iter().sum();
    let draw = rng.draw(total);

    let mut acc = 0.0;
    for (index, w) in weights.iter().enumerate() {
        acc += w;
        if draw < acc {
            return Ok(index);
        }
    }
    Ok(records.len() - 1)
}
