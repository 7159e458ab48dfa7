//! Uniform random sources consumed by the samplers
//!
//! Every random decision in generation goes through a [`RandomSource`], so a
//! document is reproducible whenever the source is.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Supplier of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_uniform(&mut self) -> f64;
}

/// Standard generator backed source, either seeded or drawn from entropy
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Create a deterministic source
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the thread-local generator
    ///
    /// Every call yields an observably distinct stream.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted
///
/// An empty list behaves as an endless stream of zeros.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source replaying `values` in order
    pub const fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values
                .get(self.cursor % self.values.len())
                .copied()
                .unwrap_or(0.0)
        };
        self.cursor += 1;
        value
    }
}
