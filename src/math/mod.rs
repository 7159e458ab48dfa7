//! Sampling primitives for generation

/// Random variates: uniform integer, choice, triangular and normal
pub mod probability;
/// Injectable uniform random sources
pub mod random;

pub use random::{RandomSource, SequenceSource, StdRandomSource};
