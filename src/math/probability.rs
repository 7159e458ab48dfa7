//! Random variates drawn from an explicit [`RandomSource`]
//!
//! Each sampler consumes one or more uniform draws and never fails: degenerate
//! bounds collapse to the lower bound and out-of-range shape parameters are
//! clamped so results stay finite.

use crate::math::random::RandomSource;
use num_traits::ToPrimitive;

/// Redraws allowed before Box-Muller falls back to the smallest positive value
const MAX_ZERO_REDRAWS: usize = 64;

/// Uniform integer in `[min, max]` inclusive
///
/// Computed as `floor(u * (max - min + 1)) + min`. Returns `min` when
/// `max < min`.
pub fn uniform_int<R: RandomSource + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    let span = (max - min + 1) as f64;
    let offset = (rng.next_uniform() * span)
        .floor()
        .to_i64()
        .unwrap_or(0)
        .max(0);
    (min + offset).min(max)
}

/// Uniformly chosen element, or `None` for an empty slice
pub fn choice<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = (rng.next_uniform() * items.len() as f64)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(items.len() - 1);
    items.get(index)
}

/// Triangular variate with density peaking at `mode`
///
/// The mode is clamped into `[min, max]` before sampling, so calls such as
/// `triangular(3.0, 6.0, 25.0)` degrade to a ramp peaking at the upper bound.
/// Returns `min` when `max <= min`.
pub fn triangular<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64, mode: f64) -> f64 {
    if max.partial_cmp(&min) != Some(std::cmp::Ordering::Greater) {
        return min;
    }
    let mode = if mode.is_nan() { min } else { mode.clamp(min, max) };
    let range = max - min;
    let c = (mode - min) / range;
    let u = rng.next_uniform();

    let value = if u < c {
        min + (u * range * (mode - min)).max(0.0).sqrt()
    } else {
        max - ((1.0 - u) * range * (max - mode)).max(0.0).sqrt()
    };
    value.clamp(min, max)
}

/// Normal variate via the Box-Muller transform
///
/// Output is unbounded; callers clamp where a floor is required.
pub fn normal<R: RandomSource + ?Sized>(rng: &mut R, mean: f64, stddev: f64) -> f64 {
    let u = nonzero_uniform(rng);
    let v = nonzero_uniform(rng);
    let z = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();
    z.mul_add(stddev, mean)
}

/// Uniform draw in `(0, 1)`, keeping the logarithm in Box-Muller defined
fn nonzero_uniform<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    for _ in 0..MAX_ZERO_REDRAWS {
        let u = rng.next_uniform();
        if u > 0.0 && u <= 1.0 {
            return u;
        }
    }
    f64::MIN_POSITIVE
}
