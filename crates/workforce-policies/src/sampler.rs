//! Sampling primitives shared by every policy.
//!
//! - [`WeightedTable`] -- a discrete distribution built once from
//!   `(item, weight)` pairs: a cumulative-weight table resolved with a
//!   single uniform draw. Items and weights live side by side, so they can
//!   never drift out of sync.
//! - [`RateRange`] -- a closed range of fractions (probabilities, growth
//!   rates) drawn uniformly.
//! - [`IntRange`] -- a closed integer range drawn uniformly.
//!
//! All draws come from the caller's generator; nothing here owns an RNG.

use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, SamplerError};

// ---------------------------------------------------------------------------
// Weighted categorical choice
// ---------------------------------------------------------------------------

/// A discrete distribution over `T`.
///
/// Weights are relative; they need not sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTable<T> {
    /// Items in insertion order.
    items: Vec<T>,
    /// Running weight total after each item.
    cumulative: Vec<f64>,
    /// Sum of all weights.
    total: f64,
}

impl<T> WeightedTable<T> {
    /// Build a table from `(item, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError`] if there are no entries, a weight is
    /// negative or not finite, or all weights are zero.
    pub fn new<I>(entries: I) -> Result<Self, SamplerError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let mut items = Vec::new();
        let mut cumulative = Vec::new();
        let mut total: f64 = 0.0;

        for (index, (item, weight)) in entries.into_iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SamplerError::InvalidWeight { index, weight });
            }
            total += weight;
            items.push(item);
            cumulative.push(total);
        }

        if items.is_empty() {
            return Err(SamplerError::Empty);
        }
        if total <= 0.0 {
            return Err(SamplerError::ZeroTotal);
        }

        Ok(Self {
            items,
            cumulative,
            total,
        })
    }

    /// Number of items.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Sum of all weights.
    pub const fn total_weight(&self) -> f64 {
        self.total
    }

    /// Resolve a point in `[0, total_weight)` to an item.
    ///
    /// Points at or beyond the total resolve to the last item with a
    /// non-zero weight, so float rounding never falls off the end.
    pub fn select(&self, point: f64) -> Option<&T> {
        let index = self.cumulative.partition_point(|&c| c <= point);
        let last_live = self
            .cumulative
            .iter()
            .position(|&c| c >= self.total)
            .unwrap_or(0);
        self.items.get(index.min(last_live))
    }

    /// Draw one item with a single uniform draw.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, PolicyError> {
        let point = rng.random::<f64>() * self.total;
        self.select(point).ok_or(PolicyError::EmptyPool("weighted table"))
    }
}

// ---------------------------------------------------------------------------
// Uniform ranges
// ---------------------------------------------------------------------------

/// A closed range of fractions, drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl RateRange {
    /// Build a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a value in `[min, max]`. A degenerate range returns `min`
    /// without consuming a draw.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    /// Check that both bounds are probabilities and `min <= max`.
    pub fn validate_probability(&self, name: &str) -> Result<(), PolicyError> {
        let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_unit(self.min) || !in_unit(self.max) {
            return Err(PolicyError::invalid(format!(
                "{name} bounds must lie in [0, 1], got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(PolicyError::invalid(format!(
                "{name} is inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// A closed integer range, drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange<T> {
    /// Lower bound (inclusive).
    pub min: T,
    /// Upper bound (inclusive).
    pub max: T,
}

impl<T> IntRange<T>
where
    T: SampleUniform + PartialOrd + Copy + core::fmt::Display,
{
    /// Build a range.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Draw a value in `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        rng.random_range(self.min..=self.max)
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Check that `min <= max`.
    pub fn validate(&self, name: &str) -> Result<(), PolicyError> {
        if self.min > self.max {
            return Err(PolicyError::invalid(format!(
                "{name} is inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Pick one element uniformly.
pub fn choose<'a, T, R: Rng + ?Sized>(
    pool: &'a [T],
    rng: &mut R,
    what: &'static str,
) -> Result<&'a T, PolicyError> {
    pool.choose(rng).ok_or(PolicyError::EmptyPool(what))
}
