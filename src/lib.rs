//! # fast_discrete
//!
//! Sample from a fixed discrete distribution in O(1) per draw.
//!
//! This crate implements
//! [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method):
//! an O(n) pass turns `n` weights into `n` equal-width buckets, each shared
//! by at most two outcomes, so a single uniform draw picks an outcome with
//! one multiplication and one comparison.
//!
//! There are two primary ways to use it:
//!
//! 1. **Indices** with [`DiscreteDistribution`]
//! 2. **Items** with [`WeightedChoice`], which pairs each weight with a value.
//!
//! ## Quick start (indices)
//!
//! ```rust
//! use fast_discrete::DiscreteDistribution;
//!
//! # fn main() -> Result<(), fast_discrete::DistError> {
//! let dist = DiscreteDistribution::new(&[20.0, 10.0, 30.0])?;
//!
//! let mut rng = rand::rng();
//! let i = dist.sample(&mut rng)?; // 0, 1 or 2
//! assert!(dist.range().contains(&i));
//!
//! // Any uniform source works: feed draws in [0, 1) directly.
//! assert_eq!(dist.sample_with(0.25)?, dist.sample_with(0.25)?);
//! # Ok(()) }
//! ```
//!
//! ## Quick start (items)
//!
//! ```rust
//! use fast_discrete::WeightedChoice;
//!
//! # fn main() -> Result<(), fast_discrete::DistError> {
//! let route = WeightedChoice::from_pairs([
//!     ("eu-west", 60.0),
//!     ("us-east", 30.0),
//!     ("ap-south", 10.0),
//! ])?;
//!
//! let mut rng = rand::rng();
//! let backend = route.sample(&mut rng)?; // &&str
//! println!("routing to {backend}");
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Build**: O(n) to normalize the weights and fill the alias table.
//! * **Sample**: O(1) per draw (1 random number, 1 branch), no allocation.
//! * **Space**: one bucket per outcome (two indices + f64) plus the
//!   probability vector.
//!
//! ## Gotchas
//! * Weights must be **non-negative** and finite, and not all zero.
//! * An empty weight slice builds fine, but sampling it returns
//!   [`DistError::EmptyDistribution`].
//! * This is for *fixed* distributions. If the weights change, rebuild.
//!
//! ## Features
//! * `log`: emit `trace`/`debug` records through the [`log`] crate while
//!   building tables.
//!
//! [`log`]: https://docs.rs/log

#[macro_use]
mod log_macros;

mod alias;
mod distribution;
mod error;
mod normalize;
mod sampler;

/// A minimal interface for "index samplers".
/// Implemented by [`DiscreteDistribution`].
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    fn len(&self) -> usize;
    fn try_sample_index<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DistError>;
}

pub use alias::{AliasTable, Bucket};
pub use distribution::DiscreteDistribution;
pub use error::{DistError, WeightError};
pub use normalize::normalize;

use rand::Rng;

/// Items paired with weights, sampled through an internal
/// [`DiscreteDistribution`].
///
/// Build it from any iterator of `(item, weight)` where `weight >= 0`.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    dist: DiscreteDistribution,
    items: Vec<T>,
}

impl<T> WeightedChoice<T> {
    /// Build from any `(item, weight)` iterator.
    ///
    /// # Errors
    /// [`DistError::InvalidWeights`] if any weight is negative or not
    /// finite, or if there are items and their weights sum to zero.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, DistError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (items, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let dist = DiscreteDistribution::new(&weights)?;
        Ok(Self { dist, items })
    }

    /// Sample an item **by reference** (no `Clone` bound).
    ///
    /// # Errors
    /// [`DistError::EmptyDistribution`] if there are no items.
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> Result<&'a T, DistError> {
        let idx = self.dist.sample(rng)?;
        Ok(&self.items[idx])
    }

    /// Sample an item **by value** (clones the chosen element).
    ///
    /// Prefer [`sample`](Self::sample) if you don't need ownership.
    ///
    /// # Errors
    /// [`DistError::EmptyDistribution`] if there are no items.
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T, DistError>
    where
        T: Clone,
    {
        self.sample(rng).cloned()
    }

    /// Map a uniform draw in `[0, 1)` to an item.
    ///
    /// # Errors
    /// [`DistError::EmptyDistribution`] if there are no items.
    pub fn sample_with(&self, draw: f64) -> Result<&T, DistError> {
        let idx = self.dist.sample_with(draw)?;
        Ok(&self.items[idx])
    }

    /// The distribution over item indices.
    pub fn distribution(&self) -> &DiscreteDistribution {
        &self.dist
    }

    /// Items in the order they were given.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn smoke_pairs() {
        let choice = WeightedChoice::from_pairs([("a", 1.0), ("b", 3.0)]).unwrap();
        let mut rng = rand::rng();
        let _ = choice.sample(&mut rng).unwrap();
        assert_eq!(choice.len(), 2);
    }

    #[test]
    fn skips_zero_weight_items() {
        let choice =
            WeightedChoice::from_pairs([("never", 0.0), ("always", 2.0), ("also never", 0.0)])
                .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            assert_eq!(choice.sample_owned(&mut rng), Ok("always"));
        }
    }

    #[test]
    fn sample_with_matches_distribution() {
        let choice = WeightedChoice::from_pairs([('x', 1.0), ('y', 1.0), ('z', 2.0)]).unwrap();
        for k in 0..50 {
            let draw = k as f64 / 50.0;
            let idx = choice.distribution().sample_with(draw).unwrap();
            assert_eq!(choice.sample_with(draw), Ok(&choice.items()[idx]));
        }
    }

    #[test]
    fn empty_choice() {
        let choice = WeightedChoice::<u8>::from_pairs([]).unwrap();
        assert!(choice.is_empty());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choice.sample(&mut rng), Err(DistError::EmptyDistribution));
    }

    #[test]
    fn rejects_bad_weights() {
        assert!(matches!(
            WeightedChoice::from_pairs([("a", 1.0), ("b", -2.0)]),
            Err(DistError::InvalidWeights(WeightError::Negative { index: 1, .. }))
        ));
        assert!(matches!(
            WeightedChoice::from_pairs([("a", 0.0)]),
            Err(DistError::InvalidWeights(WeightError::ZeroSum))
        ));
    }
}
