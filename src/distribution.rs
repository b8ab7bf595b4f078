use std::ops::Range;

use rand::Rng;

use crate::alias::{AliasTable, Bucket};
use crate::error::DistError;
use crate::normalize::normalize;

/// A fixed discrete distribution over the indices `0..n`.
///
/// Built once from a weight vector, then sampled in O(1) per draw. To change
/// the weights, build a new distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteDistribution {
    probabilities: Vec<f64>,
    table: AliasTable,
}

impl DiscreteDistribution {
    /// Build from non-negative weights. O(n).
    ///
    /// An empty slice builds an empty distribution, which can be inspected
    /// but not sampled.
    ///
    /// # Errors
    /// [`DistError::InvalidWeights`] if a weight is negative or not finite,
    /// or if the weights are non-empty and sum to zero.
    pub fn new(weights: &[f64]) -> Result<Self, DistError> {
        let probabilities = normalize(weights)?;
        let table = AliasTable::build(&probabilities);
        debug!("discrete distribution over {} outcomes", probabilities.len());
        Ok(Self {
            probabilities,
            table,
        })
    }

    /// Map a uniform draw in `[0, 1)` to an outcome index.
    ///
    /// Deterministic in `draw`; out-of-range draws are clamped as described
    /// on [`AliasTable::lookup`].
    ///
    /// # Errors
    /// [`DistError::EmptyDistribution`] if there are no outcomes.
    #[inline]
    pub fn sample_with(&self, draw: f64) -> Result<usize, DistError> {
        if self.probabilities.is_empty() {
            return Err(DistError::EmptyDistribution);
        }
        Ok(self.table.lookup(draw))
    }

    /// Draw an outcome index using `rng` as the uniform source.
    ///
    /// # Errors
    /// [`DistError::EmptyDistribution`] if there are no outcomes.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DistError> {
        // `StandardUniform` for f64 yields values in [0, 1).
        self.sample_with(rng.random::<f64>())
    }

    /// Count how often each outcome comes up over `draws` samples.
    ///
    /// # Errors
    /// [`DistError::EmptyDistribution`] if there are no outcomes.
    pub fn histogram<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        draws: usize,
    ) -> Result<Vec<usize>, DistError> {
        let mut counts = vec![0usize; self.len()];
        for _ in 0..draws {
            counts[self.sample(rng)?] += 1;
        }
        Ok(counts)
    }

    /// Normalized probabilities, one per outcome.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// The underlying alias table.
    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Buckets of the underlying table, in slot order.
    pub fn buckets(&self) -> &[Bucket] {
        self.table.buckets()
    }

    /// Indices [`sample`](Self::sample) can return: `0..n`.
    pub fn range(&self) -> Range<usize> {
        0..self.probabilities.len()
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Whether there are no outcomes; such a distribution cannot be sampled.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}
