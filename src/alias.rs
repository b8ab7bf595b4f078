//! Vose's alias method: O(n) table construction, O(1) lookup.
//!
//! The unit interval is cut into `n` equal slots. Slot `i` covers
//! `[i/n, (i+1)/n)` and is shared by at most two outcomes, split at a
//! threshold expressed in the same global units as the draw. A draw therefore
//! picks its slot with one multiplication and its outcome with one comparison.

use std::fmt;

/// One slot of an [`AliasTable`].
///
/// Draws below [`threshold`](Self::threshold) resolve to
/// [`outcome_a`](Self::outcome_a), all others to
/// [`outcome_b`](Self::outcome_b). A degenerate bucket has `a == b` and a
/// threshold of `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    a: usize,
    b: usize,
    threshold: f64,
}

impl Bucket {
    const fn pure(index: usize) -> Self {
        Self {
            a: index,
            b: index,
            threshold: 0.0,
        }
    }

    #[inline]
    pub const fn outcome_a(&self) -> usize {
        self.a
    }

    #[inline]
    pub const fn outcome_b(&self) -> usize {
        self.b
    }

    #[inline]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether this bucket always yields the same outcome.
    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Probability mass still owned by an outcome while buckets are filled.
#[derive(Debug, Clone, Copy)]
struct Segment {
    mass: f64,
    index: usize,
}

/// Immutable alias table over `n` outcomes.
///
/// Holds exactly `n` buckets, or a single degenerate `(0, 0, 0.0)` bucket
/// when built from an empty probability vector.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    buckets: Vec<Bucket>,
}

impl AliasTable {
    /// Build the table from a probability vector summing to one. O(n).
    ///
    /// Inputs are expected to come from [`normalize`](crate::normalize);
    /// weights are validated there, before any bucket exists.
    pub fn build(probabilities: &[f64]) -> Self {
        let n = probabilities.len();
        if n == 0 {
            return Self {
                buckets: vec![Bucket::pure(0)],
            };
        }

        let width = 1.0 / n as f64;
        let mut light = Vec::with_capacity(n);
        let mut big = Vec::with_capacity(n);

        for (index, &mass) in probabilities.iter().enumerate() {
            let segment = Segment { mass, index };
            if mass < width {
                light.push(segment);
            } else {
                big.push(segment);
            }
        }

        let mut buckets = Vec::with_capacity(n);

        while let Some(s) = light.pop() {
            // Only rounding can leave light segments with nothing to pair.
            let Some(b) = big.pop() else {
                light.push(s);
                break;
            };

            let start = buckets.len() as f64 / n as f64;
            // `len * draw` can round a draw just below `start` up into this
            // slot, where it would still compare below the threshold. An
            // outcome without mass gives its half away entirely.
            buckets.push(if s.mass > 0.0 {
                Bucket {
                    a: s.index,
                    b: b.index,
                    threshold: s.mass + start,
                }
            } else {
                Bucket::pure(b.index)
            });

            let left_over = Segment {
                mass: s.mass + b.mass - width,
                index: b.index,
            };
            if left_over.mass < width {
                light.push(left_over);
            } else {
                big.push(left_over);
            }
        }

        let mixed = buckets.len();

        // Whatever is left fills exactly one slot on its own.
        buckets.extend(big.into_iter().map(|l| Bucket::pure(l.index)));
        buckets.extend(light.into_iter().map(|s| Bucket::pure(s.index)));

        trace!(
            "alias table: {} outcomes, {} mixed buckets, {} pure buckets",
            n,
            mixed,
            buckets.len() - mixed
        );

        Self { buckets }
    }

    /// Map one uniform draw in `[0, 1)` to an outcome index. O(1).
    ///
    /// Draws are clamped to the table: values at or above one land in the
    /// last bucket, negative values and NaN in the first. On the degenerate
    /// table of an empty distribution this always returns `0`.
    #[inline]
    pub fn lookup(&self, draw: f64) -> usize {
        let len = self.buckets.len();
        // `as` saturates, so this is in `0..=usize::MAX` before clamping.
        let index = ((len as f64 * draw) as usize).min(len - 1);
        let bucket = &self.buckets[index];
        if draw < bucket.threshold {
            bucket.a
        } else {
            bucket.b
        }
    }

    /// All buckets in slot order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Number of buckets (at least one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}

impl fmt::Display for AliasTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "buckets: {}", self.buckets.len())?;
        for bucket in &self.buckets {
            writeln!(f, "{}  {}  {}", bucket.a, bucket.b, bucket.threshold)?;
        }
        Ok(())
    }
}
