use rand::Rng;

use crate::{DiscreteDistribution, IndexSampler, error::DistError};

/// Alias-table sampling through the generic index interface.
impl IndexSampler for DiscreteDistribution {
    #[inline]
    fn len(&self) -> usize {
        DiscreteDistribution::len(self)
    }
    #[inline]
    fn try_sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DistError> {
        DiscreteDistribution::sample(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn draw_all<S: IndexSampler>(sampler: &S, rng: &mut Pcg32, draws: usize) -> Vec<usize> {
        let mut counts = vec![0; sampler.len()];
        for _ in 0..draws {
            counts[sampler.try_sample_index(rng).unwrap()] += 1;
        }
        counts
    }

    #[test]
    fn trait_forwards_to_distribution() {
        let dist = DiscreteDistribution::new(&[0.0, 1.0, 0.0]).unwrap();
        let mut rng = Pcg32::seed_from_u64(5);
        assert_eq!(IndexSampler::len(&dist), 3);
        assert_eq!(draw_all(&dist, &mut rng, 500), vec![0, 500, 0]);
    }
}
