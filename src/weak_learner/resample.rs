//! Provides [`Resample`], boosting by resampling.
use rand::prelude::*;
use rand::distributions::WeightedIndex;

use crate::{BoostError, Sample, WeakLearner};
use crate::constants::DEFAULT_SEED;

const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;


/// A wrapper that trains the inner weak learner on a resample.
///
/// For each call of `produce`, `Resample` draws records
/// with replacement according to `dist`
/// and passes the drawn records to the inner learner
/// with the uniform distribution.
/// This is the original form of AdaBoost.M1,
/// which suits weak learners that ignore weights.
///
/// The random generator is seeded by `seed` and `dist`,
/// so the same distribution yields the same resample
/// on every platform and toolchain.
///
/// # Example
/// ```
/// use adaboostm1::prelude::*;
///
/// let wl = Resample::new(DecisionStump::new())
///     .seed(777)
///     .size(100);
/// assert_eq!(WeakLearner::<i64>::name(&wl), "Resample");
/// ```
#[derive(Debug, Clone)]
pub struct Resample<W> {
    inner: W,
    seed: u64,
    size: Option<usize>,
}


impl<W> Resample<W> {
    /// Construct a new instance of `Resample`.
    /// By default, the number of draws equals the sample size.
    pub fn new(inner: W) -> Self {
        Self { inner, seed: DEFAULT_SEED, size: None, }
    }


    /// Set the seed of the randomness for resampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the number of records drawn per call.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }


    /// Returns the inner weak learner.
    pub fn inner(&self) -> &W {
        &self.inner
    }


    // Mixes the bits of `dist` into `seed`.
    fn rng_seed(&self, dist: &[f64]) -> u64 {
        dist.iter()
            .fold(self.seed, |acc, d| {
                (acc.rotate_left(5) ^ d.to_bits()).wrapping_mul(GOLDEN)
            })
    }
}


impl<Y, W> WeakLearner<Y> for Resample<W>
    where Y: Clone,
          W: WeakLearner<Y>,
{
    type Hypothesis = W::Hypothesis;


    fn name(&self) -> &str {
        "Resample"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let size = self.size
            .map(|s| s.to_string())
            .unwrap_or_else(|| "# of records".to_string());
        let info = Vec::from([
            ("Inner learner", self.inner.name().to_string()),
            ("Seed", format!("{}", self.seed)),
            ("Draws", size),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample<Y>, dist: &[f64])
        -> Result<Self::Hypothesis, BoostError>
    {
        if dist.len() != sample.len() {
            return Err(BoostError::invalid(format!(
                "got {} weights for {} records", dist.len(), sample.len()
            )));
        }
        let size = self.size.unwrap_or(sample.len());
        if size == 0 {
            return Err(BoostError::invalid("cannot draw zero records"));
        }

        let index = WeightedIndex::new(dist)
            .map_err(|e| BoostError::WeakLearner(e.to_string()))?;

        let mut rng = StdRng::seed_from_u64(self.rng_seed(dist));
        let indices = (0..size).map(|_| index.sample(&mut rng))
            .collect::<Vec<usize>>();

        let resampled = sample.resample(&indices);
        let uni = vec![1f64 / size as f64; size];
        self.inner.produce(&resampled, &uni)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Classifier, Feature, Record};

    // Predicts the label of the first record it was trained on.
    struct First;

    struct Memo(&'static str);

    impl Classifier<&'static str> for Memo {
        fn predict(&self, _: &Record<&'static str>) -> &'static str { self.0 }
    }

    impl WeakLearner<&'static str> for First {
        type Hypothesis = Memo;
        fn name(&self) -> &str { "First" }
        fn produce(&self, sample: &Sample<&'static str>, dist: &[f64])
            -> Result<Memo, BoostError>
        {
            assert!(dist.iter().all(|&d| d == dist[0]));
            Ok(Memo(*sample[0].target()?))
        }
    }

    fn sample() -> Sample<&'static str> {
        ["a", "b", "c", "d"].into_iter()
            .map(|y| Record::labeled(vec![Feature::continuous("x", 0.0)], y))
            .collect()
    }

    #[test]
    fn test_draws_follow_distribution() {
        let sample = sample();
        let wl = Resample::new(First).seed(7);
        for k in 0..4 {
            let mut dist = vec![0f64; 4];
            dist[k] = 1f64;
            let h = wl.produce(&sample, &dist).unwrap();
            assert_eq!(h.0, *sample[k].target().unwrap());
        }
    }

    #[test]
    fn test_same_distribution_same_resample() {
        let sample = sample();
        let wl = Resample::new(First).seed(7);
        let dist = vec![0.25; 4];
        let a = wl.produce(&sample, &dist).unwrap();
        let b = wl.produce(&sample, &dist).unwrap();
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn test_seed_is_pinned() {
        let wl = Resample::new(First).seed(7);
        assert_eq!(wl.rng_seed(&[]), 7);
        assert_eq!(wl.rng_seed(&[0.25; 4]), 6_048_390_962_440_400_193);

        let a = wl.rng_seed(&[0.5, 0.25, 0.25]);
        let b = wl.rng_seed(&[0.25, 0.5, 0.25]);
        assert_eq!(a, 9_022_972_575_024_319_434);
        assert_eq!(b, 9_822_958_568_282_813_059);
    }

    #[test]
    fn test_zero_distribution_fails() {
        let sample = sample();
        let wl = Resample::new(First);
        let result = wl.produce(&sample, &[0f64; 4]);
        assert!(matches!(result, Err(BoostError::WeakLearner(_))));
    }
}
