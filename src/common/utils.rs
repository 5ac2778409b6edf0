//! This file provides some common functions
//! such as weighted error calculation.
use rayon::prelude::*;

use crate::{BoostError, Classifier, Sample};


/// Returns `v[i] = true` iff `h` predicts the target of `sample[i]`.
/// The predictions run in parallel;
/// the order of the output follows `sample`.
#[inline(always)]
pub(crate) fn correctness<Y, H>(sample: &Sample<Y>, h: &H)
    -> Result<Vec<bool>, BoostError>
    where Y: PartialEq + Send + Sync,
          H: Classifier<Y> + Sync,
{
    sample.records()
        .par_iter()
        .map(|record| h.is_correct(record))
        .collect()
}


/// Returns the total mass of `dist` on the records
/// `h` misclassifies, clamped to `[0, 1]`.
///
/// The sum runs sequentially in index order
/// so that the result does not depend on the thread schedule.
#[inline(always)]
pub(crate) fn weighted_error(dist: &[f64], correct: &[bool]) -> f64 {
    dist.iter()
        .zip(correct)
        .filter(|(_, &c)| !c)
        .fold(0f64, |acc, (d, _)| acc + d)
        .clamp(0f64, 1f64)
}


/// Divides each entry by the sum of the entries.
/// Returns the sum before normalization.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) -> f64 {
    let z = items.iter().sum::<f64>();

    assert!(z > 0f64, "cannot normalize {items:?}");

    items.iter_mut()
        .for_each(|item| { *item /= z; });
    z
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_error() {
        let dist = [0.1, 0.2, 0.3, 0.4];
        let correct = [true, false, true, false];
        let e = weighted_error(&dist, &correct);
        assert!((e - 0.6).abs() < 1e-12, "expected 0.6, got {e}");

        let all = [true; 4];
        let e = weighted_error(&dist, &all);
        assert_eq!(e, 0f64);
        assert!(e.is_sign_positive());
        assert_eq!(format!("{e}"), "0");
    }

    #[test]
    fn test_normalize() {
        let mut items = vec![1.0, 3.0];
        let z = normalize(&mut items);
        assert_eq!(z, 4.0);
        assert_eq!(items, vec![0.25, 0.75]);
    }

    #[test]
    #[should_panic]
    fn test_normalize_zero() {
        let mut items = vec![0.0, 0.0];
        normalize(&mut items);
    }
}
