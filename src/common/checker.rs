//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{BoostError, Sample};
use crate::constants::SIMPLEX_TOLERANCE;


/// Check whether the training sample is valid or not.
/// A training sample must have at least one record
/// and every record must have a target value.
#[inline(always)]
pub(crate) fn check_sample<Y>(sample: &Sample<Y>) -> Result<(), BoostError> {
    if sample.is_empty() {
        return Err(BoostError::invalid("the training sample is empty"));
    }

    if let Some(i) = sample.first_unlabeled() {
        return Err(BoostError::invalid(format!(
            "training record {i} has no target value"
        )));
    }
    Ok(())
}


/// Check the round budget.
#[inline(always)]
pub(crate) fn check_max_rounds(max_rounds: usize) -> Result<(), BoostError> {
    if max_rounds < 1 {
        return Err(BoostError::invalid(
            "the number of rounds must be at least 1. got 0"
        ));
    }
    Ok(())
}


/// Check whether `dist` is a distribution over `n_sample` records.
#[inline(always)]
pub(crate) fn check_distribution(dist: &[f64], n_sample: usize) {
    assert_eq!(
        dist.len(), n_sample,
        "the distribution has {} entries for {n_sample} records",
        dist.len(),
    );
    debug_assert!(
        dist.iter().all(|d| d.is_finite() && *d >= 0f64),
        "every entry must be finite and non-negative. dist = {dist:?}"
    );
    debug_assert!(
        (dist.iter().sum::<f64>() - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(dist[..]) = {}", dist.iter().sum::<f64>()
    );
}
