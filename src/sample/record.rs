use serde::{Serialize, Deserialize};

use crate::BoostError;
use super::feature::Feature;


/// A training or test example:
/// an ordered list of features, an optional target, and a weight.
///
/// The boosting algorithms in this crate never modify `weight`.
/// They hold their own distribution over the records of a [`Sample`]
/// and pass it to the weak learner next to the sample.
///
/// [`Sample`]: crate::Sample
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record<Y> {
    features: Vec<Feature>,
    target: Option<Y>,
    weight: f64,
}


impl<Y> Record<Y> {
    /// Construct a new record with weight `0`.
    pub fn new(features: Vec<Feature>, target: Option<Y>) -> Self {
        Self { features, target, weight: 0f64, }
    }


    /// Construct a labeled record.
    pub fn labeled(features: Vec<Feature>, target: Y) -> Self {
        Self::new(features, Some(target))
    }


    /// Construct an unlabeled record to predict on.
    pub fn unlabeled(features: Vec<Feature>) -> Self {
        Self::new(features, None)
    }


    /// Returns the features of this record.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `i`th feature.
    pub fn feature(&self, i: usize) -> Option<&Feature> {
        self.features.get(i)
    }


    /// Returns the number of features.
    pub fn n_features(&self) -> usize {
        self.features.len()
    }


    /// Returns the target value.
    /// Fails with [`BoostError::NoTarget`] for an unlabeled record.
    pub fn target(&self) -> Result<&Y, BoostError> {
        self.target.as_ref()
            .ok_or(BoostError::NoTarget)
    }


    /// Returns `true` if this record has a target value.
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }


    /// Returns the weight of this record.
    pub fn weight(&self) -> f64 {
        self.weight
    }


    /// Set the weight of this record.
    /// `weight` must be finite and non-negative.
    pub fn set_weight(&mut self, weight: f64) -> Result<(), BoostError> {
        if !weight.is_finite() || weight < 0f64 {
            return Err(BoostError::invalid(format!(
                "weight must be finite and non-negative. got {weight}"
            )));
        }
        self.weight = weight;
        Ok(())
    }
}
