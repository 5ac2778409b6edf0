//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // AdaBoost.M1
    AdaBoostM1,
    Outcome,
    Round,
    StopReason,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision stump
    DecisionStump,
    DecisionStumpClassifier,

    // Wrappers
    Resample,
    Cancellable,
    CancelToken,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Feature,
    FeatureGenerator,
    FeatureKind,
    Value,
    Record,
    Sample,
};


pub use crate::error::BoostError;

pub use crate::research::Logger;
