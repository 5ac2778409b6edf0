//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines Decision Stump.
pub mod decision_stump;

/// Defines the resampling wrapper.
pub mod resample;

/// Defines the cancellable wrapper.
pub mod cancellable;


pub use self::core::WeakLearner;

pub use self::decision_stump::{
    DecisionStump,
    DecisionStumpClassifier,
    Rule,
};

pub use self::resample::Resample;

pub use self::cancellable::{
    Cancellable,
    CancelToken,
};
