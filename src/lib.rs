#![warn(missing_docs)]

//!
//! A crate that provides `AdaBoost.M1`,
//! the multi-class boosting algorithm by Freund and Schapire.
//!
//! `AdaBoost.M1` repeatedly asks a weak learner for a classifier
//! under a distribution over the training records,
//! re-weights the records the classifier got right,
//! and combines the classifiers by a weighted majority vote.
//! Labels can be any type with `Clone + Eq + Hash`,
//! so binary and multi-class problems are handled the same way.
//!
//! ```
//! use adaboostm1::prelude::*;
//!
//! let age = FeatureGenerator::new("age", FeatureKind::Continuous);
//! let sex = FeatureGenerator::new("sex", FeatureKind::Discrete);
//!
//! let sample: Sample<&str> = [
//!         (25.0, "male", "good"),
//!         (51.0, "female", "bad"),
//!         (21.0, "female", "good"),
//!         (62.0, "male", "bad"),
//!     ]
//!     .into_iter()
//!     .map(|(a, s, y)| Record::labeled(vec![age.generate(a), sex.generate(s)], y))
//!     .collect();
//!
//! let outcome = AdaBoostM1::init(&sample)
//!     .max_rounds(10)
//!     .run(&DecisionStump::new())
//!     .unwrap();
//!
//! let query = Record::unlabeled(vec![age.generate(30.0), sex.generate("male")]);
//! assert_eq!(outcome.predict(&query).unwrap(), "good");
//! ```

pub mod error;
pub mod constants;

pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;

mod common;

/// Provides some tools for research use.
pub mod research;

/// Exports the frequently used items.
pub mod prelude;


pub use error::BoostError;

pub use sample::{
    Feature,
    FeatureGenerator,
    FeatureKind,
    Value,
    Record,
    Sample,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
    RefWeightedMajority,
};

pub use weak_learner::{
    WeakLearner,
    DecisionStump,
    Resample,
    Cancellable,
    CancelToken,
};

pub use booster::{
    Booster,
    AdaBoostM1,
    Outcome,
    Round,
    StopReason,
};

pub use research::{
    Logger,
    CurrentHypothesis,
};
