//! Defines the decision stump, a decision tree of depth 1.

mod dstump;
mod dstump_classifier;


pub use dstump::DecisionStump;
pub use dstump_classifier::{
    DecisionStumpClassifier,
    Rule,
};
