//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per round
//! - Running time
//! - Weighted error and confidence
//! - Training accuracy
//! - Test accuracy

/// Provides a struct that runs a boosting algorithm with logging.
pub mod logger;

pub use logger::{
    Logger,
    CurrentHypothesis,
};
