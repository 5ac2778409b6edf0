//! Defines [`BoostError`], the error type of this crate.

use std::io;

/// Errors reported by the boosting engine, the weak learners,
/// and the data model.
#[derive(Debug, thiserror::Error)]
pub enum BoostError {
    /// A precondition on an argument is violated.
    /// E.g., an empty training sample, a zero round budget,
    /// or a negative weight.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A prediction is requested from a booster
    /// that holds no hypothesis.
    #[error("the combined hypothesis has no member. train it first")]
    Untrained,

    /// The target of an unlabeled record is requested.
    #[error("the record has no target value")]
    NoTarget,

    /// [`Booster::preprocess`](crate::Booster::preprocess) is called
    /// on a booster that already finished its training.
    #[error("the booster already finished training")]
    AlreadyTrained,

    /// The weak learner observed a cancellation request.
    #[error("training is cancelled")]
    Cancelled,

    /// The weak learner failed to produce a hypothesis.
    #[error("weak learner failed: {0}")]
    WeakLearner(String),

    /// I/O error while writing a log file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl BoostError {
    pub(crate) fn invalid<T: ToString>(message: T) -> Self {
        Self::InvalidArgument(message.to_string())
    }
}
