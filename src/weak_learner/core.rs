//! Provides `WeakLearner` trait.
use crate::{BoostError, Classifier, Sample};


/// An interface of weak learners.
///
/// Given a sample and a distribution `dist` over it,
/// a weak learner returns a hypothesis trained
/// with more emphasis on the records of larger `dist[i]`.
/// How the distribution is used (loss weighting, resampling, ...)
/// is up to the implementor.
///
/// A booster calls [`WeakLearner::produce`] once per round
/// with the same sample and a new distribution.
/// Implementors must read `dist` afresh on every call
/// and must not reuse a hypothesis from a previous call.
pub trait WeakLearner<Y> {
    /// The hypothesis this weak learner returns.
    type Hypothesis: Classifier<Y>;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis trained on `sample` under `dist`.
    /// `dist[i]` is the weight on `sample[i]`.
    ///
    /// Returning an error aborts the boosting process.
    /// Return [`BoostError::Cancelled`] to report a cancellation.
    fn produce(&self, sample: &Sample<Y>, dist: &[f64])
        -> Result<Self::Hypothesis, BoostError>;
}


impl<Y, W> WeakLearner<Y> for &W
    where W: WeakLearner<Y> + ?Sized,
{
    type Hypothesis = W::Hypothesis;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        (**self).info()
    }

    fn produce(&self, sample: &Sample<Y>, dist: &[f64])
        -> Result<Self::Hypothesis, BoostError>
    {
        (**self).produce(sample, dist)
    }
}
