//! Provides [`Cancellable`], a weak learner that can be stopped
//! from another thread.
use crate::{BoostError, Sample, WeakLearner};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};


/// A shared flag that requests cancellation of a training run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);


impl CancelToken {
    /// Construct a new token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }


    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }


    /// Returns `true` if cancellation is requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}


/// A wrapper that fails with [`BoostError::Cancelled`]
/// once its [`CancelToken`] is cancelled.
///
/// The token is checked before and after the inner learner runs,
/// so a booster stops at the next round boundary
/// and reports the cancellation instead of
/// returning a truncated combined hypothesis.
#[derive(Debug, Clone)]
pub struct Cancellable<W> {
    inner: W,
    token: CancelToken,
}


impl<W> Cancellable<W> {
    /// Wraps `inner` with `token`.
    pub fn new(inner: W, token: CancelToken) -> Self {
        Self { inner, token, }
    }


    /// Returns the token.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}


impl<Y, W> WeakLearner<Y> for Cancellable<W>
    where W: WeakLearner<Y>,
{
    type Hypothesis = W::Hypothesis;


    fn name(&self) -> &str {
        self.inner.name()
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        self.inner.info()
    }


    fn produce(&self, sample: &Sample<Y>, dist: &[f64])
        -> Result<Self::Hypothesis, BoostError>
    {
        if self.token.is_cancelled() {
            return Err(BoostError::Cancelled);
        }
        let h = self.inner.produce(sample, dist)?;
        if self.token.is_cancelled() {
            return Err(BoostError::Cancelled);
        }
        Ok(h)
    }
}
