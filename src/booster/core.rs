//! The `Booster` trait.

use crate::{BoostError, WeakLearner};

use std::ops::ControlFlow;


/// A boosting algorithm, seen as a game played in rounds
/// against a [`WeakLearner`].
///
/// Round `t = 1, 2, ...` goes as follows:
/// 1. the booster holds a distribution over the training records,
/// 2. the weak learner answers with a hypothesis
///    that is accurate enough under that distribution,
/// 3. the booster re-weights the records and decides whether to go on.
///
/// When the game ends, the booster combines the hypotheses it kept.
///
/// Implementors write [`Booster::preprocess`], [`Booster::boost`],
/// and [`Booster::postprocess`];
/// [`Booster::run`] chains them.
/// Splitting the loop this way lets a caller drive the rounds itself,
/// as [`Logger`](crate::Logger) does.
pub trait Booster<Y, H> {
    /// What a finished training run returns.
    type Output;


    /// Name of the algorithm, used in logs.
    fn name(&self) -> &str;


    /// Key-value pairs that describe the current settings.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains from start to end with `weak_learner`.
    /// The first error aborts the run.
    fn run<W>(&mut self, weak_learner: &W) -> Result<Self::Output, BoostError>
        where W: WeakLearner<Y, Hypothesis = H>
    {
        self.preprocess()?;

        let mut round = 1;
        while self.boost(weak_learner, round)?.is_continue() {
            round += 1;
        }

        self.postprocess()
    }


    /// Validates the settings and sets up the initial state.
    /// Nothing is trained if this fails.
    fn preprocess(&mut self) -> Result<(), BoostError>;


    /// Plays round `round`.
    /// Returns `ControlFlow::Break(t)` once training should stop,
    /// where `t` is the last round whose hypothesis was kept.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        round: usize,
    ) -> Result<ControlFlow<usize>, BoostError>
        where W: WeakLearner<Y, Hypothesis = H>;


    /// Ends training after round `round`
    /// because the caller ran out of time.
    /// Boosters that report why they stopped
    /// record it for [`Booster::postprocess`].
    fn time_out(&mut self, _round: usize) {}


    /// Builds the output from the state left by the rounds.
    fn postprocess(&mut self) -> Result<Self::Output, BoostError>;
}
