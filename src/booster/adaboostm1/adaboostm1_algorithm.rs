//! Provides [`AdaBoostM1`](AdaBoostM1) by Freund & Schapire, 1996.
use crate::{
    Booster,
    BoostError,
    WeakLearner,
    Classifier,
    Sample,
    WeightedMajority,
    RefWeightedMajority,

    common::{checker, utils},
    constants::{DEFAULT_MAX_ROUNDS, WEAK_LEARNING_THRESHOLD},
    research::CurrentHypothesis,
};

use super::outcome::{Outcome, Round, StopReason};

use std::hash::Hash;
use std::mem;
use std::ops::ControlFlow;


/// Returns `beta = e / (1 - e)` for weighted error `e`.
#[inline(always)]
pub fn beta(error: f64) -> f64 {
    error / (1f64 - error)
}


/// Returns the confidence `alpha = ln(1 / beta)` for weighted error `e`.
///
/// `alpha` is strictly decreasing on `(0, 0.5)`,
/// positive there, and `+inf` at `e = 0`.
#[inline(always)]
pub fn confidence(error: f64) -> f64 {
    (1f64 / beta(error)).ln()
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Ready,
    Training,
    // The boosting loop broke; only `postprocess` is allowed.
    Stopped,
    Finished,
}


/// Defines `AdaBoost.M1`.
/// This struct is based on the paper:
/// [Experiments with a New Boosting Algorithm](https://dl.acm.org/doi/10.5555/3091696.3091715)
/// by Yoav Freund and Robert E. Schapire.
///
/// Unlike the binary `AdaBoost`, `AdaBoost.M1` handles
/// any label type `Y` with `Eq + Hash`.
/// In each round it
/// 1. asks the weak learner for a hypothesis `h` under `dist`,
/// 2. computes the weighted error `e` of `h`,
/// 3. stops if `e >= 0.5` (`h` is discarded),
/// 4. otherwise multiplies `dist[i]` by `beta = e / (1 - e)`
///    for each record `h` classifies correctly and renormalizes,
/// 5. appends `h` with confidence `ln(1 / beta)`.
///
/// The combined classifier predicts the label
/// with the largest total confidence.
///
/// **Zero error.**
/// A hypothesis with `e == 0` has infinite confidence.
/// Instead of storing an infinite weight,
/// `AdaBoostM1` stops and returns that hypothesis
/// as the only member of the combined classifier.
///
/// A booster trains once.
/// Once a round returns `ControlFlow::Break`,
/// [`Booster::boost`] fails with [`BoostError::AlreadyTrained`],
/// and so does calling [`Booster::run`] again.
///
/// # Example
/// ```
/// use adaboostm1::prelude::*;
///
/// let sample: Sample<&str> = [
///         (25.0, "good"), (51.0, "bad"), (42.0, "good"), (36.0, "bad"),
///         (21.0, "good"), (62.0, "bad"), (23.0, "good"), (56.0, "good"),
///     ]
///     .into_iter()
///     .map(|(age, y)| Record::labeled(vec![Feature::continuous("age", age)], y))
///     .collect();
///
/// let weak_learner = DecisionStump::new();
///
/// let outcome = AdaBoostM1::init(&sample)
///     .max_rounds(10)
///     .run(&weak_learner)
///     .unwrap();
///
/// let rate = outcome.success_rate(sample.records()).unwrap();
/// println!("Training accuracy: {rate}");
/// ```
pub struct AdaBoostM1<'a, Y, H> {
    // Training sample
    sample: &'a Sample<Y>,

    // Distribution on sample.
    dist: Vec<f64>,

    // Round budget.
    max_rounds: usize,

    // Confidences on hypotheses in `hypotheses`
    weights: Vec<f64>,

    // Hypohteses obtained by the weak-learner.
    hypotheses: Vec<H>,

    // Statistics per round.
    rounds: Vec<Round>,

    stop: Option<StopReason>,

    phase: Phase,

    // Terminated round.
    terminated: usize,
}


impl<'a, Y, H> AdaBoostM1<'a, Y, H> {
    /// Initialize the `AdaBoostM1`.
    /// This method sets some parameters `AdaBoostM1` holds.
    /// The parameters are validated when training starts.
    pub fn init(sample: &'a Sample<Y>) -> Self {
        Self {
            sample,

            dist: Vec::new(),
            max_rounds: DEFAULT_MAX_ROUNDS,

            weights: Vec::new(),
            hypotheses: Vec::new(),
            rounds: Vec::new(),

            stop: None,
            phase: Phase::Ready,
            terminated: usize::MAX,
        }
    }


    /// Set the maximum number of rounds `T >= 1`.
    /// By default, `T = 100`.
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }


    /// Returns the current distribution over the training records.
    /// `distribution()[i]` is the weight on `sample[i]`.
    /// After training, the entries are the weights that
    /// the next round would have used.
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the statistics of the rounds executed so far.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds[..]
    }


    /// Returns the round at which the boosting loop stopped.
    /// Returns `None` while training.
    pub fn terminated(&self) -> Option<usize> {
        (self.terminated != usize::MAX).then_some(self.terminated)
    }


    // Aborts training: no partial hypothesis survives a failure.
    fn fail(&mut self, error: BoostError) -> BoostError {
        self.phase = Phase::Finished;
        self.weights.clear();
        self.hypotheses.clear();
        error
    }


    // Multiply the weights on correctly classified records by `beta`
    // and normalize.
    #[inline]
    fn update_params(&mut self, beta: f64, correct: &[bool]) {
        self.dist.iter_mut()
            .zip(correct)
            .for_each(|(d, &c)| { if c { *d *= beta; } });

        utils::normalize(&mut self.dist[..]);

        checker::check_distribution(&self.dist[..], self.sample.len());
    }


    fn finish(&mut self, round: usize, stop: StopReason) -> ControlFlow<usize> {
        self.terminated = round;
        self.stop = Some(stop);
        self.phase = Phase::Stopped;
        ControlFlow::Break(round)
    }
}


impl<'a, Y, H> AdaBoostM1<'a, Y, H>
    where Y: Clone + Eq + Hash + Send + Sync,
          H: Classifier<Y> + Sync,
{
    /// Trains `AdaBoost.M1` on `sample` for at most `max_rounds` rounds.
    /// This is a shorthand for
    /// `AdaBoostM1::init(sample).max_rounds(max_rounds).run(weak_learner)`.
    pub fn train<W>(
        sample: &'a Sample<Y>,
        weak_learner: &W,
        max_rounds: usize,
    ) -> Result<Outcome<H>, BoostError>
        where W: WeakLearner<Y, Hypothesis = H>,
    {
        Self::init(sample)
            .max_rounds(max_rounds)
            .run(weak_learner)
    }
}


impl<Y, H> Booster<Y, H> for AdaBoostM1<'_, Y, H>
    where Y: Clone + Eq + Hash + Send + Sync,
          H: Classifier<Y> + Sync,
{
    type Output = Outcome<H>;


    fn name(&self) -> &str {
        "AdaBoost.M1"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of records", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("Max rounds", format!("{}", self.max_rounds)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<(), BoostError> {
        if self.phase != Phase::Ready {
            return Err(BoostError::AlreadyTrained);
        }
        checker::check_sample(self.sample)?;
        checker::check_max_rounds(self.max_rounds)?;

        let n_sample = self.sample.len();
        let uni = 1f64 / n_sample as f64;
        self.dist = vec![uni; n_sample];

        self.weights = Vec::new();
        self.hypotheses = Vec::new();
        self.rounds = Vec::new();
        self.stop = None;

        self.phase = Phase::Training;
        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        round: usize,
    ) -> Result<ControlFlow<usize>, BoostError>
        where W: WeakLearner<Y, Hypothesis = H>,
    {
        match self.phase {
            Phase::Training => {},
            Phase::Stopped | Phase::Finished => {
                return Err(BoostError::AlreadyTrained);
            },
            Phase::Ready => {
                return Err(BoostError::invalid(
                    "`preprocess` must be called before `boost`"
                ));
            },
        }

        // Get a new hypothesis
        let h = weak_learner.produce(self.sample, &self.dist)
            .map_err(|e| self.fail(e))?;

        let correct = utils::correctness(self.sample, &h)
            .map_err(|e| self.fail(e))?;

        let error = utils::weighted_error(&self.dist, &correct);


        // `h` is no better than random guessing. Discard it.
        if error >= WEAK_LEARNING_THRESHOLD {
            self.rounds.push(Round {
                round, error, confidence: confidence(error), accepted: false,
            });
            let stop = StopReason::TooWeak { round, error };
            return Ok(self.finish(round - 1, stop));
        }


        // If `h` predicted all the records in `sample` correctly,
        // use it as the combined classifier.
        if error == 0f64 {
            self.rounds.iter_mut()
                .for_each(|r| { r.accepted = false; });
            self.rounds.push(Round {
                round, error, confidence: f64::INFINITY, accepted: true,
            });
            self.weights = vec![1f64];
            self.hypotheses = vec![h];
            return Ok(self.finish(round, StopReason::Perfect { round }));
        }


        let beta = beta(error);
        let alpha = confidence(error);
        self.update_params(beta, &correct);

        self.weights.push(alpha);
        self.hypotheses.push(h);
        self.rounds.push(Round {
            round, error, confidence: alpha, accepted: true,
        });

        if round >= self.max_rounds {
            return Ok(self.finish(round, StopReason::RoundLimit));
        }
        Ok(ControlFlow::Continue(()))
    }


    fn time_out(&mut self, round: usize) {
        if self.phase == Phase::Training {
            let _ = self.finish(round, StopReason::TimeLimit { round });
        }
    }


    fn postprocess(&mut self) -> Result<Self::Output, BoostError> {
        match self.phase {
            Phase::Training | Phase::Stopped => {},
            Phase::Finished => { return Err(BoostError::AlreadyTrained); },
            Phase::Ready => {
                return Err(BoostError::invalid(
                    "`preprocess` must be called before `postprocess`"
                ));
            },
        }
        self.phase = Phase::Finished;

        let stop = self.stop.unwrap_or(StopReason::RoundLimit);
        let rounds = self.rounds.clone();

        if self.hypotheses.is_empty() {
            return Ok(Outcome::Aborted { stop, rounds });
        }

        let weights = mem::take(&mut self.weights);
        let hypotheses = mem::take(&mut self.hypotheses);
        let model = WeightedMajority::from_parts(weights, hypotheses);
        Ok(Outcome::Trained { model, stop, rounds })
    }
}


impl<Y, H> CurrentHypothesis<H> for AdaBoostM1<'_, Y, H> {
    fn current_hypothesis(&self) -> RefWeightedMajority<'_, H> {
        RefWeightedMajority::new(&self.weights[..], &self.hypotheses[..])
    }


    fn last_round(&self) -> Option<Round> {
        self.rounds.last().copied()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_decreasing() {
        let errors = [1e-6, 0.01, 0.1, 0.2, 0.3, 0.4, 0.49];
        for pair in errors.windows(2) {
            let (e1, e2) = (pair[0], pair[1]);
            assert!(
                confidence(e1) > confidence(e2),
                "alpha({e1}) = {} <= alpha({e2}) = {}",
                confidence(e1), confidence(e2),
            );
            assert!(confidence(e2) > 0f64);
        }
    }

    #[test]
    fn test_confidence_limits() {
        assert_eq!(confidence(0f64), f64::INFINITY);
        assert!(confidence(0.5).abs() < 1e-12);
        assert!((confidence(0.4) - 1.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_beta() {
        assert!((beta(0.25) - 1f64 / 3f64).abs() < 1e-12);
        assert_eq!(beta(0f64), 0f64);
    }
}
