use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    BoostError,
    Classifier,
    Record,
};


/// Accumulates the confidences of the hypotheses per candidate label.
/// Candidates are kept in order of first vote so that
/// an exact tie is won by the label
/// that the earliest hypothesis voted for.
struct Ballot<Y> {
    position: HashMap<Y, usize>,
    scores: Vec<(Y, f64)>,
}


impl<Y: Clone + Eq + Hash> Ballot<Y> {
    fn new() -> Self {
        Self { position: HashMap::new(), scores: Vec::new(), }
    }


    fn cast(&mut self, label: Y, weight: f64) {
        match self.position.get(&label) {
            Some(&ix) => { self.scores[ix].1 += weight; },
            None => {
                self.position.insert(label.clone(), self.scores.len());
                self.scores.push((label, weight));
            },
        }
    }


    fn winner(self) -> Option<Y> {
        self.scores.into_iter()
            .fold(None, |best: Option<(Y, f64)>, (label, score)| {
                match best {
                    Some((_, s)) if s >= score => best,
                    _ => Some((label, score)),
                }
            })
            .map(|(label, _)| label)
    }
}


/// Weighted majority vote over `hypotheses`.
/// Returns `None` if there is no hypothesis.
fn vote<Y, H>(weights: &[f64], hypotheses: &[H], record: &Record<Y>)
    -> Option<Y>
    where Y: Clone + Eq + Hash,
          H: Classifier<Y>,
{
    let mut ballot = Ballot::new();
    weights.iter()
        .zip(hypotheses)
        .for_each(|(&w, h)| { ballot.cast(h.predict(record), w); });
    ballot.winner()
}


/// A weighted majority classifier that takes references of
/// weights and hypotheses.
/// Unlike [`WeightedMajority`], this view may be empty.
pub struct RefWeightedMajority<'a, H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: &'a [f64],
    /// Set of hypotheses.
    pub hypotheses: &'a [H],
}


impl<'a, H> RefWeightedMajority<'a, H> {
    /// Construct a new `RefWeightedMajority` from given slices.
    #[inline]
    pub fn new(weights: &'a [f64], hypotheses: &'a [H]) -> Self {
        Self { weights, hypotheses, }
    }


    /// Returns `true` if the vote has no member.
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Predicts the label of `record` by weighted majority vote.
    /// Fails with [`BoostError::Untrained`] if there is no member.
    pub fn try_predict<Y>(&self, record: &Record<Y>) -> Result<Y, BoostError>
        where Y: Clone + Eq + Hash,
              H: Classifier<Y>,
    {
        vote(self.weights, self.hypotheses, record)
            .ok_or(BoostError::Untrained)
    }


    /// Returns the fraction of `records` classified correctly.
    /// Fails with [`BoostError::Untrained`] if there is no member.
    pub fn success_rate<Y>(&self, records: &[Record<Y>])
        -> Result<f64, BoostError>
        where Y: Clone + Eq + Hash,
              H: Classifier<Y>,
    {
        if self.is_empty() {
            return Err(BoostError::Untrained);
        }
        Borrowed(self).success_rate(records)
    }
}


// Lets a non-empty `RefWeightedMajority` reuse
// the provided methods of `Classifier`.
struct Borrowed<'r, 'a, H>(&'r RefWeightedMajority<'a, H>);


impl<Y, H> Classifier<Y> for Borrowed<'_, '_, H>
    where Y: Clone + Eq + Hash,
          H: Classifier<Y>,
{
    fn predict(&self, record: &Record<Y>) -> Y {
        match vote(self.0.weights, self.0.hypotheses, record) {
            Some(y) => y,
            None => unreachable!("emptiness is checked before voting"),
        }
    }
}


/// The combined classifier that [`AdaBoostM1`] returns.
///
/// Each member is a pair of a confidence and a hypothesis,
/// ordered by the round the hypothesis was obtained.
/// A `WeightedMajority` holds at least one member
/// and is never modified after training.
///
/// [`AdaBoostM1`]: crate::AdaBoostM1
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    weights: Vec<f64>,
    hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct a new combined classifier.
    /// `weights` and `hypotheses` must be non-empty
    /// and of the same length.
    pub(crate) fn from_parts(weights: Vec<f64>, hypotheses: Vec<H>) -> Self {
        assert!(
            !hypotheses.is_empty(),
            "a weighted majority vote needs at least one hypothesis"
        );
        assert_eq!(weights.len(), hypotheses.len());
        Self { weights, hypotheses, }
    }


    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Always `false`; a combined classifier has at least one member.
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Returns the confidences on the hypotheses.
    pub fn confidences(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the hypotheses.
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }


    /// Returns the pairs `(confidence, hypothesis)` in training order.
    pub fn members(&self) -> impl Iterator<Item = (f64, &H)> + '_ {
        self.weights.iter()
            .copied()
            .zip(&self.hypotheses)
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`.
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<Y, H> Classifier<Y> for WeightedMajority<H>
    where Y: Clone + Eq + Hash,
          H: Classifier<Y>,
{
    fn predict(&self, record: &Record<Y>) -> Y {
        match vote(&self.weights, &self.hypotheses, record) {
            Some(y) => y,
            None => unreachable!(
                "a weighted majority vote holds at least one hypothesis"
            ),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Feature;

    struct Constant(&'static str);

    impl Classifier<&'static str> for Constant {
        fn predict(&self, _: &Record<&'static str>) -> &'static str {
            self.0
        }
    }

    fn record() -> Record<&'static str> {
        Record::unlabeled(vec![Feature::continuous("x", 0.0)])
    }

    #[test]
    fn test_heavier_label_wins() {
        let f = WeightedMajority::from_parts(
            vec![0.4, 0.3, 0.2],
            vec![Constant("a"), Constant("b"), Constant("b")],
        );
        assert_eq!(f.predict(&record()), "b");
    }

    #[test]
    fn test_tie_goes_to_earliest_member() {
        let f = WeightedMajority::from_parts(
            vec![0.5, 0.5],
            vec![Constant("b"), Constant("a")],
        );
        assert_eq!(f.predict(&record()), "b");

        let f = WeightedMajority::from_parts(
            vec![0.25, 0.5, 0.25],
            vec![Constant("a"), Constant("b"), Constant("a")],
        );
        assert_eq!(f.predict(&record()), "a");
    }

    #[test]
    fn test_single_member() {
        let f = WeightedMajority::from_parts(vec![1.0], vec![Constant("z")]);
        assert_eq!(f.len(), 1);
        assert!(!f.is_empty());
        assert_eq!(f.predict(&record()), "z");
    }

    #[test]
    fn test_empty_reference_is_untrained() {
        let weights: Vec<f64> = Vec::new();
        let hypotheses: Vec<Constant> = Vec::new();
        let f = RefWeightedMajority::new(&weights[..], &hypotheses[..]);
        assert!(matches!(f.try_predict(&record()), Err(BoostError::Untrained)));
    }

    #[test]
    #[should_panic]
    fn test_empty_ensemble_panics() {
        let _ = WeightedMajority::<Constant>::from_parts(Vec::new(), Vec::new());
    }
}
