//! Provides the decision stump class.
use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    BoostError,
    Sample,
    Value,
    WeakLearner,
};

use super::{DecisionStumpClassifier, Rule};


// Mass of `dist` per label, indexed like `labels`.
type Mass = Vec<f64>;


/// The struct `DecisionStump` generates a [`DecisionStumpClassifier`]
/// for each call of `self.produce(..)`.
///
/// The returned stump minimizes the weighted training error
/// over the following rules:
/// - `x[j] <= t` for each continuous feature `j`
///   and each midpoint `t` of two consecutive distinct values,
/// - `x[j] == c` for each discrete feature `j`
///   and each category `c` observed in the sample,
/// - the constant rule.
///
/// Each leaf predicts the label with the largest mass in it.
/// Ties are broken by the first candidate found,
/// so the output is deterministic.
///
/// # Example
/// ```
/// use adaboostm1::prelude::*;
///
/// let sample: Sample<&str> = [(25.0, "good"), (51.0, "bad"), (42.0, "bad")]
///     .into_iter()
///     .map(|(age, y)| Record::labeled(vec![Feature::continuous("age", age)], y))
///     .collect();
///
/// let dist = vec![1.0 / 3.0; 3];
/// let h = DecisionStump::new().produce(&sample, &dist).unwrap();
/// assert_eq!(h.success_rate(sample.records()).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionStump {}


impl DecisionStump {
    /// Construct a new decision stump learner.
    pub fn new() -> Self {
        Self {}
    }
}


impl<Y> WeakLearner<Y> for DecisionStump
    where Y: Clone + Eq + Hash,
{
    type Hypothesis = DecisionStumpClassifier<Y>;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn produce(&self, sample: &Sample<Y>, dist: &[f64])
        -> Result<Self::Hypothesis, BoostError>
    {
        let (n_sample, n_feature) = sample.shape();
        if n_sample == 0 {
            return Err(BoostError::invalid("the sample is empty"));
        }
        if dist.len() != n_sample {
            return Err(BoostError::invalid(format!(
                "got {} weights for {n_sample} records", dist.len()
            )));
        }

        let labels = sample.unique_targets();
        let position = labels.iter()
            .enumerate()
            .map(|(k, y)| (y, k))
            .collect::<HashMap<_, _>>();
        let label_of = sample.targets()?
            .into_iter()
            .map(|y| position[y])
            .collect::<Vec<usize>>();

        let split = Split::new(&labels, &label_of, dist);

        let (majority, error) = split.leaf(&split.total);
        let mut best = Candidate {
            rule: Rule::Constant,
            left: majority,
            right: majority,
            error,
        };

        for j in 0..n_feature {
            let name = sample[0].feature(j)
                .map(|f| f.name().to_string())
                .unwrap_or_default();
            let candidate = match sample[0].feature(j).map(|f| f.value()) {
                Some(Value::Continuous(_)) => split.by_threshold(sample, j, name),
                Some(Value::Discrete(_))   => split.by_category(sample, j, name),
                None => None,
            };
            if let Some(c) = candidate {
                if c.error < best.error { best = c; }
            }
        }

        Ok(DecisionStumpClassifier::new(
            best.rule,
            labels[best.left].clone(),
            labels[best.right].clone(),
        ))
    }
}


struct Candidate {
    rule: Rule,
    left: usize,
    right: usize,
    error: f64,
}


// Per-label masses of the whole sample.
struct Split<'a> {
    n_label: usize,
    label_of: &'a [usize],
    dist: &'a [f64],
    total: Mass,
    majority: usize,
}


impl<'a> Split<'a> {
    fn new<Y>(labels: &[Y], label_of: &'a [usize], dist: &'a [f64]) -> Self {
        let n_label = labels.len();
        let mut total = vec![0f64; n_label];
        label_of.iter()
            .zip(dist)
            .for_each(|(&k, &d)| { total[k] += d; });

        let mut split = Self {
            n_label, label_of, dist, total, majority: 0,
        };
        split.majority = split.leaf(&split.total).0;
        split
    }


    /// Returns the best label of a leaf and the error on it.
    /// A leaf without mass predicts the majority label.
    fn leaf(&self, mass: &[f64]) -> (usize, f64) {
        let sum = mass.iter().sum::<f64>();
        if sum <= 0f64 {
            return (self.majority, 0f64);
        }
        let (best, max) = mass.iter()
            .copied()
            .enumerate()
            .fold((0, f64::MIN), |acc, (k, m)| if m > acc.1 { (k, m) } else { acc });
        (best, sum - max)
    }


    fn complement(&self, mass: &[f64]) -> Mass {
        self.total.iter()
            .zip(mass)
            .map(|(t, m)| (t - m).max(0f64))
            .collect()
    }


    fn candidate(&self, rule: Rule, left: &[f64]) -> Candidate {
        let right = self.complement(left);
        let (l, le) = self.leaf(left);
        let (r, re) = self.leaf(&right);
        Candidate { rule, left: l, right: r, error: le + re, }
    }


    fn by_threshold<Y>(&self, sample: &Sample<Y>, j: usize, name: String)
        -> Option<Candidate>
    {
        let mut points = sample.iter()
            .enumerate()
            .filter_map(|(i, r)| {
                r.feature(j)
                    .and_then(|f| f.value().as_f64())
                    .map(|x| (x, i))
            })
            .collect::<Vec<(f64, usize)>>();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut best: Option<Candidate> = None;
        let mut left = vec![0f64; self.n_label];
        for (p, &(x, i)) in points.iter().enumerate() {
            left[self.label_of[i]] += self.dist[i];

            let Some(&(next, _)) = points.get(p + 1) else { break; };
            if next == x { continue; }

            let rule = Rule::Threshold {
                feature: j,
                name: name.clone(),
                threshold: x + (next - x) / 2f64,
            };
            let c = self.candidate(rule, &left);
            if best.as_ref().map_or(true, |b| c.error < b.error) {
                best = Some(c);
            }
        }
        best
    }


    fn by_category<Y>(&self, sample: &Sample<Y>, j: usize, name: String)
        -> Option<Candidate>
    {
        let mut position = HashMap::new();
        let mut groups: Vec<(&str, Mass)> = Vec::new();
        for (i, r) in sample.iter().enumerate() {
            let Some(c) = r.feature(j).and_then(|f| f.value().as_str())
                else { continue; };
            let ix = *position.entry(c).or_insert_with(|| {
                groups.push((c, vec![0f64; self.n_label]));
                groups.len() - 1
            });
            groups[ix].1[self.label_of[i]] += self.dist[i];
        }

        let mut best: Option<Candidate> = None;
        for (category, mass) in groups {
            let rule = Rule::Category {
                feature: j,
                name: name.clone(),
                category: category.to_string(),
            };
            let c = self.candidate(rule, &mass);
            if best.as_ref().map_or(true, |b| c.error < b.error) {
                best = Some(c);
            }
        }
        best
    }
}
