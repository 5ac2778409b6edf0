#![allow(dead_code)]
use std::cell::Cell;

use adaboostm1::prelude::*;
use adaboostm1::weak_learner::Rule;


pub const GOOD: &str = "good";
pub const BAD: &str = "bad";


/// The age/salary/sex toy set.
pub fn toy_sample() -> Sample<String> {
    let age = FeatureGenerator::new("age", FeatureKind::Continuous);
    let salary = FeatureGenerator::new("salary", FeatureKind::Continuous);
    let sex = FeatureGenerator::new("sex", FeatureKind::Discrete);

    [
        (25,  50_000, "female", GOOD),
        (51,  45_816, "male",   BAD),
        (42,  75_491, "male",   GOOD),
        (36,  15_034, "female", BAD),
        (21,  65_500, "female", GOOD),
        (62,  35_000, "male",   BAD),
        (23,  74_154, "male",   GOOD),
        (56, 120_000, "female", GOOD),
        (34,  25_150, "male",   BAD),
        (28, 165_000, "male",   GOOD),
    ]
    .into_iter()
    .map(|(a, s, x, y)| {
        let features = vec![age.generate(a), salary.generate(s), sex.generate(x)];
        Record::labeled(features, y.to_string())
    })
    .collect()
}


/// The toy set without the salary column.
/// No single stump classifies it perfectly.
pub fn age_sex_sample() -> Sample<String> {
    let records = toy_sample()
        .into_records()
        .into_iter()
        .map(|r| {
            let y = r.target().unwrap().clone();
            let features = vec![
                r.feature(0).unwrap().clone(),
                r.feature(2).unwrap().clone(),
            ];
            Record::labeled(features, y)
        })
        .collect();
    Sample::new(records)
}


/// [`query`] without the salary column.
pub fn age_sex_query() -> Record<String> {
    Record::unlabeled(vec![
        Feature::continuous("age", 28.0),
        Feature::discrete("sex", "male"),
    ])
}


/// A held-out record of age 28.
pub fn query() -> Record<String> {
    Record::unlabeled(vec![
        Feature::continuous("age", 28.0),
        Feature::continuous("salary", 165_000.0),
        Feature::discrete("sex", "male"),
    ])
}


/// Always returns the stump `age <= 40 ? good : bad`.
pub struct AgeStump;


impl AgeStump {
    pub fn stump() -> DecisionStumpClassifier<String> {
        let rule = Rule::Threshold {
            feature: 0,
            name: "age".to_string(),
            threshold: 40.0,
        };
        DecisionStumpClassifier::new(rule, GOOD.to_string(), BAD.to_string())
    }
}


impl WeakLearner<String> for AgeStump {
    type Hypothesis = DecisionStumpClassifier<String>;

    fn name(&self) -> &str {
        "Age Stump"
    }

    fn produce(&self, _: &Sample<String>, _: &[f64])
        -> Result<Self::Hypothesis, BoostError>
    {
        Ok(Self::stump())
    }
}


/// Predicts a fixed label on every record.
#[derive(Debug, Clone)]
pub struct Constant(pub String);


impl Classifier<String> for Constant {
    fn predict(&self, _: &Record<String>) -> String {
        self.0.clone()
    }
}


/// Always returns `Constant(label)`.
pub struct ConstantLearner(pub &'static str);


impl WeakLearner<String> for ConstantLearner {
    type Hypothesis = Constant;

    fn name(&self) -> &str {
        "Constant"
    }

    fn produce(&self, _: &Sample<String>, _: &[f64])
        -> Result<Constant, BoostError>
    {
        Ok(Constant(self.0.to_string()))
    }
}


/// Predicts the label of the training record with the nearest age.
#[derive(Debug, Clone)]
pub struct Nearest(Vec<(f64, String)>);


impl Classifier<String> for Nearest {
    fn predict(&self, record: &Record<String>) -> String {
        let age = record.feature(0)
            .and_then(|f| f.value().as_f64())
            .unwrap_or(0.0);
        self.0.iter()
            .min_by(|a, b| (a.0 - age).abs().total_cmp(&(b.0 - age).abs()))
            .map(|(_, y)| y.clone())
            .unwrap_or_default()
    }
}


/// Memorizes the training sample, so it never errs on it.
pub struct Memorizer;


impl WeakLearner<String> for Memorizer {
    type Hypothesis = Nearest;

    fn name(&self) -> &str {
        "Memorizer"
    }

    fn produce(&self, sample: &Sample<String>, _: &[f64])
        -> Result<Nearest, BoostError>
    {
        let table = sample.iter()
            .map(|r| {
                let age = r.feature(0)
                    .and_then(|f| f.value().as_f64())
                    .unwrap_or(0.0);
                r.target().map(|y| (age, y.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Nearest(table))
    }
}


/// Runs `inner` but fails on the `fail_at`-th call.
pub struct FailAt<W> {
    pub inner: W,
    pub fail_at: usize,
    pub calls: Cell<usize>,
}


impl<W> FailAt<W> {
    pub fn new(inner: W, fail_at: usize) -> Self {
        Self { inner, fail_at, calls: Cell::new(0), }
    }
}


impl<W: WeakLearner<String>> WeakLearner<String> for FailAt<W> {
    type Hypothesis = W::Hypothesis;

    fn name(&self) -> &str {
        "Fail At"
    }

    fn produce(&self, sample: &Sample<String>, dist: &[f64])
        -> Result<Self::Hypothesis, BoostError>
    {
        let calls = self.calls.get() + 1;
        self.calls.set(calls);
        if calls == self.fail_at {
            return Err(BoostError::WeakLearner("out of memory".to_string()));
        }
        self.inner.produce(sample, dist)
    }
}


/// A 3-class sample on a line:
/// `x < 3` is `a`, `3 <= x < 6` is `b`, and `x >= 6` is `c`.
pub fn three_classes() -> Sample<String> {
    (0..9).map(|x| {
            let y = match x {
                0..=2 => "a",
                3..=5 => "b",
                _ => "c",
            };
            Record::labeled(
                vec![Feature::continuous("x", x as f64)],
                y.to_string(),
            )
        })
        .collect()
}


pub type Boxed = Box<dyn Classifier<String> + Send + Sync>;


/// Returns the hypotheses of `steps` in order,
/// repeating the last one once they run out.
pub struct Scripted {
    pub steps: Vec<fn(&Sample<String>) -> Boxed>,
    pub calls: Cell<usize>,
}


impl Scripted {
    pub fn new(steps: Vec<fn(&Sample<String>) -> Boxed>) -> Self {
        Self { steps, calls: Cell::new(0), }
    }
}


impl WeakLearner<String> for Scripted {
    type Hypothesis = Boxed;

    fn name(&self) -> &str {
        "Scripted"
    }

    fn produce(&self, sample: &Sample<String>, _: &[f64])
        -> Result<Boxed, BoostError>
    {
        let k = self.calls.get().min(self.steps.len() - 1);
        self.calls.set(self.calls.get() + 1);
        Ok((self.steps[k])(sample))
    }
}


pub fn age_stump(_: &Sample<String>) -> Boxed {
    Box::new(AgeStump::stump())
}


pub fn memorize(sample: &Sample<String>) -> Boxed {
    Box::new(Memorizer.produce(sample, &[]).unwrap())
}
