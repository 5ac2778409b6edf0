use crate::{Classifier, Record, Value};

use std::fmt;


/// The splitting rule of a [`DecisionStumpClassifier`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// No split. Every record goes to the left leaf.
    Constant,
    /// `record[feature] <= threshold` goes to the left leaf.
    Threshold {
        /// Position of the feature.
        feature: usize,
        /// Name of the feature.
        name: String,
        /// The threshold.
        threshold: f64,
    },
    /// `record[feature] == category` goes to the left leaf.
    Category {
        /// Position of the feature.
        feature: usize,
        /// Name of the feature.
        name: String,
        /// The category sent to the left leaf.
        category: String,
    },
}


impl Rule {
    /// Returns `true` if `record` goes to the left leaf.
    /// A record whose feature is missing or of the other kind
    /// goes to the right leaf.
    #[inline]
    pub fn goes_left<Y>(&self, record: &Record<Y>) -> bool {
        match self {
            Self::Constant => true,
            Self::Threshold { feature, threshold, .. } => {
                match record.feature(*feature).map(|f| f.value()) {
                    Some(Value::Continuous(x)) => *x <= *threshold,
                    _ => false,
                }
            },
            Self::Category { feature, category, .. } => {
                match record.feature(*feature).map(|f| f.value()) {
                    Some(Value::Discrete(s)) => s == category,
                    _ => false,
                }
            },
        }
    }
}


/// The hypothesis that [`DecisionStump`] returns.
///
/// [`DecisionStump`]: crate::weak_learner::DecisionStump
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionStumpClassifier<Y> {
    pub(super) rule: Rule,
    pub(super) left: Y,
    pub(super) right: Y,
}


impl<Y> DecisionStumpClassifier<Y> {
    /// Construct a stump from a rule and the labels of both leaves.
    pub fn new(rule: Rule, left: Y, right: Y) -> Self {
        Self { rule, left, right, }
    }


    /// Returns the splitting rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }


    /// Returns the label of the left leaf.
    pub fn left(&self) -> &Y {
        &self.left
    }


    /// Returns the label of the right leaf.
    pub fn right(&self) -> &Y {
        &self.right
    }
}


impl<Y: Clone> Classifier<Y> for DecisionStumpClassifier<Y> {
    fn predict(&self, record: &Record<Y>) -> Y {
        if self.rule.goes_left(record) {
            self.left.clone()
        } else {
            self.right.clone()
        }
    }
}


impl<Y: fmt::Display> fmt::Display for DecisionStumpClassifier<Y> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.rule {
            Rule::Constant => write!(f, "{}", self.left),
            Rule::Threshold { name, threshold, .. } => {
                write!(
                    f, "{name} <= {threshold} ? {} : {}",
                    self.left, self.right
                )
            },
            Rule::Category { name, category, .. } => {
                write!(
                    f, "{name} == {category} ? {} : {}",
                    self.left, self.right
                )
            },
        }
    }
}
