//! Terminal state and per-round statistics of `AdaBoostM1`.
use serde::{Serialize, Deserialize};

use std::hash::Hash;

use crate::{
    BoostError,
    Classifier,
    Record,
    WeightedMajority,
};


/// Statistics of a boosting round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Round {
    /// The round number, starting from `1`.
    pub round: usize,
    /// Weighted error of the hypothesis obtained in this round.
    pub error: f64,
    /// Confidence `ln(1 / beta)` derived from `error`.
    /// `+inf` for a hypothesis with zero error.
    ///
    /// Non-finite values are serialized as the strings
    /// `"inf"`, `"-inf"`, and `"NaN"`.
    #[serde(with = "extended_float")]
    pub confidence: f64,
    /// `true` if the hypothesis is a member of the combined classifier.
    /// A hypothesis with zero error replaces all the earlier members,
    /// so their rounds are marked `false` then.
    pub accepted: bool,
}


// JSON has no literal for infinities.
mod extended_float {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }


    pub(super) fn serialize<S>(x: &f64, serializer: S)
        -> Result<S::Ok, S::Error>
        where S: Serializer,
    {
        if x.is_finite() {
            serializer.serialize_f64(*x)
        } else {
            serializer.serialize_str(&x.to_string())
        }
    }


    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
        where D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(x) => Ok(x),
            Repr::Text(text) => text.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("not a number: `{text}`"))),
        }
    }
}


/// The reason why boosting stopped.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum StopReason {
    /// The round budget is used up.
    RoundLimit,
    /// The hypothesis of `round` had weighted error `error >= 0.5`
    /// and was discarded.
    TooWeak {
        /// The round of the discarded hypothesis.
        round: usize,
        /// Its weighted error.
        error: f64,
    },
    /// The hypothesis of `round` classified every training record
    /// correctly and became the sole member of the combined classifier.
    Perfect {
        /// The round of the perfect hypothesis.
        round: usize,
    },
    /// The caller's time limit ran out after `round`.
    TimeLimit {
        /// The last round that ran.
        round: usize,
    },
}


/// The terminal state of [`AdaBoostM1`](crate::AdaBoostM1).
///
/// - `Trained` holds a combined classifier with at least one member.
/// - `Aborted` means that no hypothesis was accepted,
///   i.e., the first hypothesis was already too weak.
///   Predicting with an aborted outcome fails with
///   [`BoostError::Untrained`].
#[derive(Debug, Clone)]
pub enum Outcome<H> {
    /// Training finished with at least one accepted hypothesis.
    Trained {
        /// The combined classifier.
        model: WeightedMajority<H>,
        /// Why the boosting loop stopped.
        stop: StopReason,
        /// Statistics of every executed round.
        rounds: Vec<Round>,
    },
    /// Training stopped without accepting any hypothesis.
    Aborted {
        /// Why the boosting loop stopped.
        stop: StopReason,
        /// Statistics of every executed round.
        rounds: Vec<Round>,
    },
}


impl<H> Outcome<H> {
    /// Returns `true` if a combined classifier is available.
    pub fn is_trained(&self) -> bool {
        matches!(self, Self::Trained { .. })
    }


    /// Returns the reason why boosting stopped.
    pub fn stop(&self) -> StopReason {
        match self {
            Self::Trained { stop, .. } | Self::Aborted { stop, .. } => *stop,
        }
    }


    /// Returns the statistics of every executed round,
    /// including a discarded last round.
    pub fn rounds(&self) -> &[Round] {
        match self {
            Self::Trained { rounds, .. } | Self::Aborted { rounds, .. } => {
                &rounds[..]
            },
        }
    }


    /// Returns the combined classifier.
    pub fn model(&self) -> Result<&WeightedMajority<H>, BoostError> {
        match self {
            Self::Trained { model, .. } => Ok(model),
            Self::Aborted { .. } => Err(BoostError::Untrained),
        }
    }


    /// Consumes `self` and returns the combined classifier.
    pub fn into_model(self) -> Result<WeightedMajority<H>, BoostError> {
        match self {
            Self::Trained { model, .. } => Ok(model),
            Self::Aborted { .. } => Err(BoostError::Untrained),
        }
    }


    /// Predicts the label of `record` by the combined classifier.
    pub fn predict<Y>(&self, record: &Record<Y>) -> Result<Y, BoostError>
        where Y: Clone + Eq + Hash,
              H: Classifier<Y>,
    {
        self.model()
            .map(|f| f.predict(record))
    }


    /// Returns the fraction of `records`
    /// the combined classifier classifies correctly.
    pub fn success_rate<Y>(&self, records: &[Record<Y>])
        -> Result<f64, BoostError>
        where Y: Clone + Eq + Hash,
              H: Classifier<Y>,
    {
        self.model()?
            .success_rate(records)
    }
}
