//! Defines `AdaBoost.M1`.
//! This struct is based on the paper:
//! [Experiments with a New Boosting Algorithm](https://dl.acm.org/doi/10.5555/3091696.3091715)
//! by Yoav Freund and Robert E. Schapire.
pub mod adaboostm1_algorithm;
pub mod outcome;

pub use adaboostm1_algorithm::{
    AdaBoostM1,
    beta,
    confidence,
};

pub use outcome::{
    Outcome,
    Round,
    StopReason,
};
