//! Provides boosting algorithms.

mod core;

// ------------------------------------------------
// Classification
pub mod adaboostm1;


/// Booster trait
pub use self::core::Booster;

// Empirical Risk Minimization
pub use self::adaboostm1::{
    AdaBoostM1,
    Outcome,
    Round,
    StopReason,
};
