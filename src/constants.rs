//! Default parameters and numerical tolerances.

/// A weak hypothesis must achieve weighted error strictly below this value.
pub const WEAK_LEARNING_THRESHOLD: f64 = 0.5;

/// Tolerance for `sum(dist[..]) == 1`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-9;

/// Default number of boosting rounds.
pub const DEFAULT_MAX_ROUNDS: usize = 100;

/// Default seed of [`Resample`](crate::weak_learner::Resample).
pub const DEFAULT_SEED: u64 = 1234;
