//! Struct `Sample` represents a batch of records.

// Provides `Feature`, `Value`, and `FeatureGenerator`.
pub(crate) mod feature;
// Provides `Record`.
pub(crate) mod record;
// Provides `Sample`.
pub(crate) mod sample_struct;


pub use feature::{
    Feature,
    FeatureGenerator,
    FeatureKind,
    Value,
};
pub use record::Record;
pub use sample_struct::Sample;
