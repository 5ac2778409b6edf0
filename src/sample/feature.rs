use serde::{Serialize, Deserialize};

use std::fmt;


/// The kind of a feature.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// A categorical feature such as `sex = "male"`.
    Discrete,
    /// A numerical feature such as `age = 28`.
    Continuous,
}


impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Discrete   => write!(f, "Discrete"),
            Self::Continuous => write!(f, "Continuous"),
        }
    }
}


/// The value of a feature.
/// Weak learners pattern-match over this enum
/// to decide how to split on a feature.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Value {
    /// A category label.
    Discrete(String),
    /// A real number.
    Continuous(f64),
}


impl Value {
    /// Returns the number if `self` is continuous.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Continuous(x) => Some(*x),
            Self::Discrete(_)   => None,
        }
    }


    /// Returns the category if `self` is discrete.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Discrete(s)   => Some(s),
            Self::Continuous(_) => None,
        }
    }


    /// Returns the kind that matches the variant of `self`.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Discrete(_)   => FeatureKind::Discrete,
            Self::Continuous(_) => FeatureKind::Continuous,
        }
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Discrete(s)   => write!(f, "{s}"),
            Self::Continuous(x) => write!(f, "{x}"),
        }
    }
}


macro_rules! impl_continuous_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(x: $t) -> Self { Self::Continuous(x as f64) }
            }
        )*
    };
}

impl_continuous_from!(f64, f32, i64, i32, u32, usize);


impl From<&str> for Value {
    fn from(s: &str) -> Self { Self::Discrete(s.to_string()) }
}


impl From<String> for Value {
    fn from(s: String) -> Self { Self::Discrete(s) }
}


impl From<bool> for Value {
    fn from(b: bool) -> Self { Self::Discrete(b.to_string()) }
}


/// A named, typed attribute value of a record.
///
/// Two features are equal only if
/// their names, kinds, and values all match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    kind: FeatureKind,
    value: Value,
}


impl Feature {
    /// Construct a new feature.
    /// `kind` is not checked against the variant of `value`.
    pub fn new<S, V>(name: S, kind: FeatureKind, value: V) -> Self
        where S: ToString,
              V: Into<Value>,
    {
        Self { name: name.to_string(), kind, value: value.into(), }
    }


    /// Construct a discrete feature.
    pub fn discrete<S, V>(name: S, value: V) -> Self
        where S: ToString,
              V: ToString,
    {
        Self::new(name, FeatureKind::Discrete, value.to_string())
    }


    /// Construct a continuous feature.
    pub fn continuous<S: ToString>(name: S, value: f64) -> Self {
        Self::new(name, FeatureKind::Continuous, value)
    }


    /// Returns the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the feature kind.
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }


    /// Returns the feature value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}


impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}


/// A factory that binds a name and a kind
/// and stamps them on every value it produces.
///
/// The features at position `i` of all the records in one training run
/// must come from the same generator.
/// This is not checked; mixing generators makes
/// the predictions of trained classifiers meaningless.
///
/// # Example
/// ```
/// use adaboostm1::{FeatureGenerator, FeatureKind, Value};
///
/// let age = FeatureGenerator::new("age", FeatureKind::Continuous);
/// let f = age.generate(28);
/// assert_eq!(f.name(), "age");
/// assert_eq!(f.value(), &Value::Continuous(28.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGenerator {
    name: String,
    kind: FeatureKind,
}


impl FeatureGenerator {
    /// Construct a new generator.
    pub fn new<S: ToString>(name: S, kind: FeatureKind) -> Self {
        Self { name: name.to_string(), kind, }
    }


    /// Returns the name stamped on the generated features.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the kind stamped on the generated features.
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }


    /// Wraps `value` into a feature with the fixed name and kind.
    pub fn generate<V: Into<Value>>(&self, value: V) -> Feature {
        Feature {
            name: self.name.clone(),
            kind: self.kind,
            value: value.into(),
        }
    }
}
