use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Index;
use std::slice;

use crate::BoostError;
use super::record::Record;


/// An ordered collection of records.
///
/// The position of a record in a `Sample` is its identity
/// during boosting: the distribution `dist` handed to the weak learner
/// assigns `dist[i]` to `sample[i]`.
///
/// All the records must share the same schema,
/// i.e., the feature at position `i` must have the same name and kind
/// in every record. This is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<Y> {
    records: Vec<Record<Y>>,
}


impl<Y> Sample<Y> {
    /// Construct a new sample.
    pub fn new(records: Vec<Record<Y>>) -> Self {
        Self { records }
    }


    /// Returns the pair `(# of records, # of features)`.
    /// The number of features is taken from the first record.
    pub fn shape(&self) -> (usize, usize) {
        let n_feature = self.records.first()
            .map(|r| r.n_features())
            .unwrap_or(0);
        (self.records.len(), n_feature)
    }


    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Returns `true` if `self` has no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the records as a slice.
    pub fn records(&self) -> &[Record<Y>] {
        &self.records[..]
    }


    /// Returns an iterator over the records.
    pub fn iter(&self) -> slice::Iter<'_, Record<Y>> {
        self.records.iter()
    }


    /// Consumes `self` and returns the records.
    pub fn into_records(self) -> Vec<Record<Y>> {
        self.records
    }


    /// Returns the target values.
    /// Fails with [`BoostError::NoTarget`] if some record is unlabeled.
    pub fn targets(&self) -> Result<Vec<&Y>, BoostError> {
        self.records.iter()
            .map(|r| r.target())
            .collect()
    }


    /// Returns the position of the first unlabeled record, if any.
    pub(crate) fn first_unlabeled(&self) -> Option<usize> {
        self.records.iter()
            .position(|r| !r.has_target())
    }
}


impl<Y: Clone> Sample<Y> {
    /// Construct a new sample that consists of
    /// `self[i]` for each `i` in `indices`.
    /// An index may appear more than once.
    pub fn resample(&self, indices: &[usize]) -> Self {
        let records = indices.iter()
            .map(|&i| self.records[i].clone())
            .collect::<Vec<_>>();
        Self { records }
    }
}


impl<Y: Clone + Eq + Hash> Sample<Y> {
    /// Returns the distinct target values
    /// in order of first appearance.
    /// Unlabeled records are skipped.
    pub fn unique_targets(&self) -> Vec<Y> {
        let mut seen = HashSet::new();
        self.records.iter()
            .filter_map(|r| r.target().ok())
            .filter(|&y| seen.insert(y))
            .cloned()
            .collect()
    }
}


impl<Y> From<Vec<Record<Y>>> for Sample<Y> {
    fn from(records: Vec<Record<Y>>) -> Self {
        Self::new(records)
    }
}


impl<Y> FromIterator<Record<Y>> for Sample<Y> {
    fn from_iter<I: IntoIterator<Item = Record<Y>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}


impl<Y> Index<usize> for Sample<Y> {
    type Output = Record<Y>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.records[i]
    }
}


impl<'a, Y> IntoIterator for &'a Sample<Y> {
    type Item = &'a Record<Y>;
    type IntoIter = slice::Iter<'a, Record<Y>>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Feature;

    fn sample() -> Sample<String> {
        [("a", 1.0), ("b", 2.0), ("a", 3.0), ("c", 4.0)]
            .into_iter()
            .map(|(y, x)| {
                let features = vec![Feature::continuous("x", x)];
                Record::labeled(features, y.to_string())
            })
            .collect()
    }

    #[test]
    fn test_shape() {
        let s = sample();
        assert_eq!(s.shape(), (4, 1));
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());

        let empty: Sample<String> = Sample::new(Vec::new());
        assert_eq!(empty.shape(), (0, 0));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unique_targets_keep_first_appearance() {
        let s = sample();
        assert_eq!(s.unique_targets(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_targets_fail_on_unlabeled() {
        let mut records = sample().into_records();
        records.push(Record::unlabeled(vec![Feature::continuous("x", 5.0)]));
        let s = Sample::from(records);

        assert!(matches!(s.targets(), Err(BoostError::NoTarget)));
        assert_eq!(s.first_unlabeled(), Some(4));
    }

    #[test]
    fn test_resample() {
        let s = sample();
        let r = s.resample(&[3, 3, 0]);
        assert_eq!(r.len(), 3);
        assert_eq!(r[0], s[3]);
        assert_eq!(r[1], s[3]);
        assert_eq!(r[2], s[0]);
    }
}
