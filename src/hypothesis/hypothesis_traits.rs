use crate::{BoostError, Record};


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
///
/// `predict` must be a pure function of the given record;
/// a classifier may hold trained state but must not mutate it
/// while predicting.
pub trait Classifier<Y> {
    /// Predicts the label of `record`.
    /// The result is defined only for records that follow
    /// the schema of the training sample.
    fn predict(&self, record: &Record<Y>) -> Y;


    /// Predicts the labels of `records`.
    fn predict_all(&self, records: &[Record<Y>]) -> Vec<Y> {
        records.iter()
            .map(|record| self.predict(record))
            .collect()
    }


    /// Returns `true` if `self` predicts the target of `record`.
    /// Fails with [`BoostError::NoTarget`] for an unlabeled record.
    fn is_correct(&self, record: &Record<Y>) -> Result<bool, BoostError>
        where Y: PartialEq,
    {
        let target = record.target()?;
        Ok(self.predict(record) == *target)
    }


    /// Returns the fraction of `records` classified correctly.
    /// The returned value lies in `[0, 1]`.
    ///
    /// Fails with [`BoostError::InvalidArgument`]
    /// if `records` is empty or some record has no target.
    fn success_rate(&self, records: &[Record<Y>]) -> Result<f64, BoostError>
        where Y: PartialEq,
    {
        if records.is_empty() {
            return Err(BoostError::invalid(
                "cannot compute the success rate on zero records"
            ));
        }

        let mut n_correct = 0_usize;
        for (i, record) in records.iter().enumerate() {
            let correct = self.is_correct(record)
                .map_err(|_| BoostError::invalid(format!(
                    "record {i} has no target value"
                )))?;
            if correct { n_correct += 1; }
        }

        Ok(n_correct as f64 / records.len() as f64)
    }
}


impl<Y, C> Classifier<Y> for Box<C>
    where C: Classifier<Y> + ?Sized,
{
    fn predict(&self, record: &Record<Y>) -> Y {
        (**self).predict(record)
    }
}


impl<Y, C> Classifier<Y> for &C
    where C: Classifier<Y> + ?Sized,
{
    fn predict(&self, record: &Record<Y>) -> Y {
        (**self).predict(record)
    }
}
