//! Binary logistic regression.

use ndarray::{Array1, Array2, ArrayView2};

use crate::data::{DataError, Dataset};
use crate::preprocess::Statistics;
use crate::training::metrics::binary_accuracy;
use crate::training::{GradientDescent, Sigmoid, TrainParams};

/// Binary logistic regression trained with mini-batch gradient descent.
///
/// Sigmoid link, cross-entropy cost, thresholded 0/1 decisions. Labels are
/// a single 0/1 column. Like the linear variant, zero-variance feature
/// columns are not guarded and standardize to NaN.
pub struct LogisticRegression {
    engine: GradientDescent<Sigmoid>,
}

impl LogisticRegression {
    /// Build a model from a validated dataset; weights start at zero.
    ///
    /// The decision boundary comes from `params.decision_boundary`.
    pub fn new(data: &Dataset, params: TrainParams) -> Self {
        let link = Sigmoid {
            decision_boundary: params.decision_boundary,
        };
        Self {
            engine: GradientDescent::new(data, link, params),
        }
    }

    /// Run the configured number of epochs; may be called again to continue.
    pub fn train(&mut self) -> &mut Self {
        self.engine.train();
        self
    }

    /// Accuracy of thresholded predictions against 0/1 labels.
    pub fn test(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView2<'_, f32>,
    ) -> Result<f64, DataError> {
        if features.nrows() != labels.nrows() {
            return Err(DataError::RowCountMismatch {
                features: features.nrows(),
                labels: labels.nrows(),
            });
        }
        let decisions = self.engine.predict(features)?;
        Ok(binary_accuracy(decisions.view(), labels))
    }

    /// 0/1 class decisions for raw observations.
    pub fn predict(&self, observations: ArrayView2<'_, f32>) -> Result<Array1<f32>, DataError> {
        self.engine.predict(observations)
    }

    /// Class-1 probabilities before thresholding, shaped n×1.
    pub fn predict_probabilities(
        &self,
        observations: ArrayView2<'_, f32>,
    ) -> Result<Array2<f32>, DataError> {
        self.engine.forward(observations)
    }

    /// Dump options and weights to stdout.
    pub fn print(&self) {
        self.engine.print();
    }

    /// Per-epoch cross-entropy, most recent first.
    pub fn cost_history(&self) -> &[f64] {
        self.engine.cost_history()
    }

    /// Per-epoch bias snapshots, oldest first.
    pub fn bias_history(&self) -> &[f32] {
        self.engine.bias_history()
    }

    /// Current weights, shape (k+1)×1; row 0 is the bias.
    pub fn weights(&self) -> ArrayView2<'_, f32> {
        self.engine.weights()
    }

    /// Frozen standardization statistics.
    pub fn statistics(&self) -> &Statistics {
        self.engine.statistics()
    }

    /// Current learning rate.
    pub fn learning_rate(&self) -> f32 {
        self.engine.learning_rate()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn separable_dataset() -> Dataset {
        // Two clusters on a line: negatives near 0, positives near 10.
        let features = array![
            [0.0], [0.5], [1.0], [1.5],
            [9.0], [9.5], [10.0], [10.5],
        ];
        let labels = array![
            [0.0], [0.0], [0.0], [0.0],
            [1.0], [1.0], [1.0], [1.0],
        ];
        Dataset::new(features, labels).unwrap()
    }

    #[test]
    fn separates_two_clusters() {
        let data = separable_dataset();
        let mut model = LogisticRegression::new(
            &data,
            TrainParams::builder().learning_rate(0.5).iterations(100).build(),
        );
        model.train();

        let accuracy = model.test(data.features(), data.labels()).unwrap();
        assert_eq!(accuracy, 1.0);
    }

    #[test]
    fn custom_decision_boundary_is_applied() {
        let data = separable_dataset();
        let mut strict = LogisticRegression::new(
            &data,
            TrainParams::builder()
                .iterations(50)
                .decision_boundary(0.99)
                .build(),
        );
        strict.train();

        // A probability below the strict boundary decides 0 even where the
        // default boundary would decide 1.
        let probabilities = strict.predict_probabilities(array![[5.5]].view()).unwrap();
        let decisions = strict.predict(array![[5.5]].view()).unwrap();
        if probabilities[[0, 0]] <= 0.99 {
            assert_eq!(decisions[0], 0.0);
        }
    }

    #[test]
    fn cost_history_grows_per_epoch() {
        let data = separable_dataset();
        let mut model = LogisticRegression::new(
            &data,
            TrainParams::builder().iterations(7).build(),
        );
        model.train();

        assert_eq!(model.cost_history().len(), 7);
        assert_eq!(model.bias_history().len(), 7);
    }
}
