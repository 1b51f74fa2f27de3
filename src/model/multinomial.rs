//! Multinomial (softmax) logistic regression.

use std::path::Path;

use ndarray::{Array1, Array2, ArrayView2};

use crate::data::{DataError, Dataset};
use crate::persist::{self, PersistError, MEANS_FILE, VARIANCES_FILE, WEIGHTS_FILE};
use crate::preprocess::Statistics;
use crate::training::metrics::argmax_accuracy;
use crate::training::{GradientDescent, Softmax, TrainParams};

/// Multinomial logistic regression trained with mini-batch gradient descent.
///
/// Softmax link, cross-entropy cost, argmax decisions. Labels are one-hot
/// rows, one column per class. Unlike the other two variants, zero-variance
/// feature columns are guarded: they standardize to a constant 0 instead of
/// NaN, which matters for inputs like blank image borders.
pub struct MultinomialLogisticRegression {
    engine: GradientDescent<Softmax>,
}

impl MultinomialLogisticRegression {
    /// Build a model from a validated dataset; weights start at zero.
    pub fn new(data: &Dataset, params: TrainParams) -> Self {
        Self {
            engine: GradientDescent::new(data, Softmax, params),
        }
    }

    /// Run the configured number of epochs; may be called again to continue.
    pub fn train(&mut self) -> &mut Self {
        self.engine.train();
        self
    }

    /// Accuracy of argmax decisions against one-hot-decoded labels.
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
        Ok(argmax_accuracy(decisions.view(), labels))
    }

    /// Predicted class index per row (as f32, matching the decision rule).
    pub fn predict(&self, observations: ArrayView2<'_, f32>) -> Result<Array1<f32>, DataError> {
        self.engine.predict(observations)
    }

    /// Class probabilities before the argmax, shaped n×c.
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

    /// Write `weights.txt`, `means.txt`, and `variances.txt` into `dir`.
    ///
    /// These are the flat-text artifacts the frozen inference surface
    /// ([`FrozenModel`](crate::inference::FrozenModel)) consumes.
    pub fn save_artifacts(&self, dir: &Path) -> Result<(), PersistError> {
        std::fs::create_dir_all(dir)?;
        persist::write_weights(&dir.join(WEIGHTS_FILE), self.engine.weights())?;
        let stats = self.engine.statistics();
        persist::write_vector(&dir.join(MEANS_FILE), stats.mean.view())?;
        persist::write_vector(&dir.join(VARIANCES_FILE), stats.variance.view())?;
        Ok(())
    }

    /// Per-epoch cross-entropy, most recent first.
    pub fn cost_history(&self) -> &[f64] {
        self.engine.cost_history()
    }

    /// Per-epoch bias snapshots (output column 0), oldest first.
    pub fn bias_history(&self) -> &[f32] {
        self.engine.bias_history()
    }

    /// Current weights, shape (k+1)×c; row 0 holds the per-class biases.
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
