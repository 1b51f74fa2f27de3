//! Ordinary linear regression.

use ndarray::{Array1, Array2, ArrayView2};

use crate::data::{DataError, Dataset};
use crate::preprocess::Statistics;
use crate::training::metrics::r_squared;
use crate::training::{GradientDescent, Identity, TrainParams};

/// Linear regression trained with mini-batch gradient descent.
///
/// Identity link, mean squared error cost, R² evaluation. Zero-variance
/// feature columns are *not* guarded: they standardize to NaN, matching the
/// historical behavior of this variant.
///
/// # Example
///
/// ```no_run
/// use ndarray::array;
/// use regressors::{Dataset, LinearRegression, TrainParams};
///
/// let data = Dataset::new(
///     array![[1.0], [2.0], [3.0]],
///     array![[3.0], [5.0], [7.0]],
/// )?;
/// let mut model = LinearRegression::new(&data, TrainParams::default());
/// model.train();
/// let score = model.test(data.features(), data.labels())?;
/// # Ok::<(), regressors::DataError>(())
/// ```
pub struct LinearRegression {
    engine: GradientDescent<Identity>,
}

impl LinearRegression {
    /// Build a model from a validated dataset; weights start at zero.
    pub fn new(data: &Dataset, params: TrainParams) -> Self {
        Self {
            engine: GradientDescent::new(data, Identity, params),
        }
    }

    /// Run the configured number of epochs; may be called again to continue.
    pub fn train(&mut self) -> &mut Self {
        self.engine.train();
        self
    }

    /// R² on held-out data, preprocessed with the frozen training statistics.
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
        let predictions = self.engine.forward(features)?;
        Ok(r_squared(predictions.view(), labels))
    }

    /// Predicted values for raw observations, one per row.
    pub fn predict(&self, observations: ArrayView2<'_, f32>) -> Result<Array1<f32>, DataError> {
        self.engine.predict(observations)
    }

    /// Raw predictions without the decision rule (same as predict for the
    /// identity link, but shaped n×1).
    pub fn forward(&self, observations: ArrayView2<'_, f32>) -> Result<Array2<f32>, DataError> {
        self.engine.forward(observations)
    }

    /// Dump options and weights to stdout.
    pub fn print(&self) {
        self.engine.print();
    }

    /// Per-epoch mean squared error, most recent first.
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

    #[test]
    fn fits_exact_line() {
        // y = 2x + 1, no noise.
        let data = Dataset::new(
            array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0]],
            array![[3.0], [5.0], [7.0], [9.0], [11.0], [13.0]],
        )
        .unwrap();

        let mut model = LinearRegression::new(
            &data,
            TrainParams::builder().learning_rate(0.1).iterations(200).build(),
        );
        model.train();

        let score = model.test(data.features(), data.labels()).unwrap();
        assert!(score > 0.99, "R² was {score}");
    }

    #[test]
    fn zero_variance_column_poisons_predictions() {
        // Second column is constant; this variant does not guard it.
        let data = Dataset::new(
            array![[1.0, 5.0], [2.0, 5.0], [3.0, 5.0], [4.0, 5.0]],
            array![[1.0], [2.0], [3.0], [4.0]],
        )
        .unwrap();

        let mut model = LinearRegression::new(
            &data,
            TrainParams::builder().iterations(5).build(),
        );
        model.train();

        let predictions = model.predict(data.features()).unwrap();
        assert!(predictions.iter().all(|p| p.is_nan()));
    }

    #[test]
    fn test_rejects_mismatched_rows() {
        let data = Dataset::new(array![[1.0], [2.0]], array![[1.0], [2.0]]).unwrap();
        let model = LinearRegression::new(&data, TrainParams::default());

        let result = model.test(array![[1.0], [2.0]].view(), array![[1.0]].view());
        assert!(matches!(result, Err(DataError::RowCountMismatch { .. })));
    }
}
