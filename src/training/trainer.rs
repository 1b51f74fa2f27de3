//! The shared gradient descent engine.
//!
//! [`GradientDescent`] owns everything the three model variants have in
//! common: frozen standardization statistics, processed training data,
//! weights, the bold-driver schedule, and the epoch loop. The variants plug
//! in a [`LinkFn`] and add their own evaluation metric on top.

use bon::Builder;
use ndarray::{Array1, Array2, ArrayView2};

use crate::data::{Batches, DataError, Dataset};
use crate::preprocess;

use super::link::LinkFn;
use super::logger::{TrainingLogger, Verbosity};
use super::schedule::BoldDriver;
use super::step::gradient_step;

// =============================================================================
// TrainParams
// =============================================================================

/// Training configuration, immutable after construction.
///
/// `learning_rate` is only the initial value; the live rate is adapted every
/// epoch by the bold-driver schedule and lives in optimizer state, not here.
///
/// # Example
///
/// ```
/// use regressors::TrainParams;
///
/// // All defaults: rate 0.1, 100 iterations, full-batch.
/// let params = TrainParams::default();
///
/// // Mini-batch training.
/// let params = TrainParams::builder()
///     .learning_rate(0.5)
///     .iterations(20)
///     .batch_size(100)
///     .build();
/// ```
#[derive(Debug, Clone, Builder)]
pub struct TrainParams {
    /// Initial learning rate. Default: 0.1.
    #[builder(default = 0.1)]
    pub learning_rate: f32,

    /// Number of training epochs. Default: 100.
    #[builder(default = 100)]
    pub iterations: u32,

    /// Rows per mini-batch. `None` trains on the full dataset each epoch.
    ///
    /// A batch size larger than the dataset yields zero batches per epoch:
    /// that epoch performs no weight updates but still evaluates cost and
    /// adapts the learning rate.
    pub batch_size: Option<usize>,

    /// Probability threshold for the binary decision rule. Default: 0.5.
    #[builder(default = 0.5)]
    pub decision_boundary: f32,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// GradientDescent
// =============================================================================

/// Shared training loop over an arbitrary link/cost strategy.
pub struct GradientDescent<L: LinkFn> {
    link: L,
    params: TrainParams,
    stats: preprocess::Statistics,
    /// Standardized, bias-augmented training features, shape n×(k+1).
    features: Array2<f32>,
    labels: Array2<f32>,
    /// Shape (k+1)×c, zero-initialized.
    weights: Array2<f32>,
    schedule: BoldDriver,
    /// Per-epoch snapshots of the bias weight of output 0, oldest first.
    bias_history: Vec<f32>,
    logger: TrainingLogger,
}

impl<L: LinkFn> GradientDescent<L> {
    /// Fit statistics from the dataset and set up zeroed weights.
    pub fn new(data: &Dataset, link: L, params: TrainParams) -> Self {
        let stats = preprocess::fit(data.features());
        let standardized = preprocess::transform(data.features(), &stats, link.variance_guard());
        let features = preprocess::prepend_bias(standardized.view());
        let weights = Array2::zeros((features.ncols(), data.n_outputs()));
        let schedule = BoldDriver::new(params.learning_rate);
        let logger = TrainingLogger::new(params.verbosity);

        Self {
            link,
            params,
            stats,
            features,
            labels: data.labels().to_owned(),
            weights,
            schedule,
            bias_history: Vec::new(),
            logger,
        }
    }

    /// Run `iterations` epochs of gradient descent.
    ///
    /// Each epoch applies one step per mini-batch (or a single full-batch
    /// step), then evaluates cost over the entire training set and feeds it
    /// to the schedule. There is no convergence check; calling `train` again
    /// continues from the current weights.
    pub fn train(&mut self) {
        self.logger
            .start_training(self.link.name(), self.params.iterations as usize);

        for epoch in 0..self.params.iterations {
            match self.params.batch_size {
                Some(batch_size) => {
                    let batches =
                        Batches::new(self.features.view(), self.labels.view(), batch_size);
                    for (feature_batch, label_batch) in batches {
                        gradient_step(
                            feature_batch,
                            label_batch,
                            &mut self.weights,
                            self.schedule.rate(),
                            &self.link,
                        );
                    }
                }
                None => gradient_step(
                    self.features.view(),
                    self.labels.view(),
                    &mut self.weights,
                    self.schedule.rate(),
                    &self.link,
                ),
            }

            let cost = self
                .link
                .cost(self.features.view(), self.labels.view(), self.weights.view());
            self.schedule.observe(cost);
            self.bias_history.push(self.weights[[0, 0]]);
            self.logger.log_epoch(epoch as usize, cost, self.schedule.rate());
        }

        self.logger.finish_training(self.link.name());
    }

    /// Standardize and bias-augment external features with the frozen stats.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::FeatureWidthMismatch`] if the column count does
    /// not match the training features.
    pub fn process(&self, features: ArrayView2<'_, f32>) -> Result<Array2<f32>, DataError> {
        if features.ncols() != self.stats.n_features() {
            return Err(DataError::FeatureWidthMismatch {
                expected: self.stats.n_features(),
                got: features.ncols(),
            });
        }
        let standardized =
            preprocess::transform(features, &self.stats, self.link.variance_guard());
        Ok(preprocess::prepend_bias(standardized.view()))
    }

    /// Forward raw observations through the model, without the decision rule.
    pub fn forward(&self, observations: ArrayView2<'_, f32>) -> Result<Array2<f32>, DataError> {
        let processed = self.process(observations)?;
        Ok(self.link.forward(processed.view(), self.weights.view()))
    }

    /// Process, forward, and apply the decision rule: one output per row.
    pub fn predict(&self, observations: ArrayView2<'_, f32>) -> Result<Array1<f32>, DataError> {
        let predictions = self.forward(observations)?;
        Ok(self.link.decide(predictions.view()))
    }

    /// Dump options and weights to stdout.
    ///
    /// Row 0 is the bias (`b`); the remaining rows are labeled `m1..mN`, one
    /// line per weight row with all output columns.
    pub fn print(&self) {
        println!("iterations: {}", self.params.iterations);
        println!("learning rate: {}", self.schedule.rate());
        for (i, row) in self.weights.rows().into_iter().enumerate() {
            let label = if i == 0 { "b".to_string() } else { format!("m{i}") };
            let values: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            println!("{label}: {}", values.join(", "));
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The active link strategy.
    #[inline]
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Training configuration.
    #[inline]
    pub fn params(&self) -> &TrainParams {
        &self.params
    }

    /// Frozen standardization statistics.
    #[inline]
    pub fn statistics(&self) -> &preprocess::Statistics {
        &self.stats
    }

    /// Current weights, shape (k+1)×c.
    #[inline]
    pub fn weights(&self) -> ArrayView2<'_, f32> {
        self.weights.view()
    }

    /// Current learning rate.
    #[inline]
    pub fn learning_rate(&self) -> f32 {
        self.schedule.rate()
    }

    /// Per-epoch training cost, most recent first.
    #[inline]
    pub fn cost_history(&self) -> &[f64] {
        self.schedule.history()
    }

    /// Per-epoch bias snapshots, oldest first.
    #[inline]
    pub fn bias_history(&self) -> &[f32] {
        &self.bias_history
    }
}

// =============================================================================
// Tests
// =============================================================================
