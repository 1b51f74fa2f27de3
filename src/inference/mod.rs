//! Inference over persisted artifacts.
//!
//! [`FrozenModel`] reproduces the exact preprocessing order used at training
//! time — standardize against the *persisted* statistics, then prepend the
//! bias column — and forwards through softmax to a class index. It holds no
//! optimizer state; it is the surface a demo UI calls.

use std::path::Path;

use ndarray::{Array2, ArrayView2};

use crate::data::DataError;
use crate::persist::{self, PersistError, MEANS_FILE, VARIANCES_FILE, WEIGHTS_FILE};
use crate::preprocess::{self, Statistics, VarianceGuard};
use crate::training::{LinkFn, Softmax};

/// A trained multinomial model reconstructed from flat-text artifacts.
pub struct FrozenModel {
    weights: Array2<f32>,
    stats: Statistics,
}

impl FrozenModel {
    /// Assemble from already-loaded parts.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::WeightRowsMismatch`] if the weight matrix does
    /// not have one row per feature plus one for the bias, or
    /// [`DataError::RowCountMismatch`] if mean and variance disagree.
    pub fn from_parts(weights: Array2<f32>, stats: Statistics) -> Result<Self, DataError> {
        if stats.mean.len() != stats.variance.len() {
            return Err(DataError::RowCountMismatch {
                features: stats.mean.len(),
                labels: stats.variance.len(),
            });
        }
        let expected = stats.n_features() + 1;
        if weights.nrows() != expected {
            return Err(DataError::WeightRowsMismatch {
                rows: weights.nrows(),
                expected,
            });
        }
        Ok(Self { weights, stats })
    }

    /// Load `weights.txt`, `means.txt`, and `variances.txt` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] for I/O or parse failures, or
    /// [`PersistError::Shape`] when the artifacts disagree on dimensions.
    pub fn load(dir: &Path) -> Result<Self, PersistError> {
        let weights = persist::read_weights(&dir.join(WEIGHTS_FILE))?;
        let mean = persist::read_vector(&dir.join(MEANS_FILE))?;
        let variance = persist::read_vector(&dir.join(VARIANCES_FILE))?;
        Ok(Self::from_parts(weights, Statistics { mean, variance })?)
    }

    /// Number of raw features the model expects.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.stats.n_features()
    }

    /// Number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.weights.ncols()
    }

    /// Predict the class index for one flattened observation.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::FeatureWidthMismatch`] if the observation length
    /// differs from the training feature width.
    pub fn predict(&self, observation: &[f32]) -> Result<usize, DataError> {
        let probabilities = self.predict_probabilities(observation)?;
        let row = probabilities.row(0);
        let mut best = 0usize;
        let mut best_value = f32::NEG_INFINITY;
        for (i, &p) in row.iter().enumerate() {
            if p > best_value {
                best = i;
                best_value = p;
            }
        }
        Ok(best)
    }

    /// Class probabilities for one flattened observation, shaped 1×c.
    pub fn predict_probabilities(&self, observation: &[f32]) -> Result<Array2<f32>, DataError> {
        if observation.len() != self.n_features() {
            return Err(DataError::FeatureWidthMismatch {
                expected: self.n_features(),
                got: observation.len(),
            });
        }
        let features =
            ArrayView2::from_shape((1, observation.len()), observation).expect("length checked");
        // Artifacts come from the multinomial model, so the guarded
        // standardizer applies here too.
        let standardized =
            preprocess::transform(features, &self.stats, VarianceGuard::SubstituteUnit);
        let processed = preprocess::prepend_bias(standardized.view());
        Ok(Softmax.forward(processed.view(), self.weights.view()))
    }
}

// =============================================================================
// Tests
// =============================================================================
