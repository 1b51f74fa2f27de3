//! Dataset container with fail-fast shape validation.
//!
//! Row-major layout: one row per example. Labels are a single column for
//! linear and binary logistic models, or one-hot rows for the multinomial
//! model. Validation happens here, before any matrix arithmetic, so shape
//! problems surface as a [`DataError`] rather than a backend panic.

use ndarray::{Array2, ArrayView2};

// =============================================================================
// DataError
// =============================================================================

/// Errors raised by shape validation.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Feature and label matrices disagree on the number of rows.
    #[error("feature/label row count mismatch: features have {features} rows, labels have {labels}")]
    RowCountMismatch { features: usize, labels: usize },

    /// A feature matrix has a different column count than the training data.
    #[error("expected {expected} feature columns, got {got}")]
    FeatureWidthMismatch { expected: usize, got: usize },

    /// A weight matrix does not line up with the feature width plus bias.
    #[error("weight matrix has {rows} rows, expected {expected} (features + bias)")]
    WeightRowsMismatch { rows: usize, expected: usize },

    /// The dataset has no rows or no columns.
    #[error("dataset has no rows or no feature columns")]
    Empty,
}

// =============================================================================
// Dataset
// =============================================================================

/// A validated pair of feature and label matrices.
///
/// Construction checks the row-count invariant once; models built from a
/// `Dataset` can assume consistent shapes. Selection of columns, shuffling,
/// and train/test splitting are the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<f32>,
    labels: Array2<f32>,
}

impl Dataset {
    /// Create a dataset from row-major feature and label matrices.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::RowCountMismatch`] if the matrices disagree on
    /// row count, or [`DataError::Empty`] if either dimension is zero.
    pub fn new(features: Array2<f32>, labels: Array2<f32>) -> Result<Self, DataError> {
        if features.nrows() == 0 || features.ncols() == 0 || labels.ncols() == 0 {
            return Err(DataError::Empty);
        }
        if features.nrows() != labels.nrows() {
            return Err(DataError::RowCountMismatch {
                features: features.nrows(),
                labels: labels.nrows(),
            });
        }
        Ok(Self { features, labels })
    }

    /// Number of examples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of raw feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Number of label columns (1, or the class count for one-hot labels).
    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.labels.ncols()
    }

    /// View of the feature matrix.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// View of the label matrix.
    #[inline]
    pub fn labels(&self) -> ArrayView2<'_, f32> {
        self.labels.view()
    }
}

// =============================================================================
// Tests
// =============================================================================
