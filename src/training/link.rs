//! Link/cost strategies: the only place the three model variants differ.
//!
//! Each strategy maps the linear combination `X·W` to a prediction
//! (`forward`), scores predictions against labels (`cost`), and maps raw
//! predictions to a discrete output (`decide`). The gradient formula itself
//! is shared — see [`gradient_step`](crate::training::gradient_step) — because
//! the derivative of squared error w.r.t. linear weights and the derivative
//! of cross-entropy w.r.t. (softmax-)logits both collapse to
//! `Xᵀ·(prediction − label) / n`.

use ndarray::{Array1, Array2, ArrayView2};

use crate::preprocess::VarianceGuard;

// =============================================================================
// LinkFn Trait
// =============================================================================

/// A link function plus its paired cost function and decision rule.
pub trait LinkFn {
    /// Map processed features and weights to predictions, shape n×c.
    fn forward(&self, features: ArrayView2<'_, f32>, weights: ArrayView2<'_, f32>) -> Array2<f32>;

    /// Scalar training cost of `weights` on the given features and labels.
    fn cost(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView2<'_, f32>,
        weights: ArrayView2<'_, f32>,
    ) -> f64;

    /// Map raw predictions to one output value per row.
    fn decide(&self, predictions: ArrayView2<'_, f32>) -> Array1<f32>;

    /// Zero-variance handling this variant applies during standardization.
    fn variance_guard(&self) -> VarianceGuard;

    /// Name of the strategy (for logging).
    fn name(&self) -> &'static str;
}

// =============================================================================
// Shared helpers
// =============================================================================

#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Cross-entropy in matrix form: `-(1/n) Σ [y·ln(p) + (1−y)·ln(1−p)]`.
///
/// Shared by the binary and multinomial variants; for one-hot labels this is
/// the standard multi-class cross-entropy plus the complementary terms. No
/// epsilon clamping: a saturated probability yields an infinite cost, which
/// the learning-rate controller answers by halving the rate.
fn cross_entropy(probabilities: &Array2<f32>, labels: ArrayView2<'_, f32>) -> f64 {
    let n_rows = probabilities.nrows() as f64;
    let sum: f64 = probabilities
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| {
            let (p, y) = (p as f64, y as f64);
            y * p.ln() + (1.0 - y) * (1.0 - p).ln()
        })
        .sum();
    -sum / n_rows
}

/// Index of the largest value in a row; ties go to the first maximum.
fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}

// =============================================================================
// Identity (linear regression)
// =============================================================================

/// Identity link with mean squared error: ordinary linear regression.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl LinkFn for Identity {
    fn forward(&self, features: ArrayView2<'_, f32>, weights: ArrayView2<'_, f32>) -> Array2<f32> {
        features.dot(&weights)
    }

    fn cost(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView2<'_, f32>,
        weights: ArrayView2<'_, f32>,
    ) -> f64 {
        let predictions = self.forward(features, weights);
        let n_rows = features.nrows() as f64;
        let sum_sq: f64 = predictions
            .iter()
            .zip(labels.iter())
            .map(|(&p, &y)| {
                let diff = (p as f64) - (y as f64);
                diff * diff
            })
            .sum();
        sum_sq / n_rows
    }

    fn decide(&self, predictions: ArrayView2<'_, f32>) -> Array1<f32> {
        predictions.column(0).to_owned()
    }

    fn variance_guard(&self) -> VarianceGuard {
        VarianceGuard::None
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

// =============================================================================
// Sigmoid (binary logistic regression)
// =============================================================================

/// Sigmoid link with binary cross-entropy and a threshold decision rule.
#[derive(Debug, Clone, Copy)]
pub struct Sigmoid {
    /// Probability above which a row is classified as 1.
    pub decision_boundary: f32,
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self { decision_boundary: 0.5 }
    }
}

impl LinkFn for Sigmoid {
    fn forward(&self, features: ArrayView2<'_, f32>, weights: ArrayView2<'_, f32>) -> Array2<f32> {
        let mut logits = features.dot(&weights);
        logits.mapv_inplace(sigmoid);
        logits
    }

    fn cost(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView2<'_, f32>,
        weights: ArrayView2<'_, f32>,
    ) -> f64 {
        let probabilities = self.forward(features, weights);
        cross_entropy(&probabilities, labels)
    }

    fn decide(&self, predictions: ArrayView2<'_, f32>) -> Array1<f32> {
        predictions
            .column(0)
            .mapv(|p| if p > self.decision_boundary { 1.0 } else { 0.0 })
    }

    fn variance_guard(&self) -> VarianceGuard {
        VarianceGuard::None
    }

    fn name(&self) -> &'static str {
        "sigmoid"
    }
}

// =============================================================================
// Softmax (multinomial logistic regression)
// =============================================================================

/// Softmax link with cross-entropy and an argmax decision rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Softmax;

impl Softmax {
    /// Apply a max-subtracted softmax to one row of logits, in place.
    fn softmax_row_inplace(row: &mut [f32]) {
        let max_value = row.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let mut sum = 0.0f32;
        for x in row.iter_mut() {
            *x = (*x - max_value).exp();
            sum += *x;
        }
        if sum > 0.0 {
            for x in row.iter_mut() {
                *x /= sum;
            }
        }
    }
}

impl LinkFn for Softmax {
    fn forward(&self, features: ArrayView2<'_, f32>, weights: ArrayView2<'_, f32>) -> Array2<f32> {
        let mut logits = features.dot(&weights);
        for mut row in logits.rows_mut() {
            let slice = row.as_slice_mut().expect("row of C-order matrix is contiguous");
            Self::softmax_row_inplace(slice);
        }
        logits
    }

    fn cost(
        &self,
        features: ArrayView2<'_, f32>,
        labels: ArrayView2<'_, f32>,
        weights: ArrayView2<'_, f32>,
    ) -> f64 {
        let probabilities = self.forward(features, weights);
        cross_entropy(&probabilities, labels)
    }

    fn decide(&self, predictions: ArrayView2<'_, f32>) -> Array1<f32> {
        Array1::from_iter(predictions.rows().into_iter().map(|row| {
            argmax(row.as_slice().expect("row of C-order matrix is contiguous")) as f32
        }))
    }

    fn variance_guard(&self) -> VarianceGuard {
        VarianceGuard::SubstituteUnit
    }

    fn name(&self) -> &'static str {
        "softmax"
    }
}

// =============================================================================
// Tests
// =============================================================================
