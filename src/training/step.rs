//! The shared gradient descent step.

use ndarray::{Array2, ArrayView2};

use super::link::LinkFn;

/// Apply one gradient descent update to `weights` in place.
///
/// `W ← W − rate · Xᵀ·(link.forward(X, W) − y) / n`
///
/// The same update serves all three model variants: the derivative of squared
/// error w.r.t. linear weights and the derivative of cross-entropy w.r.t.
/// (softmax-)logits both reduce to `Xᵀ·(prediction − label) / n`.
pub fn gradient_step<L: LinkFn>(
    features: ArrayView2<'_, f32>,
    labels: ArrayView2<'_, f32>,
    weights: &mut Array2<f32>,
    learning_rate: f32,
    link: &L,
) {
    let predictions = link.forward(features, weights.view());
    let residuals = predictions - &labels;
    let n_rows = features.nrows() as f32;
    let gradient = features.t().dot(&residuals) / n_rows;
    weights.scaled_add(-learning_rate, &gradient);
}

// =============================================================================
// Tests
// =============================================================================
