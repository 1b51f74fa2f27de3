//! Evaluation metrics, one per model variant.
//!
//! The three variants report different scores (R², thresholded accuracy,
//! argmax accuracy) and these are deliberately kept as distinct functions
//! rather than folded into one generic scorer.

use ndarray::{ArrayView1, ArrayView2};

/// Coefficient of determination: `1 − SS_residual / SS_total`.
///
/// `SS_total` is taken around the mean of `labels`. Can be negative when the
/// model fits worse than the label mean.
pub fn r_squared(predictions: ArrayView2<'_, f32>, labels: ArrayView2<'_, f32>) -> f64 {
    let n = labels.len() as f64;
    let label_mean: f64 = labels.iter().map(|&y| y as f64).sum::<f64>() / n;

    let ss_residual: f64 = predictions
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| {
            let diff = (y as f64) - (p as f64);
            diff * diff
        })
        .sum();
    let ss_total: f64 = labels
        .iter()
        .map(|&y| {
            let diff = (y as f64) - label_mean;
            diff * diff
        })
        .sum();

    1.0 - ss_residual / ss_total
}

/// Fraction of 0/1 decisions matching 0/1 labels.
pub fn binary_accuracy(decisions: ArrayView1<'_, f32>, labels: ArrayView2<'_, f32>) -> f64 {
    let total = decisions.len() as f64;
    let incorrect: f64 = decisions
        .iter()
        .zip(labels.column(0).iter())
        .map(|(&d, &y)| ((d as f64) - (y as f64)).abs())
        .sum();
    (total - incorrect) / total
}

/// Fraction of predicted class indices matching one-hot-decoded labels.
pub fn argmax_accuracy(decisions: ArrayView1<'_, f32>, one_hot_labels: ArrayView2<'_, f32>) -> f64 {
    let total = decisions.len() as f64;
    let mut correct = 0usize;
    for (&d, row) in decisions.iter().zip(one_hot_labels.rows()) {
        let mut label = 0usize;
        let mut best = f32::NEG_INFINITY;
        for (i, &v) in row.iter().enumerate() {
            if v > best {
                label = i;
                best = v;
            }
        }
        if d as usize == label {
            correct += 1;
        }
    }
    correct as f64 / total
}

// =============================================================================
// Tests
// =============================================================================
