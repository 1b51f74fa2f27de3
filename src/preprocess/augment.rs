//! Bias-column augmentation.

use ndarray::{s, Array2, ArrayView2};

/// Prepend a constant 1.0 column to every row.
///
/// Applied after standardization so the intercept weight sees an exact 1.0,
/// never a z-normalized value.
pub fn prepend_bias(features: ArrayView2<'_, f32>) -> Array2<f32> {
    let (n_rows, n_cols) = features.dim();
    let mut augmented = Array2::ones((n_rows, n_cols + 1));
    augmented.slice_mut(s![.., 1..]).assign(&features);
    augmented
}
