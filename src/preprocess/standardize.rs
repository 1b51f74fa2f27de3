//! Column-wise standardization against frozen training statistics.

use ndarray::{Array1, Array2, ArrayView2, Axis};

// =============================================================================
// Statistics
// =============================================================================

/// Per-feature mean and population variance, fit once from training features.
///
/// Frozen for the lifetime of a model; test and prediction inputs are always
/// standardized against these values, never against their own moments.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Column means, length = number of raw features.
    pub mean: Array1<f32>,
    /// Column population variances (ddof 0), length = number of raw features.
    pub variance: Array1<f32>,
}

impl Statistics {
    /// Number of feature columns these statistics describe.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

// =============================================================================
// VarianceGuard
// =============================================================================

/// How to treat a feature column whose variance is exactly zero.
///
/// The linear and binary logistic variants divide by `sqrt(0)` and produce
/// NaN; the multinomial variant substitutes a unit variance so constant
/// columns standardize to 0. The inconsistency is preserved on purpose —
/// each link strategy declares which behavior it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceGuard {
    /// Divide by `sqrt(variance)` unconditionally.
    #[default]
    None,
    /// Replace exactly-zero variances with 1.0 before the square root.
    SubstituteUnit,
}

// =============================================================================
// Fit / Transform
// =============================================================================

/// Compute per-column mean and population variance over all rows.
pub fn fit(features: ArrayView2<'_, f32>) -> Statistics {
    let mean = features
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(features.ncols()));
    let variance = features.var_axis(Axis(0), 0.0);
    Statistics { mean, variance }
}

/// Z-normalize `features` against `stats`, broadcasting across rows.
pub fn transform(
    features: ArrayView2<'_, f32>,
    stats: &Statistics,
    guard: VarianceGuard,
) -> Array2<f32> {
    debug_assert_eq!(features.ncols(), stats.n_features());

    let denominator = match guard {
        VarianceGuard::None => stats.variance.mapv(f32::sqrt),
        VarianceGuard::SubstituteUnit => stats
            .variance
            .mapv(|v| if v == 0.0 { 1.0 } else { v.sqrt() }),
    };

    (&features - &stats.mean) / &denominator
}

// =============================================================================
// Tests
// =============================================================================
