//! Mini-batch iteration over a feature/label matrix pair.

use ndarray::{s, ArrayView2};

/// Iterator over fixed-size, contiguous, order-preserving mini-batches.
///
/// Yields `floor(n_rows / batch_size)` batches of exactly `batch_size` rows
/// each; any trailing remainder is dropped, never yielded. Full-batch
/// training bypasses this type entirely (see the trainer).
pub struct Batches<'a> {
    features: ArrayView2<'a, f32>,
    labels: ArrayView2<'a, f32>,
    batch_size: usize,
    n_batches: usize,
    cursor: usize,
}

impl<'a> Batches<'a> {
    /// Create a batch iterator over matching feature/label views.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is zero or the views disagree on row count.
    pub fn new(
        features: ArrayView2<'a, f32>,
        labels: ArrayView2<'a, f32>,
        batch_size: usize,
    ) -> Self {
        assert!(batch_size > 0, "batch_size must be positive");
        assert_eq!(
            features.nrows(),
            labels.nrows(),
            "features and labels must have the same number of rows"
        );
        let n_batches = features.nrows() / batch_size;
        Self {
            features,
            labels,
            batch_size,
            n_batches,
            cursor: 0,
        }
    }

    /// Number of batches this iterator will yield.
    #[inline]
    pub fn n_batches(&self) -> usize {
        self.n_batches
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = (ArrayView2<'a, f32>, ArrayView2<'a, f32>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.n_batches {
            return None;
        }
        let start = self.cursor * self.batch_size;
        let end = start + self.batch_size;
        self.cursor += 1;

        // ArrayView is Copy; slice_move keeps the 'a lifetime.
        let features = self.features.slice_move(s![start..end, ..]);
        let labels = self.labels.slice_move(s![start..end, ..]);
        Some((features, labels))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n_batches - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batches<'_> {}

// =============================================================================
// Tests
// =============================================================================
