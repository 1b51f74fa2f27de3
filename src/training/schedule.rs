//! Bold-driver learning-rate schedule.

/// Adaptive learning rate: shrink on a cost regression, grow slowly otherwise.
///
/// The comparison is against `history[0]`. History is kept most-recent-first
/// (each new cost is prepended), so after the first observation this compares
/// against the immediately preceding epoch's cost. The very first observation
/// has nothing to compare against and takes the growth branch. No floor or
/// ceiling is imposed: the rate can shrink toward zero or grow without bound.
#[derive(Debug, Clone)]
pub struct BoldDriver {
    rate: f32,
    history: Vec<f64>,
}

/// Multiplier applied on a cost regression.
const SHRINK_FACTOR: f32 = 0.5;
/// Multiplier applied on an improvement (or the first observation).
const GROWTH_FACTOR: f32 = 1.01;

impl BoldDriver {
    /// Create a schedule starting at `initial_rate`.
    pub fn new(initial_rate: f32) -> Self {
        Self {
            rate: initial_rate,
            history: Vec::new(),
        }
    }

    /// Current learning rate.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Adapt the rate to a new cost value and record it.
    pub fn observe(&mut self, cost: f64) {
        match self.history.first() {
            Some(&previous) if cost > previous => self.rate *= SHRINK_FACTOR,
            _ => self.rate *= GROWTH_FACTOR,
        }
        self.history.insert(0, cost);
    }

    /// Recorded costs, most recent first.
    #[inline]
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

// =============================================================================
// Tests
// =============================================================================
