//! Cumulative update counters.
//!
//! [`UpdateMetrics`] counts what the update strategies did since the
//! lattice was built (or since the last
//! [`reset_metrics()`](crate::Lattice::reset_metrics)). Counters are plain
//! integers bumped in the hot loop; reading them never touches the state.

/// Counts of elementary updates and their outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateMetrics {
    /// Elementary updates attempted.
    pub attempted: u64,
    /// Attempts whose target site was empty: the particle moved.
    pub moved: u64,
    /// Attempts rejected because the target site was occupied.
    pub blocked: u64,
    /// Tumble events (orientation resampled, possibly to the same value).
    pub tumbles: u64,
}

impl UpdateMetrics {
    /// Fraction of attempts that moved, or `None` before any attempt.
    pub fn acceptance_ratio(&self) -> Option<f64> {
        (self.attempted > 0).then(|| self.moved as f64 / self.attempted as f64)
    }

    pub(crate) fn absorb(&mut self, other: &Self) {
        self.attempted += other.attempted;
        self.moved += other.moved;
        self.blocked += other.blocked;
        self.tumbles += other.tumbles;
    }
}
