// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for gate outcomes.
#[derive(Debug, Default)]
pub struct GateMetrics {
	admitted: AtomicU64,
	delayed: AtomicU64,
	cancelled: AtomicU64,
}
impl GateMetrics {
	/// Returns the number of admissions granted.
	pub fn admitted(&self) -> u64 {
		self.admitted.load(Ordering::Relaxed)
	}

	/// Returns how many admission requests found the window exhausted.
	///
	/// A waiting call counts once however many times it re-checks the bucket.
	pub fn delayed(&self) -> u64 {
		self.delayed.load(Ordering::Relaxed)
	}

	/// Returns the number of waits abandoned through cancellation.
	pub fn cancelled(&self) -> u64 {
		self.cancelled.load(Ordering::Relaxed)
	}

	pub(crate) fn record_admitted(&self) {
		self.admitted.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_delayed(&self) {
		self.delayed.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_cancelled(&self) {
		self.cancelled.fetch_add(1, Ordering::Relaxed);
	}
}
