//! Fixed-window bucket state guarded by the gate's mutex.

// self
use crate::_prelude::*;

/// Result of a single, non-waiting admission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
	/// A token was consumed.
	Admitted {
		/// Tokens left in the current window after this admission.
		remaining: u32,
	},
	/// The window is exhausted; retry after the given delay.
	Delay(Duration),
}
impl Admission {
	/// Returns `true` for [`Admission::Admitted`].
	pub fn is_admitted(&self) -> bool {
		matches!(self, Admission::Admitted { .. })
	}
}

/// Mutable half of the bucket. `capacity` and `window` live on the gate.
#[derive(Debug)]
pub(crate) struct Bucket {
	available: u32,
	last_refill: Instant,
}
impl Bucket {
	pub(crate) fn full(capacity: u32, now: Instant) -> Self {
		Self { available: capacity, last_refill: now }
	}

	pub(crate) fn available(&self) -> u32 {
		self.available
	}

	/// Runs one pass of the admission algorithm at `now`.
	///
	/// Refills only once the window has fully elapsed, and then to full capacity.
	pub(crate) fn step(&mut self, capacity: u32, window: Duration, now: Instant) -> Step {
		if self.available > 0 {
			self.available -= 1;

			return Step::Admitted { remaining: self.available, refilled: false };
		}

		let elapsed = now.saturating_duration_since(self.last_refill);

		if elapsed >= window {
			self.available = capacity - 1;
			self.last_refill = now;

			return Step::Admitted { remaining: self.available, refilled: true };
		}

		Step::Wait(window - elapsed)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
	Admitted { remaining: u32, refilled: bool },
	Wait(Duration),
}
impl From<Step> for Admission {
	fn from(step: Step) -> Self {
		match step {
			Step::Admitted { remaining, .. } => Admission::Admitted { remaining },
			Step::Wait(wait) => Admission::Delay(wait),
		}
	}
}
