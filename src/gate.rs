//! Fixed-window admission gate.
//!
//! [`AdmissionGate`] admits at most `capacity` operations per window. The bucket is a
//! fixed-window counter behind a token-bucket API: each admission consumes a token, and
//! the token count is restored to full capacity once a whole window has elapsed since the
//! last refill. Callers that find the bucket empty release the lock, sleep for the rest of
//! the window, then re-check; several sleepers may wake together and only the first
//! `capacity` of them are admitted.
//!
//! Because refills are full resets, up to `2 * capacity` admissions can land close
//! together around a window boundary.

mod bucket;
mod cancel;
mod config;
mod metrics;

pub use bucket::Admission;
pub use cancel::CancelSignal;
pub use config::*;
pub use metrics::GateMetrics;

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	obs::{self, AdmissionOutcome, GateSpan},
};
use bucket::{Bucket, Step};

/// Concurrency-safe admission gate shared by reference (usually behind an [`Arc`]).
///
/// The gate owns its bucket exclusively. Components that must share one limit should
/// share one gate handle instead of constructing gates with the same parameters.
#[derive(Debug)]
pub struct AdmissionGate {
	capacity: u32,
	window: Duration,
	bucket: Mutex<Bucket>,
	metrics: GateMetrics,
}
impl AdmissionGate {
	/// Creates a gate admitting `capacity` operations per `window`, starting full.
	pub fn new(window: Duration, capacity: u32) -> Result<Self, ConfigError> {
		config::validate(capacity, window)?;

		Ok(Self {
			capacity,
			window,
			bucket: Mutex::new(Bucket::full(capacity, Instant::now())),
			metrics: GateMetrics::default(),
		})
	}

	/// Creates a gate admitting `capacity` operations per single `unit`.
	pub fn per(unit: TimeUnit, capacity: u32) -> Result<Self, ConfigError> {
		Self::new(unit.as_duration(), capacity)
	}

	/// Creates a gate from a validated [`GateConfig`].
	pub fn from_config(config: &GateConfig) -> Result<Self, ConfigError> {
		Self::new(config.window.duration(), config.capacity)
	}

	/// Maximum admissions per window.
	pub fn capacity(&self) -> u32 {
		self.capacity
	}

	/// Window length.
	pub fn window(&self) -> Duration {
		self.window
	}

	/// Tokens currently left in the bucket.
	///
	/// An exhausted bucket reports zero until the next admission attempt refills it.
	pub fn available(&self) -> u32 {
		self.bucket.lock().available()
	}

	/// Outcome counters recorded by this gate.
	pub fn metrics(&self) -> &GateMetrics {
		&self.metrics
	}

	/// Point-in-time snapshot of the gate state.
	pub fn stats(&self) -> GateStats {
		GateStats {
			capacity: self.capacity,
			available: self.available(),
			admitted: self.metrics.admitted(),
			delayed: self.metrics.delayed(),
			cancelled: self.metrics.cancelled(),
		}
	}

	/// Attempts one admission without waiting.
	///
	/// A [`Admission::Delay`] result counts as one delayed request.
	pub fn try_acquire(&self) -> Admission {
		self.poll(true)
	}

	/// Runs one bucket step. `first_attempt` is false on the re-checks of a caller that is
	/// already waiting, so each waiting call is counted as delayed once.
	fn poll(&self, first_attempt: bool) -> Admission {
		let step = self.bucket.lock().step(self.capacity, self.window, Instant::now());

		match step {
			Step::Admitted { refilled, .. } => {
				if refilled {
					obs::trace_refill(self.capacity);
				}

				self.metrics.record_admitted();
				obs::record_admission(AdmissionOutcome::Admitted);
			},
			Step::Wait(wait) => {
				if first_attempt {
					self.metrics.record_delayed();
					obs::record_admission(AdmissionOutcome::Delayed);
				}

				obs::trace_delay(wait);
			},
		}

		step.into()
	}

	/// Waits until a token is available and consumes it.
	///
	/// Dropping the returned future before it resolves abandons the wait without consuming
	/// a token.
	pub async fn acquire(&self) {
		let span = GateSpan::new("acquire");

		span.instrument(async {
			let mut first_attempt = true;

			while let Admission::Delay(wait) = self.poll(first_attempt) {
				first_attempt = false;

				tokio::time::sleep(wait).await;
			}
		})
		.await
	}

	/// Like [`acquire`](Self::acquire), but gives up with [`Error::Cancelled`] when `cancel`
	/// fires before a token is obtained.
	pub async fn acquire_cancellable(&self, cancel: &CancelSignal) -> Result<()> {
		let span = GateSpan::new("acquire_cancellable");

		span.instrument(async {
			let mut first_attempt = true;

			loop {
				if cancel.is_cancelled() {
					return Err(self.cancelled());
				}

				let Admission::Delay(wait) = self.poll(first_attempt) else {
					return Ok(());
				};

				first_attempt = false;

				tokio::select! {
					biased;
					_ = cancel.cancelled() => return Err(self.cancelled()),
					_ = tokio::time::sleep(wait) => {},
				}
			}
		})
		.await
	}

	/// Blocking variant of [`acquire`](Self::acquire) for plain OS threads.
	///
	/// Parks the current thread; never call this from inside an async runtime.
	pub fn acquire_blocking(&self) {
		let _guard = GateSpan::new("acquire_blocking").entered();
		let mut first_attempt = true;

		while let Admission::Delay(wait) = self.poll(first_attempt) {
			first_attempt = false;

			std::thread::sleep(wait);
		}
	}

	fn cancelled(&self) -> Error {
		self.metrics.record_cancelled();
		obs::record_admission(AdmissionOutcome::Cancelled);

		Error::Cancelled
	}
}

/// Snapshot returned by [`AdmissionGate::stats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GateStats {
	/// Maximum admissions per window.
	pub capacity: u32,
	/// Tokens left at snapshot time.
	pub available: u32,
	/// Admissions granted so far.
	pub admitted: u64,
	/// Requests that found the window exhausted, counted once per call.
	pub delayed: u64,
	/// Waits abandoned through cancellation.
	pub cancelled: u64,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn rejects_non_positive_parameters() {
		assert!(matches!(
			AdmissionGate::new(Duration::from_secs(1), 0),
			Err(ConfigError::InvalidCapacity)
		));
		assert!(matches!(AdmissionGate::new(Duration::ZERO, 3), Err(ConfigError::InvalidWindow)));
		assert!(matches!(
			AdmissionGate::from_config(&GateConfig::new(3, RateWindow::new(TimeUnit::Seconds, 0))),
			Err(ConfigError::InvalidWindow)
		));
	}

	#[tokio::test(start_paused = true)]
	async fn try_acquire_reports_remaining_then_delay() {
		let gate = AdmissionGate::per(TimeUnit::Seconds, 2).expect("Gate should build.");

		assert_eq!(gate.try_acquire(), Admission::Admitted { remaining: 1 });
		assert_eq!(gate.try_acquire(), Admission::Admitted { remaining: 0 });

		tokio::time::advance(Duration::from_millis(400)).await;

		assert_eq!(gate.try_acquire(), Admission::Delay(Duration::from_millis(600)));
		assert_eq!(
			gate.stats(),
			GateStats { capacity: 2, available: 0, admitted: 2, delayed: 1, cancelled: 0 }
		);
	}

	#[tokio::test(start_paused = true)]
	async fn already_cancelled_signal_consumes_nothing() {
		let gate = AdmissionGate::per(TimeUnit::Seconds, 1).expect("Gate should build.");
		let cancel = CancelSignal::new();

		cancel.cancel();

		let err = gate
			.acquire_cancellable(&cancel)
			.await
			.expect_err("A fired signal should cancel before admission.");

		assert!(matches!(err, Error::Cancelled));
		assert_eq!(gate.available(), 1);
		assert_eq!(gate.metrics().cancelled(), 1);
	}

	#[test]
	fn blocking_acquire_drains_without_waiting() {
		let gate = AdmissionGate::new(Duration::from_secs(60), 3).expect("Gate should build.");
		let started = std::time::Instant::now();

		for _ in 0..3 {
			gate.acquire_blocking();
		}

		assert!(started.elapsed() < Duration::from_secs(1));
		assert_eq!(gate.available(), 0);
	}
}
