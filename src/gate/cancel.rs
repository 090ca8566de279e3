//! Cooperative cancellation for callers parked in
//! [`AdmissionGate::acquire_cancellable`](crate::gate::AdmissionGate::acquire_cancellable).

// std
use std::sync::atomic::{AtomicBool, Ordering};
// crates.io
use tokio::sync::Notify;
// self
use crate::_prelude::*;

/// Cloneable signal that wakes every waiter observing it.
///
/// Once fired the signal stays fired; waiters that start observing afterwards return
/// immediately.
#[derive(Clone, Debug, Default)]
pub struct CancelSignal(Arc<CancelState>);
impl CancelSignal {
	/// Creates an unfired signal.
	pub fn new() -> Self {
		Self::default()
	}

	/// Fires the signal and wakes all current waiters.
	pub fn cancel(&self) {
		self.0.fired.store(true, Ordering::Release);
		self.0.notify.notify_waiters();
	}

	/// Reports whether [`cancel`](Self::cancel) has been called.
	pub fn is_cancelled(&self) -> bool {
		self.0.fired.load(Ordering::Acquire)
	}

	/// Resolves once the signal fires.
	pub async fn cancelled(&self) {
		let notified = self.0.notify.notified();

		tokio::pin!(notified);

		// Register before checking the flag so a concurrent `cancel` cannot slip between.
		notified.as_mut().enable();

		if self.is_cancelled() {
			return;
		}

		notified.await;
	}
}

#[derive(Debug, Default)]
struct CancelState {
	fired: AtomicBool,
	notify: Notify,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn fired_signal_resolves_immediately() {
		let signal = CancelSignal::new();

		signal.cancel();
		signal.cancelled().await;

		assert!(signal.is_cancelled());
	}

	#[tokio::test]
	async fn clones_observe_the_same_signal() {
		let signal = CancelSignal::new();
		let observer = signal.clone();
		let waiter = tokio::spawn(async move { observer.cancelled().await });

		tokio::task::yield_now().await;
		signal.cancel();
		waiter.await.expect("Waiter task should not panic.");
	}
}
