//! Optional observability helpers for the gate and the document client.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `crpt_gate.gate` (field `stage`) and
//!   `crpt_gate.request` (field `operation`), plus debug events for delays and refills.
//! - Enable `metrics` to increment `crpt_gate_admission_total` (label `outcome`) for every
//!   admission attempt and `crpt_gate_request_total` (labels `operation` + `outcome`) for
//!   every API call.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each admission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdmissionOutcome {
	/// A token was consumed.
	Admitted,
	/// The window was exhausted and the caller had to wait.
	Delayed,
	/// The caller gave up while waiting.
	Cancelled,
}
impl AdmissionOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AdmissionOutcome::Admitted => "admitted",
			AdmissionOutcome::Delayed => "delayed",
			AdmissionOutcome::Cancelled => "cancelled",
		}
	}
}
impl Display for AdmissionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
