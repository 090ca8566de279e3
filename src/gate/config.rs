//! Declarative gate configuration (`capacity` admissions per `window`).

// self
use crate::{_prelude::*, error::ConfigError};

/// Unit used to express the length of an admission window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
	/// One nanosecond.
	Nanoseconds,
	/// One microsecond.
	Microseconds,
	/// One millisecond.
	Milliseconds,
	/// One second.
	Seconds,
	/// One minute.
	Minutes,
	/// One hour.
	Hours,
	/// One day.
	Days,
}
impl TimeUnit {
	/// Returns the length of a single unit.
	pub const fn as_duration(self) -> Duration {
		match self {
			TimeUnit::Nanoseconds => Duration::from_nanos(1),
			TimeUnit::Microseconds => Duration::from_micros(1),
			TimeUnit::Milliseconds => Duration::from_millis(1),
			TimeUnit::Seconds => Duration::from_secs(1),
			TimeUnit::Minutes => Duration::from_secs(60),
			TimeUnit::Hours => Duration::from_secs(60 * 60),
			TimeUnit::Days => Duration::from_secs(24 * 60 * 60),
		}
	}

	/// Returns a stable label suitable for config files and log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TimeUnit::Nanoseconds => "nanoseconds",
			TimeUnit::Microseconds => "microseconds",
			TimeUnit::Milliseconds => "milliseconds",
			TimeUnit::Seconds => "seconds",
			TimeUnit::Minutes => "minutes",
			TimeUnit::Hours => "hours",
			TimeUnit::Days => "days",
		}
	}
}
impl Display for TimeUnit {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Window length expressed as `count` units, e.g. "1 per second".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateWindow {
	/// Unit of the window.
	pub unit: TimeUnit,
	/// Number of units per window.
	#[serde(default = "RateWindow::default_count")]
	pub count: u32,
}
impl RateWindow {
	/// A window of exactly one `unit`.
	pub const fn per(unit: TimeUnit) -> Self {
		Self { unit, count: 1 }
	}

	/// A window of `count` units.
	pub const fn new(unit: TimeUnit, count: u32) -> Self {
		Self { unit, count }
	}

	/// Total window length; saturates instead of overflowing.
	pub fn duration(&self) -> Duration {
		self.unit.as_duration().saturating_mul(self.count)
	}

	const fn default_count() -> u32 {
		1
	}
}
impl Display for RateWindow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} {}", self.count, self.unit)
	}
}

/// Serializable construction parameters for an [`AdmissionGate`](crate::gate::AdmissionGate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
	/// Maximum admissions per window.
	pub capacity: u32,
	/// Window after which the capacity is restored in full.
	pub window: RateWindow,
}
impl GateConfig {
	/// Creates a config admitting `capacity` operations per `window`.
	pub const fn new(capacity: u32, window: RateWindow) -> Self {
		Self { capacity, window }
	}

	/// Decodes a JSON document, reporting the offending path on failure.
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let config: Self = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::InvalidGateConfig { source })?;

		config.validate()?;

		Ok(config)
	}

	/// Checks both parameters are positive.
	pub fn validate(&self) -> Result<(), ConfigError> {
		validate(self.capacity, self.window.duration())
	}
}

pub(crate) fn validate(capacity: u32, window: Duration) -> Result<(), ConfigError> {
	if capacity == 0 {
		return Err(ConfigError::InvalidCapacity);
	}
	if window.is_zero() {
		return Err(ConfigError::InvalidWindow);
	}

	Ok(())
}
