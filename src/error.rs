//! Crate-level error types shared by the gate, transport, and document client.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Temporary upstream failure; retry with backoff.
	#[error(transparent)]
	Transient(#[from] TransientError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The caller stopped waiting for admission; no token was consumed.
	#[error("Admission wait was cancelled.")]
	Cancelled,
	/// The API refused the bearer token.
	#[error("API rejected the bearer token: {body}.")]
	Unauthorized {
		/// Raw response body returned by the API.
		body: String,
	},
	/// The API answered with a non-success status that retrying will not fix.
	#[error("API request failed with status {status}: {body}.")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// Raw response body returned by the API.
		body: String,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Gate capacity must admit at least one operation per window.
	#[error("Gate capacity must be positive.")]
	InvalidCapacity,
	/// Gate window must be longer than zero.
	#[error("Gate window must be positive.")]
	InvalidWindow,
	/// Gate configuration document could not be decoded.
	#[error("Gate configuration is invalid.")]
	InvalidGateConfig {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// API endpoint cannot be parsed.
	#[error("API endpoint is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Document payload could not be encoded as JSON.
	#[error("Document payload could not be encoded.")]
	Encode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<serde_json::Error> for ConfigError {
	fn from(e: serde_json::Error) -> Self {
		Self::Encode { source: e }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Temporary failure variants (safe to retry).
#[derive(Debug, ThisError)]
pub enum TransientError {
	/// API throttled the request or failed on its side.
	#[error("API returned a retryable response: {message}.")]
	Api {
		/// Summary of the failure, usually the response body.
		message: String,
		/// HTTP status code.
		status: u16,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// The request timed out before the API answered.
	#[error("Request timed out while calling the API.")]
	Timeout,
}
impl TransientError {
	/// Returns the upstream retry hint, when one was supplied.
	pub fn retry_after(&self) -> Option<Duration> {
		match self {
			Self::Api { retry_after, .. } => *retry_after,
			Self::Timeout => None,
		}
	}
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
