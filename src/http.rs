//! Transport primitives for document submissions.
//!
//! [`ApiTransport`] is the crate's only dependency on an HTTP stack. The default
//! [`ReqwestTransport`] posts JSON with a bearer token and reports the status, body, and
//! `Retry-After` hint so the client can classify failures.

// crates.io
#[cfg(feature = "reqwest")]
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use time::{OffsetDateTime, format_description::well_known::Rfc2822};
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")]
use crate::error::{ConfigError, TransientError, TransportError};

/// Boxed future returned by [`ApiTransport::post_json`].
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// HTTP seam used by [`DocumentClient`](crate::client::DocumentClient).
///
/// Implementations must not interpret the status code; classification happens in the
/// client so every transport maps failures the same way.
pub trait ApiTransport
where
	Self: 'static + Send + Sync,
{
	/// Posts `body` as `application/json` to `url` with `Authorization: Bearer <token>`.
	fn post_json<'a>(
		&'a self,
		url: &'a Url,
		token: &'a ApiToken,
		body: String,
	) -> TransportFuture<'a, ApiResponse>;
}

/// Raw response captured by a transport.
///
/// Additional fields may be added in future releases, so downstream code should construct
/// values using field names instead of struct update syntax.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body as text.
	pub body: String,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}

/// Bearer token sent with every submission; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);
impl ApiToken {
	/// Wraps a token issued for the API.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw token text. Keep it out of logs.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// `Authorization` header value for this token.
	pub fn bearer_header(&self) -> String {
		format!("Bearer {}", self.0)
	}
}
impl Debug for ApiToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ApiToken(<redacted>)")
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Connect and request timeout applied by [`ReqwestTransport::new`].
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

	/// Builds a client with [`Self::DEFAULT_TIMEOUT`] for both connecting and the whole
	/// request.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.connect_timeout(Self::DEFAULT_TIMEOUT)
			.timeout(Self::DEFAULT_TIMEOUT)
			.build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiTransport for ReqwestTransport {
	fn post_json<'a>(
		&'a self,
		url: &'a Url,
		token: &'a ApiToken,
		body: String,
	) -> TransportFuture<'a, ApiResponse> {
		Box::pin(async move {
			let response = self
				.0
				.post(url.clone())
				.header(CONTENT_TYPE, "application/json")
				.header(AUTHORIZATION, token.bearer_header())
				.body(body)
				.send()
				.await
				.map_err(map_reqwest_error)?;
			let status = response.status().as_u16();
			let retry_after = response
				.headers()
				.get(RETRY_AFTER)
				.and_then(|value| value.to_str().ok())
				.and_then(parse_retry_after);
			let body = response.text().await.map_err(map_reqwest_error)?;

			Ok(ApiResponse { status, body, retry_after })
		})
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}
	if err.is_timeout() {
		return TransientError::Timeout.into();
	}

	TransportError::network(err).into()
}

/// Parses a `Retry-After` value given as delta-seconds or an RFC 2822 date.
///
/// Dates in the past yield `None`.
pub fn parse_retry_after(raw: &str) -> Option<Duration> {
	let raw = raw.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::from_secs(secs));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Duration::try_from(delta).ok();
		}
	}

	None
}
