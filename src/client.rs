//! Rate-limited client for the document-creation endpoint.
//!
//! Every submission encodes the document, waits for admission on the shared
//! [`AdmissionGate`], posts the envelope, and classifies the response. The gate is injected
//! as an `Arc` so several clients (or unrelated components) can draw from one limit.

// self
use crate::{
	_prelude::*,
	document::{CreateDocumentRequest, Document},
	error::{ConfigError, TransientError},
	gate::{AdmissionGate, CancelSignal},
	http::{ApiResponse, ApiToken, ApiTransport},
	obs::{self, GateSpan, RequestOutcome},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// Production endpoint used unless [`DocumentClient::with_endpoint`] overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

const CREATE_DOCUMENT: &str = "create_document";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestDocumentClient = DocumentClient<ReqwestTransport>;

/// Submits documents through an [`AdmissionGate`].
pub struct DocumentClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Gate consulted before every outbound request.
	pub gate: Arc<AdmissionGate>,
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Create-document endpoint.
	pub endpoint: Url,
	token: ApiToken,
}
impl<T> DocumentClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(
		gate: Arc<AdmissionGate>,
		token: ApiToken,
		transport: impl Into<Arc<T>>,
	) -> Result<Self, ConfigError> {
		let endpoint =
			Url::parse(DEFAULT_ENDPOINT).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		Ok(Self { gate, transport: transport.into(), endpoint, token })
	}

	/// Replaces the create-document endpoint.
	pub fn with_endpoint(mut self, endpoint: Url) -> Self {
		self.endpoint = endpoint;

		self
	}

	/// Parses and replaces the create-document endpoint.
	pub fn with_endpoint_str(self, endpoint: &str) -> Result<Self, ConfigError> {
		let endpoint =
			Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		Ok(self.with_endpoint(endpoint))
	}

	/// Waits for admission, then submits `document` signed with `signature`.
	pub async fn create_document(&self, document: &Document, signature: &str) -> Result<()> {
		self.instrumented(async {
			let body = CreateDocumentRequest::new(document, signature)?.to_json()?;

			self.gate.acquire().await;

			self.send(body).await
		})
		.await
	}

	/// Like [`create_document`](Self::create_document), but abandons the admission wait with
	/// [`Error::Cancelled`] when `cancel` fires. Nothing is sent in that case.
	pub async fn create_document_cancellable(
		&self,
		document: &Document,
		signature: &str,
		cancel: &CancelSignal,
	) -> Result<()> {
		self.instrumented(async {
			let body = CreateDocumentRequest::new(document, signature)?.to_json()?;

			self.gate.acquire_cancellable(cancel).await?;

			self.send(body).await
		})
		.await
	}

	async fn send(&self, body: String) -> Result<()> {
		let response = self.transport.post_json(&self.endpoint, &self.token, body).await?;

		classify_response(response)
	}

	async fn instrumented<Fut>(&self, fut: Fut) -> Result<()>
	where
		Fut: Future<Output = Result<()>>,
	{
		obs::record_request(CREATE_DOCUMENT, RequestOutcome::Attempt);

		let result = GateSpan::request(CREATE_DOCUMENT).instrument(fut).await;

		match &result {
			Ok(_) => obs::record_request(CREATE_DOCUMENT, RequestOutcome::Success),
			Err(_) => obs::record_request(CREATE_DOCUMENT, RequestOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl DocumentClient<ReqwestTransport> {
	/// Creates a client with its own reqwest transport (30 second timeouts).
	pub fn new(gate: Arc<AdmissionGate>, token: ApiToken) -> Result<Self, ConfigError> {
		Self::with_transport(gate, token, ReqwestTransport::new()?)
	}
}
impl<T> Clone for DocumentClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn clone(&self) -> Self {
		Self {
			gate: self.gate.clone(),
			transport: self.transport.clone(),
			endpoint: self.endpoint.clone(),
			token: self.token.clone(),
		}
	}
}
impl<T> Debug for DocumentClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DocumentClient")
			.field("endpoint", &self.endpoint.as_str())
			.field("gate", &self.gate)
			.field("token", &self.token)
			.finish()
	}
}

/// Maps a raw API response onto the crate's error taxonomy.
///
/// Only `200 OK` counts as success.
pub fn classify_response(response: ApiResponse) -> Result<()> {
	let ApiResponse { status, body, retry_after } = response;

	match status {
		200 => Ok(()),
		401 | 403 => Err(Error::Unauthorized { body }),
		429 | 500..=599 => Err(TransientError::Api { message: body, status, retry_after }.into()),
		_ => Err(Error::Rejected { status, body }),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: u16) -> ApiResponse {
		ApiResponse { status, body: format!("status-{status}"), retry_after: None }
	}

	#[test]
	fn only_ok_is_success() {
		assert!(classify_response(response(200)).is_ok());
		assert!(matches!(
			classify_response(response(201)),
			Err(Error::Rejected { status: 201, .. })
		));
	}

	#[test]
	fn auth_and_throttle_statuses_are_classified() {
		assert!(matches!(classify_response(response(401)), Err(Error::Unauthorized { .. })));
		assert!(matches!(classify_response(response(403)), Err(Error::Unauthorized { .. })));

		let throttled = ApiResponse {
			status: 429,
			body: "slow down".into(),
			retry_after: Some(Duration::from_secs(2)),
		};

		match classify_response(throttled) {
			Err(Error::Transient(TransientError::Api { status, retry_after, .. })) => {
				assert_eq!(status, 429);
				assert_eq!(retry_after, Some(Duration::from_secs(2)));
			},
			other => panic!("Unexpected classification: {other:?}."),
		}

		assert!(matches!(
			classify_response(response(503)),
			Err(Error::Transient(TransientError::Api { status: 503, .. }))
		));
		assert!(matches!(
			classify_response(response(422)),
			Err(Error::Rejected { status: 422, .. })
		));
	}
}
