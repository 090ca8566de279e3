//! Create-document request envelope.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, document::Document, error::ConfigError};

/// Format label for documents whose body is the JSON-encoded [`Document`].
pub const MANUAL_FORMAT: &str = "MANUAL";
/// Document type for introducing goods into circulation.
pub const INTRODUCE_GOODS_TYPE: &str = "LP_INTRODUCE_GOODS";

/// Body posted to the create-document endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
	/// Format of `product_document`.
	pub document_format: String,
	/// Base64 (standard alphabet, padded) of the document JSON.
	pub product_document: String,
	/// Document type label.
	#[serde(rename = "type")]
	pub kind: String,
	/// Detached signature supplied by the caller.
	pub signature: String,
}
impl CreateDocumentRequest {
	/// Encodes `document` as a manual goods-introduction request.
	pub fn new(document: &Document, signature: impl Into<String>) -> Result<Self, ConfigError> {
		let json = document.to_json()?;

		Ok(Self {
			document_format: MANUAL_FORMAT.into(),
			product_document: STANDARD.encode(json.as_bytes()),
			kind: INTRODUCE_GOODS_TYPE.into(),
			signature: signature.into(),
		})
	}

	/// Decodes `product_document` back into a [`Document`].
	pub fn decode_document(&self) -> Option<Document> {
		let raw = STANDARD.decode(&self.product_document).ok()?;

		serde_json::from_slice(&raw).ok()
	}

	/// Serializes the envelope to its JSON wire form.
	pub fn to_json(&self) -> Result<String, ConfigError> {
		serde_json::to_string(self).map_err(ConfigError::from)
	}
}
