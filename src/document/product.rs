//! Product line items carried by a document.

// self
use crate::_prelude::*;

/// Single product entry inside a [`Document`](crate::document::Document).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	/// Certificate document kind.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub certificate_document: Option<String>,
	/// Certificate issue date.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub certificate_document_date: Option<String>,
	/// Certificate number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub certificate_document_number: Option<String>,
	/// Owner taxpayer number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner_inn: Option<String>,
	/// Producer taxpayer number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub producer_inn: Option<String>,
	/// Production date.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub production_date: Option<String>,
	/// Commodity (TN VED) code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tnved_code: Option<String>,
	/// Unit identification code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uit_code: Option<String>,
	/// Package identification code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uitu_code: Option<String>,
}
impl Product {
	/// Creates an empty product.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the certificate document kind.
	pub fn with_certificate_document(mut self, value: impl Into<String>) -> Self {
		self.certificate_document = Some(value.into());

		self
	}

	/// Sets the certificate issue date.
	pub fn with_certificate_document_date(mut self, value: impl Into<String>) -> Self {
		self.certificate_document_date = Some(value.into());

		self
	}

	/// Sets the certificate number.
	pub fn with_certificate_document_number(mut self, value: impl Into<String>) -> Self {
		self.certificate_document_number = Some(value.into());

		self
	}

	/// Sets the owner taxpayer number.
	pub fn with_owner_inn(mut self, value: impl Into<String>) -> Self {
		self.owner_inn = Some(value.into());

		self
	}

	/// Sets the producer taxpayer number.
	pub fn with_producer_inn(mut self, value: impl Into<String>) -> Self {
		self.producer_inn = Some(value.into());

		self
	}

	/// Sets the production date.
	pub fn with_production_date(mut self, value: impl Into<String>) -> Self {
		self.production_date = Some(value.into());

		self
	}

	/// Sets the commodity code.
	pub fn with_tnved_code(mut self, value: impl Into<String>) -> Self {
		self.tnved_code = Some(value.into());

		self
	}

	/// Sets the unit identification code.
	pub fn with_uit_code(mut self, value: impl Into<String>) -> Self {
		self.uit_code = Some(value.into());

		self
	}

	/// Sets the package identification code.
	pub fn with_uitu_code(mut self, value: impl Into<String>) -> Self {
		self.uitu_code = Some(value.into());

		self
	}
}
