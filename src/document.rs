//! Document model submitted to the `lk/documents/create` endpoint.
//!
//! Field names follow the API's camelCase wire format. Every field is optional and absent
//! fields are omitted from the JSON instead of being sent as `null`.

pub mod product;
pub mod request;

pub use product::Product;
pub use request::*;

// self
use crate::_prelude::*;

/// Goods-introduction document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
	/// Participant description block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<Description>,
	/// Document identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc_id: Option<String>,
	/// Document status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc_status: Option<String>,
	/// Document type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc_type: Option<String>,
	/// Whether the goods are imported.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub import_request: Option<bool>,
	/// Owner taxpayer number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner_inn: Option<String>,
	/// Participant taxpayer number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub participant_inn: Option<String>,
	/// Producer taxpayer number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub producer_inn: Option<String>,
	/// Production date.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub production_date: Option<String>,
	/// Production type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub production_type: Option<String>,
	/// Products listed by the document.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub products: Option<Vec<Product>>,
	/// Registration date.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reg_date: Option<String>,
	/// Registration number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reg_number: Option<String>,
}
impl Document {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the description block.
	pub fn with_description(mut self, description: Description) -> Self {
		self.description = Some(description);

		self
	}

	/// Sets the document identifier.
	pub fn with_doc_id(mut self, value: impl Into<String>) -> Self {
		self.doc_id = Some(value.into());

		self
	}

	/// Sets the document status.
	pub fn with_doc_status(mut self, value: impl Into<String>) -> Self {
		self.doc_status = Some(value.into());

		self
	}

	/// Sets the document type.
	pub fn with_doc_type(mut self, value: impl Into<String>) -> Self {
		self.doc_type = Some(value.into());

		self
	}

	/// Sets the import flag.
	pub fn with_import_request(mut self, value: bool) -> Self {
		self.import_request = Some(value);

		self
	}

	/// Sets the owner taxpayer number.
	pub fn with_owner_inn(mut self, value: impl Into<String>) -> Self {
		self.owner_inn = Some(value.into());

		self
	}

	/// Sets the participant taxpayer number.
	pub fn with_participant_inn(mut self, value: impl Into<String>) -> Self {
		self.participant_inn = Some(value.into());

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

	/// Sets the production type.
	pub fn with_production_type(mut self, value: impl Into<String>) -> Self {
		self.production_type = Some(value.into());

		self
	}

	/// Appends a product.
	pub fn with_product(mut self, product: Product) -> Self {
		self.products.get_or_insert_with(Vec::new).push(product);

		self
	}

	/// Sets the registration date.
	pub fn with_reg_date(mut self, value: impl Into<String>) -> Self {
		self.reg_date = Some(value.into());

		self
	}

	/// Sets the registration number.
	pub fn with_reg_number(mut self, value: impl Into<String>) -> Self {
		self.reg_number = Some(value.into());

		self
	}

	/// Serializes the document to its JSON wire form.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}
}

/// Participant description attached to a [`Document`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
	/// Participant taxpayer number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub participant_inn: Option<String>,
}
impl Description {
	/// Creates a description for the given participant.
	pub fn new(participant_inn: impl Into<String>) -> Self {
		Self { participant_inn: Some(participant_inn.into()) }
	}
}
