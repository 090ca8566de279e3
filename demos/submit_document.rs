//! Submits a few documents to a mock create-document endpoint through a shared admission gate
//! using the default reqwest transport.

// std
use std::{sync::Arc, time::Instant};
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use crpt_gate::{
	client::ReqwestDocumentClient,
	document::{Description, Document, Product},
	gate::{AdmissionGate, TimeUnit},
	http::ApiToken,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v3/lk/documents/create");
			then.status(200).header("content-type", "application/json").body("{\"value\":\"ok\"}");
		})
		.await;
	let gate = Arc::new(AdmissionGate::per(TimeUnit::Seconds, 2)?);
	let client = ReqwestDocumentClient::new(gate.clone(), ApiToken::new("demo-token"))?
		.with_endpoint_str(&server.url("/api/v3/lk/documents/create"))?;
	let document = Document::new()
		.with_description(Description::new("7700000000"))
		.with_doc_type("LP_INTRODUCE_GOODS")
		.with_participant_inn("7700000000")
		.with_production_date("2024-01-23")
		.with_product(Product::new().with_tnved_code("6401100000").with_uit_code("demo-uit"));
	let start = Instant::now();

	for index in 0..5 {
		client.create_document(&document, &format!("demo-signature-{index}")).await?;

		println!("Document {index} accepted after {:?}.", start.elapsed());
	}

	println!("Gate stats: {}.", serde_json::to_string(&gate.stats())?);

	create_mock.assert_calls_async(5).await;

	Ok(())
}
