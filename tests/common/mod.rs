#![allow(dead_code)]

// std
use std::{sync::Arc, time::Duration};
// self
use crpt_gate::{
	client::ReqwestDocumentClient,
	document::{Description, Document, Product},
	gate::AdmissionGate,
	http::{ApiToken, ReqwestTransport},
	reqwest::Client,
};

/// Bearer token used by reqwest-backed integration tests.
pub const TEST_TOKEN: &str = "test-bearer-token";

/// Builds a reqwest transport with a short timeout so failing tests do not hang.
pub fn test_reqwest_transport() -> ReqwestTransport {
	let client = Client::builder()
		.timeout(Duration::from_secs(5))
		.build()
		.expect("Failed to build Reqwest client for tests.");

	ReqwestTransport::with_client(client)
}

/// Builds a reqwest-backed client that shares `gate` and posts to `endpoint`.
pub fn build_reqwest_test_client(
	endpoint: &str,
	gate: Arc<AdmissionGate>,
) -> ReqwestDocumentClient {
	let token = ApiToken::new(TEST_TOKEN);

	ReqwestDocumentClient::with_transport(gate, token, test_reqwest_transport())
		.and_then(|client| client.with_endpoint_str(endpoint))
		.expect("Test client configuration should be valid.")
}

/// Builds a gate or fails the test.
pub fn gate(window: Duration, capacity: u32) -> Arc<AdmissionGate> {
	Arc::new(AdmissionGate::new(window, capacity).expect("Test gate configuration should be valid."))
}

/// Returns a small but fully populated document.
pub fn sample_document() -> Document {
	Document::new()
		.with_description(Description::new("7700000000"))
		.with_doc_id("doc-0001")
		.with_doc_status("DRAFT")
		.with_doc_type("LP_INTRODUCE_GOODS")
		.with_import_request(false)
		.with_owner_inn("7700000000")
		.with_participant_inn("7700000000")
		.with_producer_inn("7800000000")
		.with_production_date("2024-01-23")
		.with_production_type("OWN_PRODUCTION")
		.with_product(
			Product::new()
				.with_tnved_code("6401100000")
				.with_uit_code("010460406000600021N4N57RSCBUZTQ")
				.with_production_date("2024-01-23"),
		)
		.with_reg_date("2024-01-24")
		.with_reg_number("REG-42")
}

/// Asserts `actual` landed at `expected` or at most a few milliseconds after it.
pub fn assert_near(actual: Duration, expected: Duration) {
	assert!(
		actual >= expected && actual <= expected + Duration::from_millis(5),
		"Expected an instant near {expected:?}, got {actual:?}."
	);
}

/// Applies [`assert_near`] pairwise to a sorted admission timeline.
pub fn assert_timeline(actual: &[Duration], expected_ms: &[u64]) {
	assert_eq!(actual.len(), expected_ms.len(), "Timeline length mismatch: {actual:?}.");

	for (at, ms) in actual.iter().zip(expected_ms) {
		assert_near(*at, Duration::from_millis(*ms));
	}
}
