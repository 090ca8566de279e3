mod common;

// std
use std::time::{Duration, Instant};
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use crpt_gate::{
	document::CreateDocumentRequest,
	error::{Error, TransientError, TransportError},
	gate::CancelSignal,
};

const SIGNATURE: &str = "detached-signature";

#[tokio::test]
async fn create_document_posts_signed_envelope_with_bearer() {
	let server = MockServer::start_async().await;
	let document = common::sample_document();
	let expected = CreateDocumentRequest::new(&document, SIGNATURE)
		.expect("Sample document should encode.");
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v3/lk/documents/create")
				.header("authorization", format!("Bearer {}", common::TEST_TOKEN))
				.header("content-type", "application/json")
				.json_body(json!({
					"documentFormat": "MANUAL",
					"productDocument": expected.product_document.clone(),
					"type": "LP_INTRODUCE_GOODS",
					"signature": SIGNATURE,
				}));
			then.status(200).body("{\"value\":\"accepted\"}");
		})
		.await;
	let client = common::build_reqwest_test_client(
		&server.url("/api/v3/lk/documents/create"),
		common::gate(Duration::from_secs(1), 5),
	);

	client
		.create_document(&document, SIGNATURE)
		.await
		.expect("Accepted documents should succeed.");

	mock.assert_async().await;
	assert_eq!(client.gate.metrics().admitted(), 1);
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/create");
			then.status(401).body("token expired");
		})
		.await;
	let client = common::build_reqwest_test_client(
		&server.url("/create"),
		common::gate(Duration::from_secs(1), 5),
	);
	let err = client
		.create_document(&common::sample_document(), SIGNATURE)
		.await
		.expect_err("401 responses should surface as errors.");

	assert!(matches!(err, Error::Unauthorized { ref body } if body == "token expired"));

	mock.assert_async().await;
}

#[tokio::test]
async fn throttled_status_carries_retry_after() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/create");
			then.status(429).header("retry-after", "7").body("too many requests");
		})
		.await;
	let client = common::build_reqwest_test_client(
		&server.url("/create"),
		common::gate(Duration::from_secs(1), 5),
	);
	let err = client
		.create_document(&common::sample_document(), SIGNATURE)
		.await
		.expect_err("429 responses should surface as errors.");

	match err {
		Error::Transient(TransientError::Api { status, retry_after, message }) => {
			assert_eq!(status, 429);
			assert_eq!(retry_after, Some(Duration::from_secs(7)));
			assert_eq!(message, "too many requests");
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn client_errors_are_rejected_with_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/create");
			then.status(400).body("signature mismatch");
		})
		.await;
	let client = common::build_reqwest_test_client(
		&server.url("/create"),
		common::gate(Duration::from_secs(1), 5),
	);
	let err = client
		.create_document(&common::sample_document(), SIGNATURE)
		.await
		.expect_err("400 responses should surface as errors.");

	assert!(matches!(
		err,
		Error::Rejected { status: 400, ref body } if body == "signature mismatch"
	));

	mock.assert_async().await;
}

#[tokio::test]
async fn gate_paces_consecutive_submissions() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/create");
			then.status(200);
		})
		.await;
	let window = Duration::from_millis(300);
	let start = Instant::now();
	let client =
		common::build_reqwest_test_client(&server.url("/create"), common::gate(window, 2));
	let document = common::sample_document();

	for _ in 0..3 {
		client
			.create_document(&document, SIGNATURE)
			.await
			.expect("Paced submissions should succeed.");
	}

	assert!(start.elapsed() >= window, "The third submission must wait for the next window.");

	mock.assert_calls_async(3).await;
}

#[tokio::test]
async fn clients_sharing_a_gate_share_its_limit() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/create");
			then.status(200);
		})
		.await;
	let gate = common::gate(Duration::from_secs(30), 1);
	let first = common::build_reqwest_test_client(&server.url("/create"), gate.clone());
	let second = common::build_reqwest_test_client(&server.url("/create"), gate.clone());
	let document = common::sample_document();
	let cancel = CancelSignal::new();

	first.create_document(&document, SIGNATURE).await.expect("First submission should succeed.");

	let canceller = {
		let cancel = cancel.clone();

		tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(100)).await;
			cancel.cancel();
		})
	};
	let err = second
		.create_document_cancellable(&document, SIGNATURE, &cancel)
		.await
		.expect_err("The shared window is exhausted, so the wait should be cancelled.");

	canceller.await.expect("Canceller task should not panic.");

	assert!(matches!(err, Error::Cancelled));
	assert_eq!(gate.available(), 0);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
	let port = {
		let listener = std::net::TcpListener::bind("127.0.0.1:0")
			.expect("Binding an ephemeral port should succeed.");

		listener.local_addr().expect("Listener should expose its address.").port()
	};
	let client = common::build_reqwest_test_client(
		&format!("http://127.0.0.1:{port}/create"),
		common::gate(Duration::from_secs(1), 1),
	);
	let err = client
		.create_document(&common::sample_document(), SIGNATURE)
		.await
		.expect_err("Nothing listens on the released port.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert_eq!(client.gate.metrics().admitted(), 1);
}
