//! Invocation pipeline tests: request shape, status classification,
//! transport failures and cancellation.

#![allow(clippy::unwrap_used)]

mod common;

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use nursys::{Context, Endpoint, NursysError};
use serde::Deserialize;
use serde_json::json;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, body_json, header, method, path},
};

use common::{CannedReply, CountingTransport, FailingTransport, PASSWORD, USERNAME};

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct TestResponse {
    operation_id: String,
}

const OPERATION_REPLY: &str = r#"{
    "ok": true,
    "operation_id": "df6a6b50",
    "push_ids": ["9d78a53b"],
    "message_ids": [],
    "content_urls": []
}"#;

#[tokio::test]
async fn sends_json_body_with_credential_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/endpoint"))
        .and(header("content-type", "application/json"))
        .and(header("username", USERNAME))
        .and(header("password", PASSWORD))
        .and(body_json(json!({ "message": "Hello World" })))
        .respond_with(ResponseTemplate::new(200).set_body_string(OPERATION_REPLY))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server.uri());
    let body = HashMap::from([("message", "Hello World")]);

    let result: TestResponse = client
        .invoke(&Context::background(), &Endpoint::post("/endpoint"), Some(&body))
        .await
        .unwrap();

    assert_eq!(
        result,
        TestResponse {
            operation_id: "df6a6b50".to_string()
        }
    );
}

#[tokio::test]
async fn accepted_status_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202).set_body_string(OPERATION_REPLY))
        .mount(&server)
        .await;

    let result: TestResponse = common::client(&server.uri())
        .invoke(&Context::background(), &Endpoint::post("/endpoint"), Some(&json!({})))
        .await
        .unwrap();

    assert_eq!(result.operation_id, "df6a6b50");
}

#[tokio::test]
async fn get_without_request_value_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nurselookup"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OPERATION_REPLY))
        .expect(1)
        .mount(&server)
        .await;

    let _: TestResponse = common::client(&server.uri())
        .invoke(&Context::background(), &Endpoint::get("/nurselookup"), None::<&()>)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn error_status_is_remote_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"error": "Forbidden"}"#))
        .mount(&server)
        .await;

    let err = common::client(&server.uri())
        .invoke::<_, TestResponse>(
            &Context::background(),
            &Endpoint::post("/endpoint"),
            Some(&json!({ "message": "Hello World" })),
        )
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert_eq!(err.remote_status().map(|s| s.as_u16()), Some(403));
    assert_eq!(err.remote_body(), Some(r#"{"error": "Forbidden"}"#));
}

#[tokio::test]
async fn other_success_codes_are_still_rejections() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = common::client(&server.uri())
        .invoke_discarding(&Context::background(), &Endpoint::post("/endpoint"), Some(&json!({})))
        .await
        .unwrap_err();

    assert_eq!(err.remote_status().map(|s| s.as_u16()), Some(204));
    assert_eq!(err.remote_body(), Some(""));
}

#[tokio::test]
async fn malformed_reply_is_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = common::client(&server.uri())
        .invoke::<_, TestResponse>(&Context::background(), &Endpoint::get("/endpoint"), None::<&()>)
        .await
        .unwrap_err();

    assert!(err.is_decoding());
}

#[tokio::test]
async fn schema_mismatch_is_decoding_error() {
    let client = common::builder("http://nursys.invalid")
        .middleware(CannedReply {
            status: 200,
            body: r#"{"operation_id": 42}"#,
        })
        .build()
        .unwrap();

    let err = client
        .invoke::<_, TestResponse>(&Context::background(), &Endpoint::get("/endpoint"), None::<&()>)
        .await
        .unwrap_err();

    assert!(matches!(err, NursysError::Decoding(_)));
}

#[tokio::test]
async fn discarding_ignores_success_body() {
    let client = common::builder("http://nursys.invalid")
        .middleware(CannedReply {
            status: 200,
            body: "not json at all",
        })
        .build()
        .unwrap();

    client
        .invoke_discarding(&Context::background(), &Endpoint::post("/endpoint"), Some(&json!({})))
        .await
        .unwrap();
}

#[tokio::test]
async fn transport_failure_is_transport_error() {
    let client = common::builder("https://example.com/api")
        .middleware(FailingTransport)
        .build()
        .unwrap();

    let err = client
        .invoke_discarding(
            &Context::background(),
            &Endpoint::post("/endpoint"),
            Some(&json!({ "message": "Hello World" })),
        )
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_remote());
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let err = common::client(&format!("http://{addr}"))
        .invoke_discarding(&Context::background(), &Endpoint::get("/endpoint"), None::<&()>)
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn truncated_rejection_body_is_still_remote_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0_u8; 4096];
        let _ = socket.read(&mut request).await.unwrap();
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let err = common::client(&format!("http://{addr}"))
        .invoke_discarding(&Context::background(), &Endpoint::get("/endpoint"), None::<&()>)
        .await
        .unwrap_err();

    assert_eq!(err.remote_status().map(|s| s.as_u16()), Some(500));
    assert_eq!(err.remote_body(), Some(""));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn unserializable_request_fails_before_dispatch() {
    let counter = CountingTransport::default();
    let client = common::builder("http://nursys.invalid")
        .middleware(counter.clone())
        .build()
        .unwrap();
    let body = HashMap::from([((1_u8, 2_u8), 3_u8)]);

    let err = client
        .invoke_discarding(&Context::background(), &Endpoint::post("/endpoint"), Some(&body))
        .await
        .unwrap_err();

    assert!(matches!(err, NursysError::Encoding(_)));
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn malformed_base_url_fails_construction() {
    let client = common::client("not a url");

    let err = client
        .invoke_discarding(&Context::background(), &Endpoint::get("/endpoint"), None::<&()>)
        .await
        .unwrap_err();

    assert!(matches!(err, NursysError::RequestConstruction { .. }));
}

#[tokio::test]
async fn deadline_returns_before_slow_reply() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"error": "Forbidden"}"#)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let ctx = Context::background().with_timeout(Duration::from_millis(50));
    let start = Instant::now();

    let err = common::client(&server.uri())
        .invoke_discarding(
            &ctx,
            &Endpoint::post("/endpoint"),
            Some(&json!({ "message": "Hello World" })),
        )
        .await
        .unwrap_err();

    assert!(err.is_deadline_exceeded());
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn cancel_during_wait_returns_promptly() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let (ctx, cancel) = Context::cancellable();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
    });
    let start = Instant::now();

    let err = common::client(&server.uri())
        .invoke::<_, TestResponse>(&ctx, &Endpoint::get("/endpoint"), None::<&()>)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn ended_context_makes_no_network_attempt() {
    let counter = CountingTransport::default();
    let client = common::builder("http://nursys.invalid")
        .middleware(counter.clone())
        .build()
        .unwrap();
    let (ctx, cancel) = Context::cancellable();
    cancel.cancel();

    let err = client
        .invoke_discarding(&ctx, &Endpoint::post("/endpoint"), Some(&json!({})))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn shared_client_serves_concurrent_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OPERATION_REPLY))
        .expect(3)
        .mount(&server)
        .await;

    let client = common::client(&server.uri());
    let shared = client.clone();
    let ctx = Context::background();
    let endpoint = Endpoint::get("/endpoint");

    let (a, b, c) = tokio::join!(
        client.invoke::<(), TestResponse>(&ctx, &endpoint, None),
        client.invoke::<(), TestResponse>(&ctx, &endpoint, None),
        shared.invoke::<(), TestResponse>(&ctx, &endpoint, None),
    );

    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(c.unwrap().operation_id, "df6a6b50");
}
