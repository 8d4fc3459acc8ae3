//! HTTP embedding provider against a local stub server.

mod common;

use std::time::Duration;

use common::http_stub::{StubResponse, serve_once};
use scholar::embedding::{
    EmbeddingError, EmbeddingProvider, HttpEmbeddingConfig, HttpEmbeddingProvider,
};

fn provider_for(addr: std::net::SocketAddr, timeout: Duration) -> HttpEmbeddingProvider {
    HttpEmbeddingProvider::new(HttpEmbeddingConfig {
        base_url: format!("http://{addr}/v1"),
        model: "test-model".to_string(),
        api_key: Some("secret".to_string()),
        timeout,
    })
    .unwrap()
}

#[tokio::test]
async fn test_embed_parses_vector_and_sends_request() {
    let (addr, request) = serve_once(StubResponse::json(
        200,
        r#"{"data":[{"embedding":[0.25,-0.5,1.0]}],"model":"test-model"}"#,
    ))
    .await;
    let provider = provider_for(addr, Duration::from_secs(5));

    let vector = provider.embed("Student from Kerala.").await.unwrap();

    assert_eq!(vector, vec![0.25, -0.5, 1.0]);
    assert_eq!(provider.model_id(), "test-model");

    let request = request.await.unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /v1/embeddings"));
    assert!(lower.contains("authorization: bearer secret"));
    assert!(request.contains(r#""model":"test-model""#));
    assert!(request.contains(r#""input":"Student from Kerala.""#));
}

#[tokio::test]
async fn test_error_status_is_unavailable() {
    let (addr, _request) =
        serve_once(StubResponse::json(503, r#"{"error":"overloaded"}"#)).await;

    let err = provider_for(addr, Duration::from_secs(5))
        .embed("text")
        .await
        .unwrap_err();

    match err {
        EmbeddingError::ProviderUnavailable { reason } => assert!(reason.contains("503")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_data_is_invalid_response() {
    let (addr, _request) = serve_once(StubResponse::json(200, r#"{"data":[]}"#)).await;

    let err = provider_for(addr, Duration::from_secs(5))
        .embed("text")
        .await
        .unwrap_err();

    assert!(matches!(err, EmbeddingError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let (addr, _request) = serve_once(StubResponse::json(200, "not json")).await;

    let err = provider_for(addr, Duration::from_secs(5))
        .embed("text")
        .await
        .unwrap_err();

    assert!(matches!(err, EmbeddingError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let (addr, _request) = serve_once(
        StubResponse::json(200, r#"{"data":[{"embedding":[1.0]}]}"#)
            .delayed(Duration::from_secs(2)),
    )
    .await;

    let err = provider_for(addr, Duration::from_millis(100))
        .embed("text")
        .await
        .unwrap_err();

    assert!(matches!(err, EmbeddingError::Timeout { .. }));
    assert!(err.is_unavailable());
}
