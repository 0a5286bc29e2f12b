//! Contract tests for the Gemini client against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::backend::{GenerativeBackend, ModelKind};
use crate::{AiError, Message};

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::new("test-key")
        .with_base_url(format!("{}/v1beta", server.uri()))
        .with_temperature(0.5)
        .with_max_output_tokens(1024);
    GeminiClient::new(config).unwrap()
}

fn text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn text_request_shape_and_key_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "hi" }] },
                { "role": "model", "parts": [{ "text": "hello" }] }
            ],
            "generationConfig": { "temperature": 0.5, "maxOutputTokens": 1024 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Hi there!")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let contents = vec![
        Content::from(&Message::user("hi")),
        Content::from(&Message::assistant("hello")),
    ];
    let response = client.generate(ModelKind::Text, contents).await.unwrap();
    assert_eq!(response.first_text(), Some("Hi there!"));
}

#[tokio::test]
async fn image_request_asks_for_text_and_image_modalities() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent",
        ))
        .and(body_partial_json(json!({
            "generationConfig": { "responseModalities": ["Text", "Image"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                ]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .generate(ModelKind::Image, vec![Content::user(vec![Part::text("a cat")])])
        .await
        .unwrap();
    let parts = response.parts();
    assert_eq!(parts.len(), 2);
    assert_eq!(
        parts[1].inline_data.as_ref().map(|d| d.mime_type.as_str()),
        Some("image/png")
    );
}

#[tokio::test]
async fn vision_request_has_no_generation_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("```html\n<p/>\n```")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.build_request(ModelKind::Vision, vec![]);
    assert!(body.generation_config.is_none());

    let response = client
        .generate(
            ModelKind::Vision,
            vec![Content::user(vec![
                Part::text("describe"),
                Part::inline("image/png", "AAAA"),
            ])],
        )
        .await
        .unwrap();
    assert!(response.joined_text().contains("<p/>"));
}

#[tokio::test]
async fn http_error_surfaces_upstream_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate(ModelKind::Text, vec![Content::from(&Message::user("hi"))])
        .await
        .unwrap_err();
    match err {
        AiError::ApiError(msg) => assert_eq!(msg, "API key not valid."),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_without_json_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate(ModelKind::Text, vec![]).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("503"), "{msg}");
    assert!(msg.contains("upstream unavailable"), "{msg}");
}

#[tokio::test]
async fn error_payload_with_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "message": "model overloaded" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate(ModelKind::Text, vec![]).await.unwrap_err();
    assert!(matches!(err, AiError::ApiError(ref m) if m == "model overloaded"));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "Resource has been exhausted (e.g. check quota)." }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate(ModelKind::Image, vec![]).await.unwrap_err();
    assert!(matches!(err, AiError::RateLimited(ref m) if m.contains("quota")));
}

#[tokio::test]
async fn unparseable_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate(ModelKind::Text, vec![]).await.unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[test]
fn response_helpers_handle_missing_candidates() {
    let empty = GenerateContentResponse::default();
    assert!(empty.parts().is_empty());
    assert_eq!(empty.first_text(), None);
    assert_eq!(empty.joined_text(), "");
}

#[test]
fn assistant_role_maps_to_model() {
    let content = Content::from(&Message::assistant("ok"));
    assert_eq!(content.role.as_deref(), Some("model"));
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json, json!({ "role": "model", "parts": [{ "text": "ok" }] }));
}

#[test]
fn config_debug_redacts_api_key() {
    let config = GeminiConfig::new("super-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let config = GeminiConfig::new("k").with_base_url("http://localhost:1234/v1beta/");
    let client = GeminiClient::new(config).unwrap();
    assert_eq!(
        client.api_url(ModelKind::Text),
        "http://localhost:1234/v1beta/models/gemini-2.0-flash:generateContent"
    );
}
