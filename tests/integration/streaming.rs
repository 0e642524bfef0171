//! Integration tests for streaming chat completions

use crate::{client_for, setup_mock_server, signed_out_client_for};
use futures::StreamExt;
use solsarch_gateway::{ChatMessage, ChatRequest, GatewayError, StreamCallbacks, StreamSession};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn history() -> Vec<ChatMessage> {
    vec![ChatMessage::user("Propose an event-driven ingestion pipeline")]
}

fn delta_frame(content: &str) -> String {
    format!(
        "data: {}\n",
        serde_json::json!({
            "choices": [{ "delta": { "content": content }, "finish_reason": null }]
        })
    )
}

fn sse_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "text/event-stream")
}

#[derive(Clone, Default)]
struct RecordingCallbacks {
    deltas: Arc<Mutex<Vec<String>>>,
    completed: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl StreamCallbacks for RecordingCallbacks {
    fn on_delta(&mut self, delta: &str) {
        self.deltas.lock().unwrap().push(delta.to_string());
    }

    fn on_complete(&mut self, full_content: String) {
        self.completed.lock().unwrap().push(full_content);
    }

    fn on_error(&mut self, error: &GatewayError) {
        self.errors.lock().unwrap().push(error.user_message());
    }
}

#[tokio::test]
async fn test_streaming_collects_deltas_in_order() {
    let server = setup_mock_server().await;

    let mut wire = String::new();
    wire.push_str(": heartbeat\n\n");
    wire.push_str(&delta_frame("The"));
    wire.push_str(&delta_frame(" pipeline"));
    wire.push_str(&delta_frame(" uses Kinesis."));
    wire.push_str("data: [DONE]\n");

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-access-token"))
        .and(body_string_contains("\"stream\":true"))
        .respond_with(sse_response(wire))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let content = client
        .chat()
        .create_stream(ChatRequest::streaming(history()))
        .await
        .expect("stream")
        .collect_content()
        .await
        .expect("collect");

    assert_eq!(content, "The pipeline uses Kinesis.");
}

#[tokio::test]
async fn test_streaming_final_frame_without_newline() {
    let server = setup_mock_server().await;

    let mut wire = delta_frame("almost");
    // Last frame is unterminated; the final flush must still surface it.
    wire.push_str(&delta_frame(" done"));
    wire.pop();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(sse_response(wire))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let content = client
        .chat()
        .create_stream(ChatRequest::streaming(history()))
        .await
        .expect("stream")
        .collect_content()
        .await
        .expect("collect");

    assert_eq!(content, "almost done");
}

#[tokio::test]
async fn test_streaming_yields_each_delta_separately() {
    let server = setup_mock_server().await;

    let wire = format!("{}{}", delta_frame("a"), delta_frame("b"));

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(sse_response(wire))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut stream = client
        .chat()
        .create_stream(ChatRequest::streaming(history()))
        .await
        .expect("stream");

    let mut seen = Vec::new();
    while let Some(delta) = stream.next().await {
        seen.push(delta.expect("delta"));
    }
    assert_eq!(seen, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_stream_session_completes_through_callbacks() {
    let server = setup_mock_server().await;

    let wire = format!(
        "{}{}data: [DONE]\n",
        delta_frame("Hello"),
        delta_frame(" world")
    );

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(sse_response(wire))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let recorder = RecordingCallbacks::default();
    let handle = StreamSession::spawn(client.chat(), history(), recorder.clone());
    handle.join().await;

    assert_eq!(
        recorder.deltas.lock().unwrap().clone(),
        vec!["Hello".to_string(), " world".to_string()]
    );
    assert_eq!(
        recorder.completed.lock().unwrap().clone(),
        vec!["Hello world".to_string()]
    );
    assert!(recorder.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_streaming_http_error_before_stream() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .chat()
        .create_stream(ChatRequest::streaming(history()))
        .await;

    assert!(matches!(result, Err(GatewayError::Server(_))));
}

#[tokio::test]
async fn test_signed_out_streaming_never_reaches_the_server() {
    let server = setup_mock_server().await;

    let client = signed_out_client_for(&server);
    let result = client
        .chat()
        .create_stream(ChatRequest::streaming(history()))
        .await;

    assert!(result.unwrap_err().is_authentication_error());
    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 0);
}
