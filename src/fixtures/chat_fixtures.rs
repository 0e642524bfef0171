//! Chat response fixtures

use serde_json::json;

/// Sample non-streaming chat response
pub fn chat_response() -> serde_json::Value {
    json!({
        "id": "gen-20260807-1",
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "Here is a three-tier architecture proposal for your workload."
            },
            "finish_reason": "stop"
        }]
    })
}

/// Chat response with no content (tool/control reply)
pub fn chat_response_without_content() -> serde_json::Value {
    json!({
        "id": "gen-20260807-2",
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null
            },
            "finish_reason": "stop"
        }]
    })
}
