//! SSE wire-format fixtures
//!
//! Builders for the gateway's streaming frames: `data: <json>\n` lines, the
//! `[DONE]` sentinel, and heartbeat comments.

use serde_json::json;

/// Chunk JSON carrying one content delta
pub fn delta_chunk(content: &str) -> serde_json::Value {
    json!({
        "choices": [{
            "delta": { "content": content },
            "finish_reason": null
        }]
    })
}

/// Chunk JSON announcing the assistant role, no content
pub fn role_chunk() -> serde_json::Value {
    json!({
        "choices": [{
            "delta": { "role": "assistant" },
            "finish_reason": null
        }]
    })
}

/// Chunk JSON carrying only a finish reason
pub fn finish_chunk() -> serde_json::Value {
    json!({
        "choices": [{
            "delta": {},
            "finish_reason": "stop"
        }]
    })
}

/// One `data: ` frame with a trailing newline
pub fn sse_frame(value: &serde_json::Value) -> String {
    format!("data: {}\n", value)
}

pub fn done_frame() -> String {
    "data: [DONE]\n".to_string()
}

pub fn heartbeat_frame() -> String {
    ": heartbeat\n".to_string()
}

/// Complete wire text for a sequence of deltas, ending with `[DONE]`
pub fn stream_wire(deltas: &[&str]) -> String {
    let mut wire = sse_frame(&role_chunk());
    for delta in deltas {
        wire.push_str(&sse_frame(&delta_chunk(delta)));
    }
    wire.push_str(&sse_frame(&finish_chunk()));
    wire.push_str(&done_frame());
    wire
}
