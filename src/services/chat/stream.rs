use crate::errors::GatewayResult;
use crate::services::chat::types::ChatChunk;
use crate::transport::{ByteStream, FrameBuffer, SseLine};
use futures::{Stream, StreamExt};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Assistant text deltas decoded from the gateway's SSE response body.
    ///
    /// Yields each `choices[0].delta.content` fragment in arrival order. A
    /// frame that fails to parse because it arrived split across transport
    /// chunks is recombined with the following chunk rather than dropped;
    /// trailing content that never becomes valid JSON is discarded when the
    /// source ends.
    pub struct ChatStream {
        #[pin]
        inner: Pin<Box<dyn Stream<Item = GatewayResult<String>> + Send>>,
    }
}

impl std::fmt::Debug for ChatStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatStream").finish_non_exhaustive()
    }
}

struct StreamState {
    source: ByteStream,
    buffer: FrameBuffer,
    source_done: bool,
    finished: bool,
}

impl ChatStream {
    pub fn new(source: ByteStream) -> Self {
        let state = StreamState {
            source,
            buffer: FrameBuffer::new(),
            source_done: false,
            finished: false,
        };

        let inner = futures::stream::unfold(state, |mut state| async move {
            loop {
                if state.finished {
                    return None;
                }

                // Drain the frames already buffered.
                while let Some(line) = state.buffer.next_line() {
                    match SseLine::classify(&line) {
                        SseLine::Skip => continue,
                        SseLine::Done => {
                            // Sentinel: stop frame processing for this chunk.
                            // The read loop still runs to source exhaustion.
                            state.buffer.discard_buffered_lines();
                            break;
                        }
                        SseLine::Payload(payload) => match extract_delta(&payload) {
                            Ok(Some(delta)) => return Some((Ok(delta), state)),
                            Ok(None) => continue,
                            Err(_) if !state.source_done => {
                                // Frame split mid-JSON: recombine with the
                                // bytes still to come.
                                state.buffer.requeue(&line);
                                break;
                            }
                            Err(_) => continue,
                        },
                    }
                }

                if state.source_done {
                    // A server may end the stream without a final newline;
                    // classify the remainder the same way as any line.
                    state.finished = true;
                    if let Some(line) = state.buffer.take_remainder() {
                        if let SseLine::Payload(payload) = SseLine::classify(&line) {
                            if let Ok(Some(delta)) = extract_delta(&payload) {
                                return Some((Ok(delta), state));
                            }
                        }
                    }
                    return None;
                }

                match state.source.next().await {
                    Some(Ok(bytes)) => state.buffer.extend(&bytes),
                    Some(Err(error)) => {
                        state.finished = true;
                        return Some((Err(error), state));
                    }
                    None => state.source_done = true,
                }
            }
        });

        Self {
            inner: Box::pin(inner),
        }
    }

    /// Drains the stream and concatenates every delta.
    pub async fn collect_content(mut self) -> GatewayResult<String> {
        let mut content = String::new();
        while let Some(result) = self.next().await {
            content.push_str(&result?);
        }
        Ok(content)
    }
}

impl Stream for ChatStream {
    type Item = GatewayResult<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }
}

/// Typed decode of one frame payload.
///
/// `Err` only for syntactically invalid JSON, the caller's cue to carry the
/// frame forward. A syntactically valid value of unexpected shape is "no
/// delta present", never an error.
fn extract_delta(payload: &str) -> Result<Option<String>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let chunk = match serde_json::from_value::<ChatChunk>(value) {
        Ok(chunk) => chunk,
        Err(_) => return Ok(None),
    };
    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content))
}
