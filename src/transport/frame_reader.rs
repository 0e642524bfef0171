//! Line framing for the gateway's SSE stream.
//!
//! The gateway emits newline-delimited frames (`data: <json>\n`), interleaved
//! with comments and blank lines, over a chunked byte stream that may split a
//! frame, or a single UTF-8 scalar, at any byte offset. `FrameBuffer`
//! reassembles complete text lines from that stream; classification of a line
//! into payload/comment/sentinel lives in [`SseLine`].

/// One classified line of the wire protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// JSON payload of a `data: ` frame.
    Payload(String),
    /// The `[DONE]` end-of-content sentinel.
    Done,
    /// Blank line, `:` comment, or an event type this consumer ignores.
    Skip,
}

impl SseLine {
    pub fn classify(line: &str) -> SseLine {
        if line.is_empty() || line.starts_with(':') {
            return SseLine::Skip;
        }
        match line.strip_prefix("data: ") {
            Some("[DONE]") => SseLine::Done,
            Some(payload) => SseLine::Payload(payload.to_string()),
            None => SseLine::Skip,
        }
    }
}

/// Growable text buffer fed by raw byte chunks.
///
/// Decoding is stateful: an incomplete multi-byte sequence at the end of a
/// chunk is held back until the next chunk completes it. Invalid bytes (as
/// opposed to incomplete ones) are replaced with U+FFFD and decoding
/// continues.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    text: String,
    utf8_tail: Vec<u8>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk of bytes, decoding as much as is currently decodable.
    pub fn extend(&mut self, chunk: &[u8]) {
        let mut bytes = std::mem::take(&mut self.utf8_tail);
        bytes.extend_from_slice(chunk);

        let mut input = &bytes[..];
        loop {
            match std::str::from_utf8(input) {
                Ok(valid) => {
                    self.text.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, rest) = input.split_at(err.valid_up_to());
                    self.text.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(invalid_len) => {
                            self.text.push('\u{FFFD}');
                            input = &rest[invalid_len..];
                        }
                        None => {
                            // Incomplete sequence: wait for the next chunk.
                            self.utf8_tail = rest.to_vec();
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Removes and returns the next complete line, without its newline and
    /// with a single trailing carriage return stripped.
    pub fn next_line(&mut self) -> Option<String> {
        let pos = self.text.find('\n')?;
        let mut line: String = self.text.drain(..=pos).collect();
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
        Some(line)
    }

    /// Re-prepends a line (plus its newline) so the next chunk's continuation
    /// can complete a frame that did not yet parse.
    pub fn requeue(&mut self, line: &str) {
        self.text.insert(0, '\n');
        self.text.insert_str(0, line);
    }

    /// Drops every complete buffered line, keeping the unterminated tail.
    pub fn discard_buffered_lines(&mut self) {
        while self.next_line().is_some() {}
    }

    /// Takes whatever remains after the source is exhausted; by construction
    /// a single line without a trailing newline.
    pub fn take_remainder(&mut self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        let mut line = std::mem::take(&mut self.text);
        if line.ends_with('\r') {
            line.pop();
        }
        Some(line)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.utf8_tail.is_empty()
    }
}
