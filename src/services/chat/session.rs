//! Callback-driven streaming sessions.
//!
//! The chat surface supplies a message history and callbacks, and gets back a
//! handle it can use to abort the call or poll its progress. Each invocation
//! owns its cancellation token and buffers outright, so overlapping sessions
//! from the same surface cannot disturb each other.

use crate::errors::GatewayError;
use crate::services::chat::{ChatMessage, ChatRequest, ChatService};
use futures::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Callbacks invoked by a streaming session.
///
/// `on_delta` runs synchronously before the next frame is processed, so the
/// UI observes deltas in wire order. `on_complete` fires exactly once, only
/// on a clean finish. `on_error` is the side-channel for expected failures
/// (auth, rate limit, network, HTTP); it never fires for cancellation.
pub trait StreamCallbacks: Send {
    fn on_delta(&mut self, delta: &str);
    fn on_complete(&mut self, full_content: String);
    fn on_error(&mut self, error: &GatewayError);
}

/// Handle to one in-flight streaming call.
pub struct StreamHandle {
    token: CancellationToken,
    in_progress: Arc<AtomicBool>,
    task: tokio::task::JoinHandle<()>,
}

impl StreamHandle {
    /// Signals the session to stop. The read loop observes the signal before
    /// its next read; no further callbacks fire after that point.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    /// Waits for the session task to finish.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Clears the in-progress flag on every exit path, including panics.
struct InProgressGuard(Arc<AtomicBool>);

impl Drop for InProgressGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct StreamSession;

impl StreamSession {
    /// Starts a streaming call and returns its handle.
    pub fn spawn<C>(
        service: Arc<dyn ChatService>,
        messages: Vec<ChatMessage>,
        callbacks: C,
    ) -> StreamHandle
    where
        C: StreamCallbacks + 'static,
    {
        let token = CancellationToken::new();
        let in_progress = Arc::new(AtomicBool::new(true));

        let task_token = token.clone();
        let task_flag = in_progress.clone();
        let task = tokio::spawn(async move {
            let _guard = InProgressGuard(task_flag);
            run_stream(service, messages, callbacks, task_token).await;
        });

        StreamHandle {
            token,
            in_progress,
            task,
        }
    }
}

async fn run_stream<C: StreamCallbacks>(
    service: Arc<dyn ChatService>,
    messages: Vec<ChatMessage>,
    mut callbacks: C,
    token: CancellationToken,
) {
    let request = ChatRequest::streaming(messages);

    let mut stream = tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("chat stream cancelled before the request was sent");
            return;
        }
        result = service.create_stream(request) => match result {
            Ok(stream) => stream,
            Err(error) => {
                report(&mut callbacks, &error);
                return;
            }
        }
    };

    let mut full_content = String::new();
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                // Dropping the stream tears down the connection; the abort is
                // deliberate and must not surface as an error.
                tracing::debug!("chat stream cancelled mid-stream");
                return;
            }
            next = stream.next() => match next {
                Some(Ok(delta)) => {
                    full_content.push_str(&delta);
                    callbacks.on_delta(&delta);
                }
                Some(Err(error)) => {
                    // Partial content is discarded: completion means a clean
                    // finish, nothing less.
                    report(&mut callbacks, &error);
                    return;
                }
                None => {
                    callbacks.on_complete(full_content);
                    return;
                }
            }
        }
    }
}

fn report<C: StreamCallbacks>(callbacks: &mut C, error: &GatewayError) {
    if error.is_cancelled() {
        tracing::debug!("chat stream aborted");
        return;
    }
    tracing::warn!(%error, "chat stream failed");
    callbacks.on_error(error);
}
