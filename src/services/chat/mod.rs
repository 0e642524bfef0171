mod service;
mod session;
mod stream;
mod types;
mod validation;


pub use service::{ChatService, ChatServiceImpl};
pub use session::{StreamCallbacks, StreamHandle, StreamSession};
pub use stream::ChatStream;
pub use types::{
    ChatChoice, ChatChunk, ChatMessage, ChatRequest, ChatResponse, ChunkChoice, ChunkDelta,
    ResponseMessage, Role,
};
pub use validation::ChatRequestValidator;
