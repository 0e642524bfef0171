mod frame_reader;
mod http_transport;
mod response_parser;

pub use frame_reader::{FrameBuffer, SseLine};
pub use http_transport::ReqwestTransport;
pub use response_parser::ResponseParser;

use crate::errors::GatewayResult;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use http::HeaderMap;
use std::pin::Pin;

/// Raw byte chunks of a streaming response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = GatewayResult<Bytes>> + Send>>;

/// HTTP seam between services and the wire. Both calls resolve non-2xx
/// statuses into the error taxonomy before returning.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POSTs a JSON body and buffers the complete response.
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
        headers: HeaderMap,
    ) -> GatewayResult<Bytes>;

    /// POSTs a JSON body and hands back the response body as a byte stream.
    async fn post_stream(
        &self,
        path: &str,
        body: serde_json::Value,
        headers: HeaderMap,
    ) -> GatewayResult<ByteStream>;
}
