use crate::client::GatewayConfig;
use crate::errors::{ErrorMapper, GatewayResult, NetworkError};
use crate::transport::{ByteStream, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use http::HeaderMap;
use reqwest::Client;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: url::Url,
    default_headers: HeaderMap,
}

impl ReqwestTransport {
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let mut client_builder = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_connections)
            .user_agent(&config.user_agent);

        if let Some(proxy_url) = &config.proxy {
            if let Ok(proxy) = reqwest::Proxy::all(proxy_url.as_str()) {
                client_builder = client_builder.proxy(proxy);
            }
        }

        let client = client_builder.build().map_err(|e| {
            crate::errors::GatewayError::Network(NetworkError::ConnectionFailed(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            default_headers: HeaderMap::new(),
        })
    }

    /// Sets default headers to include in all requests
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn merge_headers(&self, request_headers: HeaderMap) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        for (key, value) in request_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }

    async fn send(
        &self,
        path: &str,
        body: serde_json::Value,
        headers: HeaderMap,
    ) -> GatewayResult<reqwest::Response> {
        let url = self.build_url(path);
        let merged = self.merge_headers(headers);

        tracing::debug!(path, "sending gateway request");

        let mut request = self.client.post(&url);
        for (key, value) in merged.iter() {
            request = request.header(key, value);
        }

        Ok(request.json(&body).send().await?)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
        headers: HeaderMap,
    ) -> GatewayResult<Bytes> {
        let response = self.send(path, body, headers).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            Err(ErrorMapper::map_status_with_headers(
                status.as_u16(),
                &headers,
                &body,
            ))
        }
    }

    async fn post_stream(
        &self,
        path: &str,
        body: serde_json::Value,
        headers: HeaderMap,
    ) -> GatewayResult<ByteStream> {
        let response = self.send(path, body, headers).await?;
        let status = response.status();

        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(ErrorMapper::map_status_with_headers(
                status.as_u16(),
                &headers,
                &body,
            ));
        }

        Ok(Box::pin(
            response.bytes_stream().map_err(crate::errors::GatewayError::from),
        ))
    }
}
