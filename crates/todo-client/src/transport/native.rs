//! Native Transport
//!
//! `reqwest`-backed transport for running the client outside the browser.

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::error::{ApiError, ApiResult};

/// [`HttpTransport`] over `reqwest`. Uses the client's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        let builder = match request.method {
            Method::Get => builder,
            _ => builder.header(reqwest::header::CONTENT_TYPE, "application/json"),
        };
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
