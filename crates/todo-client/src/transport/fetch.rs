//! Browser Fetch Transport

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use super::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::error::{ApiError, ApiResult};

/// [`HttpTransport`] over the browser Fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = match request.method {
            Method::Get => builder,
            _ => builder.header("Content-Type", "application/json"),
        };

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
