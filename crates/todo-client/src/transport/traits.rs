//! Transport Layer - Core Traits
//!
//! The client talks HTTP through this seam so the browser, native code and
//! tests can each plug in their own implementation.

use std::fmt;

use async_trait::async_trait;

use crate::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// An outgoing request. `body`, when present, is JSON; non-GET requests
/// carry `Content-Type: application/json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None }
    }

    pub fn post(url: impl Into<String>, body: String) -> Self {
        Self { method: Method::Post, url: url.into(), body: Some(body) }
    }

    pub fn put(url: impl Into<String>, body: String) -> Self {
        Self { method: Method::Put, url: url.into(), body: Some(body) }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self { method: Method::Delete, url: url.into(), body: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Any 2xx; 4xx and 5xx are not distinguished
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport
///
/// Futures are not `Send`: browser fetch futures live on the JS event loop.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Send a request and return whatever status the server answered with.
    /// Only failures to obtain a response are errors here.
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}
