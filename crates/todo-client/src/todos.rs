//! Todo Client
//!
//! CRUD against the remote TODO collection. Results land in a
//! [`SharedTodoState`] instead of being returned as errors:
//! - every failure is reduced to one message in `last_error`, overwriting
//!   the previous one
//! - every successful mutation is followed by exactly one full list fetch;
//!   the mutated record is never merged locally
//!
//! Operations take `&self` and are not serialized. Overlapping calls run
//! independently and the state reflects whichever finishes last.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, Operation};
use crate::models::{Envelope, Todo, TodoDraft, TodoPage, TodoPatch};
use crate::state::SharedTodoState;
use crate::transport::{ApiRequest, HttpTransport};

pub struct TodoClient<T: HttpTransport> {
    transport: Rc<T>,
    config: ClientConfig,
    state: SharedTodoState,
}

impl<T: HttpTransport> Clone for TodoClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: HttpTransport> TodoClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_state(transport, config, SharedTodoState::new())
    }

    /// Build a client around state owned by the caller
    pub fn with_state(transport: T, config: ClientConfig, state: SharedTodoState) -> Self {
        Self {
            transport: Rc::new(transport),
            config,
            state,
        }
    }

    pub fn state(&self) -> &SharedTodoState {
        &self.state
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reload the whole list.
    ///
    /// On failure the previous items are kept. `loading` is reset either way.
    pub async fn fetch_all(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.last_error.clear();
        });

        let result = self.request_json::<Envelope<TodoPage>>(ApiRequest::get(self.config.collection_url())).await;

        self.state.update(|s| {
            match result {
                Ok(envelope) => {
                    s.items = envelope.into_items();
                    s.last_error.clear();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "[TODOS] fetch_all failed");
                    s.last_error = Operation::FetchAll.failure_message().to_string();
                }
            }
            s.loading = false;
        });
    }

    /// Fetch a single todo. `None` on any failure, with `last_error` set.
    pub async fn fetch_one(&self, id: &str) -> Option<Todo> {
        self.clear_error();

        let result = match require_id(id) {
            Ok(()) => self.request_json::<Envelope<Todo>>(ApiRequest::get(self.config.item_url(id))).await,
            Err(e) => Err(e),
        };

        match result.and_then(|envelope| {
            envelope
                .data
                .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
        }) {
            Ok(todo) => Some(todo),
            Err(e) => {
                self.fail(Operation::FetchOne, &e);
                None
            }
        }
    }

    /// Create a todo, then reload the list. Returns whether the POST succeeded.
    pub async fn create(&self, draft: &TodoDraft) -> bool {
        self.clear_error();
        let result = match to_body(draft) {
            Ok(body) => self.request(ApiRequest::post(self.config.collection_url(), body)).await,
            Err(e) => Err(e),
        };
        self.refresh_after(Operation::Create, result).await
    }

    /// Apply a partial update, then reload the list.
    pub async fn update(&self, id: &str, patch: &TodoPatch) -> bool {
        self.clear_error();
        let result = match require_id(id).and_then(|()| to_body(patch)) {
            Ok(body) => self.request(ApiRequest::put(self.config.item_url(id), body)).await,
            Err(e) => Err(e),
        };
        self.refresh_after(Operation::Update, result).await
    }

    /// Delete a todo, then reload the list.
    pub async fn delete(&self, id: &str) -> bool {
        self.clear_error();
        let result = match require_id(id) {
            Ok(()) => self.request(ApiRequest::delete(self.config.item_url(id))).await,
            Err(e) => Err(e),
        };
        self.refresh_after(Operation::Delete, result).await
    }

    // ========================
    // Helpers
    // ========================

    async fn refresh_after(&self, op: Operation, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.fetch_all().await;
                true
            }
            Err(e) => {
                self.fail(op, &e);
                false
            }
        }
    }

    /// Send a request and require a 2xx answer. The body is ignored.
    async fn request(&self, request: ApiRequest) -> ApiResult<()> {
        self.send(request).await.map(|_| ())
    }

    async fn request_json<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<String> {
        tracing::debug!(method = %request.method, url = %request.url, "[TODOS] request");
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        Ok(response.body)
    }

    fn clear_error(&self) {
        self.state.update(|s| s.last_error.clear());
    }

    fn fail(&self, op: Operation, error: &ApiError) {
        tracing::warn!(operation = ?op, error = %error, "[TODOS] operation failed");
        self.state
            .update(|s| s.last_error = op.failure_message().to_string());
    }
}

fn require_id(id: &str) -> ApiResult<()> {
    if id.trim().is_empty() {
        return Err(ApiError::InvalidInput("todo id is empty".to_string()));
    }
    Ok(())
}

fn to_body<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::InvalidInput(e.to_string()))
}
