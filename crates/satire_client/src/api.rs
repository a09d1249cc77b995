use std::sync::Arc;

use satire_core::{Article, ConnectionState, MIN_PROMPT_LEN};
use serde_json::Value;

use crate::probe::check_connection;
use crate::retry::{with_retry, RetryPolicy};
use crate::transport::{Method, Transport, TransportSink};
use crate::types::{ApiError, ErrorKind};

/// Canonical listing path. The backend also answers on `/prompt/stories`;
/// this client standardizes on `/prompt`.
pub const LIST_PATH: &str = "/prompt";

/// Story-creation path; takes `{"prompt": ...}`.
pub const CREATE_PATH: &str = "/prompt/story";

/// Typed operations against the story service. Holds no list state; every
/// result is handed to the reconciler by the caller.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn TransportSink>,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn TransportSink>) -> Self {
        Self {
            transport,
            sink,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetches all articles in server order.
    pub async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        let value = with_retry(self.retry, self.sink.as_ref(), || {
            self.transport
                .send(Method::Get, LIST_PATH, None, self.sink.as_ref())
        })
        .await?;
        decode_article_list(value)
    }

    /// Submits a prompt for generation and returns the stored article.
    ///
    /// Prompts shorter than [`MIN_PROMPT_LEN`] characters are rejected here,
    /// before any network round-trip. The call itself runs single-attempt:
    /// replaying a create whose response was lost could submit the prompt
    /// twice, and the service offers no idempotency token.
    pub async fn create_article(&self, prompt: &str) -> Result<Article, ApiError> {
        let trimmed = prompt.trim();
        let length = trimmed.chars().count();
        if length < MIN_PROMPT_LEN {
            return Err(ApiError::new(
                ErrorKind::PromptTooShort { length },
                format!("prompt must be at least {MIN_PROMPT_LEN} characters"),
            ));
        }
        let body = serde_json::json!({ "prompt": trimmed });
        let value = with_retry(RetryPolicy::none(), self.sink.as_ref(), || {
            self.transport
                .send(Method::Post, CREATE_PATH, Some(&body), self.sink.as_ref())
        })
        .await?;
        decode_article(value)
    }

    /// Upvotes a previously observed article; returns the server tally.
    pub async fn upvote(&self, id: &str) -> Result<Article, ApiError> {
        self.vote("upvote", id).await
    }

    /// Downvotes a previously observed article; returns the server tally.
    pub async fn downvote(&self, id: &str) -> Result<Article, ApiError> {
        self.vote("downvote", id).await
    }

    /// Runs the health probe; always resolves to a state value.
    pub async fn check_connection(&self) -> ConnectionState {
        check_connection(self.transport.as_ref(), self.sink.as_ref()).await
    }

    async fn vote(&self, action: &str, id: &str) -> Result<Article, ApiError> {
        let path = format!("/prompt/{action}/{id}");
        let value = with_retry(self.retry, self.sink.as_ref(), || {
            self.transport
                .send(Method::Post, &path, None, self.sink.as_ref())
        })
        .await?;
        decode_article(value)
    }
}

fn decode_article(value: Value) -> Result<Article, ApiError> {
    serde_json::from_value(value)
        .map_err(|err| ApiError::new(ErrorKind::MalformedResponse, err.to_string()))
}

fn decode_article_list(value: Value) -> Result<Vec<Article>, ApiError> {
    if !value.is_array() {
        return Err(ApiError::new(
            ErrorKind::MalformedResponse,
            "listing did not return an array",
        ));
    }
    serde_json::from_value(value)
        .map_err(|err| ApiError::new(ErrorKind::MalformedResponse, err.to_string()))
}
