use client_logging::{client_debug, client_warn};
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::types::{ApiError, ErrorKind};

/// Longest response-body excerpt reported to the sink.
const BODY_PREVIEW_MAX: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Diagnostic record of transport activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    RequestSent {
        method: &'static str,
        path: String,
    },
    ResponseReceived {
        method: &'static str,
        path: String,
        status: u16,
        body_preview: String,
    },
    RequestFailed {
        method: &'static str,
        path: String,
        error: String,
    },
    RetryScheduled {
        attempt: u32,
        delay_ms: u64,
        error: String,
    },
}

/// Observability sink for transport diagnostics. Implementations must never
/// fail or block the caller.
pub trait TransportSink: Send + Sync {
    fn record(&self, event: TransportEvent);
}

/// Sink that writes every event to the log facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TransportSink for LogSink {
    fn record(&self, event: TransportEvent) {
        match event {
            TransportEvent::RequestSent { method, path } => {
                client_debug!("request {method} {path}");
            }
            TransportEvent::ResponseReceived {
                method,
                path,
                status,
                body_preview,
            } => {
                client_debug!("response {method} {path} -> {status} {body_preview}");
            }
            TransportEvent::RequestFailed {
                method,
                path,
                error,
            } => {
                client_warn!("request {method} {path} failed: {error}");
            }
            TransportEvent::RetryScheduled {
                attempt,
                delay_ms,
                error,
            } => {
                client_warn!("attempt {attempt} failed ({error}); retrying in {delay_ms}ms");
            }
        }
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issues one HTTP request against the configured base URL.
    ///
    /// 2xx responses yield the parsed JSON body; a 2xx body that is not
    /// valid JSON is surfaced as a bare string value (the health endpoint
    /// answers in plain text). Shape checks belong to the typed decode
    /// layer. Non-2xx statuses fail with `ErrorKind::HttpStatus`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        sink: &dyn TransportSink,
    ) -> Result<Value, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ErrorKind::NetworkUnavailable, err.to_string()))?;
        Ok(Self { config, client })
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        sink: &dyn TransportSink,
    ) -> Result<Value, ApiError> {
        sink.record(TransportEvent::RequestSent {
            method: method.as_str(),
            path: path.to_string(),
        });

        let url = self.url_for(path);
        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        request = request.header(ACCEPT, "application/json");
        if let Some(body) = body {
            // Serializes the body and sets Content-Type: application/json.
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let error = map_reqwest_error(err);
                sink.record(TransportEvent::RequestFailed {
                    method: method.as_str(),
                    path: path.to_string(),
                    error: error.to_string(),
                });
                return Err(error);
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                let error = map_reqwest_error(err);
                sink.record(TransportEvent::RequestFailed {
                    method: method.as_str(),
                    path: path.to_string(),
                    error: error.to_string(),
                });
                return Err(error);
            }
        };

        sink.record(TransportEvent::ResponseReceived {
            method: method.as_str(),
            path: path.to_string(),
            status: status.as_u16(),
            body_preview: excerpt(&text),
        });

        if !status.is_success() {
            return Err(ApiError::new(
                ErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text)))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ErrorKind::Timeout, err.to_string());
    }
    ApiError::new(ErrorKind::NetworkUnavailable, err.to_string())
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= BODY_PREVIEW_MAX {
        text.to_string()
    } else {
        text.chars().take(BODY_PREVIEW_MAX).collect()
    }
}
