//! Satire client: resilient HTTP synchronization with the story service.
mod api;
mod client;
mod config;
mod probe;
mod retry;
mod transport;
mod types;

pub use api::{ApiClient, CREATE_PATH, LIST_PATH};
pub use client::{ClientCommand, ClientEvent, ClientHandle};
pub use config::{ClientConfig, ConfigError, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use probe::{check_connection, HEALTH_PATH};
pub use retry::{with_retry, RetryPolicy};
pub use transport::{
    HttpTransport, LogSink, Method, Transport, TransportEvent, TransportSink,
};
pub use types::{ApiError, ErrorKind};
