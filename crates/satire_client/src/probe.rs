use satire_core::ConnectionState;
use serde_json::Value;

use crate::transport::{Method, Transport, TransportSink};

/// Lightweight health-check path served by the backend.
pub const HEALTH_PATH: &str = "/prompt/test";

/// Probes the service and derives a connection state.
///
/// Infallible by contract: every transport failure becomes an
/// `Error(reason)` value, never a propagated error, so callers can run it
/// on a timer without guarding.
pub async fn check_connection(
    transport: &dyn Transport,
    sink: &dyn TransportSink,
) -> ConnectionState {
    match transport.send(Method::Get, HEALTH_PATH, None, sink).await {
        Ok(Value::String(text)) => ConnectionState::Connected(text.trim().to_string()),
        Ok(_) => ConnectionState::Connected("ok".to_string()),
        Err(error) => ConnectionState::Error(error.kind.to_string()),
    }
}
