use std::fmt;

/// Connectivity status derived from the health probe.
///
/// Transitions happen on probe completion only; before the first probe
/// resolves the state is always `Pending`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Pending,
    /// Service reachable; carries the probe's response text.
    Connected(String),
    /// Probe failed; carries the failure reason.
    Error(String),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Pending => write!(f, "checking..."),
            ConnectionState::Connected(detail) => write!(f, "connected ({detail})"),
            ConnectionState::Error(reason) => write!(f, "unreachable ({reason})"),
        }
    }
}
