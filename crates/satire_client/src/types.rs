use std::fmt;

/// Error produced by the transport and surfaced through the resource client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for ApiError {}

/// Failure taxonomy. Downstream logic switches on this tag, never on the
/// shape of some library error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    HttpStatus(u16),
    NetworkUnavailable,
    MalformedResponse,
    /// Rejected locally before any network call.
    PromptTooShort { length: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Timeout => write!(f, "timeout"),
            ErrorKind::HttpStatus(code) => write!(f, "HTTP {code}"),
            ErrorKind::NetworkUnavailable => write!(f, "network unavailable"),
            ErrorKind::MalformedResponse => write!(f, "malformed response"),
            ErrorKind::PromptTooShort { length } => {
                write!(f, "prompt too short ({length} chars)")
            }
        }
    }
}
