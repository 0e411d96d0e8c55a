use std::fmt;

/// Error reported to the UI: a machine code plus a human readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub const UNKNOWN_CODE: &'static str = "unKnownCode";
    pub const PARSE_ERROR: &'static str = "parseError";
    pub const NETWORK_ERROR: &'static str = "networkError";
    pub const NO_MESSAGE: &'static str = "No error message";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Error used when a response body matches none of the known payloads.
    pub fn parse_error() -> Self {
        Self::new(Self::PARSE_ERROR, Self::NO_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
