use std::fmt;

/// Failure of a registry or downloads-API call. A fetch either
/// completes with a parsed body or surfaces one of these; there is no
/// partial success.
#[derive(Debug)]
pub enum RetrievalError {
    Timeout(String),
    ConnectionFailed(String, String),
    NetworkError(String, String),
    HttpStatus(String, String),
    InvalidResponse(String, String),
    RuntimeError(String),
}

impl fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout(name) => {
                write!(f, "Request timeout for '{name}'")
            }
            Self::ConnectionFailed(name, detail) => {
                write!(f, "Connection failed for '{name}': {detail}")
            }
            Self::NetworkError(name, detail) => {
                write!(f, "Network error for '{name}': {detail}")
            }
            Self::HttpStatus(name, detail) => {
                write!(f, "HTTP error for '{name}': {detail}")
            }
            Self::InvalidResponse(name, detail) => {
                write!(f, "Unparseable response for '{name}': {detail}")
            }
            Self::RuntimeError(detail) => {
                write!(f, "Runtime error: {detail}")
            }
        }
    }
}

impl std::error::Error for RetrievalError {}

pub type Result<T> = std::result::Result<T, RetrievalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_package_name() {
        let err = RetrievalError::HttpStatus("@scope/pkg".to_string(), "404 Not Found".to_string());
        let msg = err.to_string();
        assert!(msg.contains("@scope/pkg"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_timeout_display() {
        let err = RetrievalError::Timeout("lodash".to_string());
        assert_eq!(err.to_string(), "Request timeout for 'lodash'");
    }
}
