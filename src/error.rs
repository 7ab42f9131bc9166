use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WagerError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid course: {0}")]
    InvalidCourse(String),
    #[error("invalid event: {0}")]
    InvalidEvent(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for WagerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for WagerError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for WagerError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
