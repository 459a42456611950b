use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("config error: {0}")]
    Config(String),

    #[error("API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    MalformedResponse(String),

    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric overflow: {0}")]
    NumericOverflow(String),

    #[error("log io error: {0}")]
    LogIo(String),
}

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        ChatError::LogIo(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_carries_status_and_body() {
        let e = ChatError::Upstream { status: 500, body: "boom".into() };
        assert_eq!(e.to_string(), "API error 500: boom");
    }

    #[test]
    fn io_error_becomes_log_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let e: ChatError = io_err.into();
        assert!(matches!(e, ChatError::LogIo(ref msg) if msg.contains("read-only")));
    }
}
