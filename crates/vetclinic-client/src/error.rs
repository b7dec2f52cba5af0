pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status { status: u16, message: Option<String> },

    #[error("unable to decode response from {operation}: {details}")]
    Decode {
        operation: &'static str,
        details: String,
    },

    #[error("invalid base url '{url}': {details}")]
    InvalidUrl { url: String, details: String },

    #[error("request error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl ClientError {
    /// The `error` text from the server's JSON body, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(err) if err.is_timeout())
    }

    /// True when the server answered; false for transport and decode faults.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}
