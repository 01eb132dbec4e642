use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("backend responded with status {status}")]
    Status { status: u16, body: Value },

    /// The request body could not be serialized.
    #[error("request body could not be encoded: {0}")]
    Encode(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Error body returned by the backend, if any.
    pub fn upstream_body(&self) -> Option<&Value> {
        match self {
            ClientError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The backend's `message` field.
    pub fn upstream_message(&self) -> Option<&str> {
        self.upstream_body()
            .and_then(|body| body.get("message"))
            .and_then(Value::as_str)
    }
}
