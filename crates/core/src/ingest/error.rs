use std::fmt;

/// Failure surface of the recommendation fetch. Both variants degrade to an
/// empty event collection at the call site; neither is fatal to a consumer.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Network failure or non-success HTTP status.
    Transport { detail: String },
    /// Response body was not decodable as a recommendation array.
    Decode { detail: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { detail } => write!(f, "transport error: {detail}"),
            FetchError::Decode { detail } => write!(f, "decode error: {detail}"),
        }
    }
}

impl std::error::Error for FetchError {}
