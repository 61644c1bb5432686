use thiserror::Error;

/// The single error kind produced by every failed check in this crate.
///
/// `Display` renders the message verbatim, so callers that surface the error
/// directly get exactly the text the check was built with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequireError {
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl RequireError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        RequireError::InvalidArgument {
            message: message.into(),
        }
    }

    /// The human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            RequireError::InvalidArgument { message } => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, RequireError>;
