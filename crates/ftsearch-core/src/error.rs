use thiserror::Error;

/// Structured classification of a failure reported by the store.
///
/// Store clients should populate this from a protocol-level error code when
/// one is available; [`RemoteError::from_message`] is the fallback for
/// clients that only surface a message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The index named in the command does not exist.
    UnknownIndex,
    /// The command reached the module but carried the wrong argument count.
    WrongArity,
    /// Anything else the store reported.
    Other,
}

/// One failed remote command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    kind: RemoteErrorKind,
    message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classify an error from its message alone. The substrings match what
    /// the search module puts in its error replies.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = if message.contains("Unknown Index name") {
            RemoteErrorKind::UnknownIndex
        } else if message.contains("wrong number of arguments") {
            RemoteErrorKind::WrongArity
        } else {
            RemoteErrorKind::Other
        };
        Self { kind, message }
    }

    pub fn kind(&self) -> RemoteErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Schema rejected before any command was issued.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Index or dictionary key rejected before any command was issued.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A remote command failed and was not absorbed.
    #[error("remote command failed: {0}")]
    Remote(#[from] RemoteError),
}

pub type Result<T> = std::result::Result<T, Error>;
