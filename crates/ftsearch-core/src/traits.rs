use async_trait::async_trait;

use crate::error::RemoteError;
use crate::reply::Reply;

/// The single primitive this layer needs from a key-value store client:
/// send one named command with positional arguments and receive the
/// already-deserialized reply.
///
/// One client instance is meant to be shared (via `Arc`) across every
/// index, query and suggestion handle. Implementations should classify
/// failures into a [`RemoteErrorKind`](crate::error::RemoteErrorKind) when
/// the protocol gives them structure to work with;
/// [`RemoteError::from_message`] is the fallback for message-only errors.
#[async_trait]
pub trait StoreClient: Send + Sync {
    async fn send_command(&self, command: &str, args: &[String]) -> Result<Reply, RemoteError>;
}
