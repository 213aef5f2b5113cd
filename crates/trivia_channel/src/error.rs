//! Channel error types

use thiserror::Error;

/// Errors surfaced by the platform channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The reply sink for an invocation was dropped before resolving.
    ///
    /// Every invocation must resolve its sink exactly once; a handler (or
    /// dialog host) that drops the sink unresolved violates that contract,
    /// and the waiting caller observes this error instead of hanging.
    #[error("reply for {channel}#{method} was dropped before resolution")]
    ReplyDropped {
        /// Channel the invocation was sent on.
        channel: String,
        /// Method name of the invocation.
        method: String,
    },
}

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
