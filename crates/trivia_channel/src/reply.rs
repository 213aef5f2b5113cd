//! One-shot reply sinks for method invocations.
//!
//! Every invocation carries exactly one [`Reply`]; resolving it consumes the
//! value, so "resolved exactly once" holds at the type level instead of by
//! caller discipline.

use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::{ChannelError, Result};

/// Terminal payload of a method invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum MethodResponse {
    /// The method ran; carries its result value. `Null` is a legal result
    /// (an explicit "no data"), distinct from an empty string.
    Success(Value),
    /// The method ran and reports a domain error.
    Error {
        /// Stable machine-readable error code.
        code: String,
        /// Human-readable description.
        message: String,
    },
    /// The channel recognizes no such method.
    NotImplemented,
}

impl MethodResponse {
    /// Whether this is a success reply.
    pub fn is_success(&self) -> bool {
        matches!(self, MethodResponse::Success(_))
    }

    /// Whether this is the "method not recognized" reply.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResponse::NotImplemented)
    }
}

/// Single-use reply sink handed to a method-call handler.
///
/// Created in a pair with its [`ReplyReceiver`]. All resolution methods take
/// `self`, so a second resolution is unrepresentable. Dropping a sink without
/// resolving it is a contract violation: the drop is logged and the waiting
/// side observes [`ChannelError::ReplyDropped`].
#[derive(Debug)]
pub struct Reply {
    channel: String,
    method: String,
    tx: Option<oneshot::Sender<MethodResponse>>,
}

impl Reply {
    /// Create a sink/receiver pair for one invocation.
    ///
    /// The messenger does this for every incoming invocation; the
    /// constructor is public so handlers can be driven directly in tests
    /// and embeddings.
    pub fn for_method(
        channel: impl Into<String>,
        method: impl Into<String>,
    ) -> (Self, ReplyReceiver) {
        let channel = channel.into();
        let method = method.into();
        let (tx, rx) = oneshot::channel();
        (
            Self {
                channel: channel.clone(),
                method: method.clone(),
                tx: Some(tx),
            },
            ReplyReceiver {
                channel,
                method,
                rx,
            },
        )
    }

    /// Resolve with a success value (`Value::Null` signals "no data").
    pub fn success(self, value: impl Into<Value>) {
        self.resolve(MethodResponse::Success(value.into()));
    }

    /// Resolve with a domain error.
    pub fn error(self, code: impl Into<String>, message: impl Into<String>) {
        self.resolve(MethodResponse::Error {
            code: code.into(),
            message: message.into(),
        });
    }

    /// Resolve as "method not recognized".
    pub fn not_implemented(self) {
        self.resolve(MethodResponse::NotImplemented);
    }

    fn resolve(mut self, response: MethodResponse) {
        let Some(tx) = self.tx.take() else {
            return;
        };
        tracing::trace!(
            channel = %self.channel,
            method = %self.method,
            ?response,
            "resolving reply"
        );
        if tx.send(response).is_err() {
            tracing::debug!(
                channel = %self.channel,
                method = %self.method,
                "reply receiver was dropped before resolution arrived"
            );
        }
    }
}

impl Drop for Reply {
    fn drop(&mut self) {
        if self.tx.is_some() {
            tracing::warn!(
                channel = %self.channel,
                method = %self.method,
                "reply sink dropped without resolution"
            );
        }
    }
}

/// Receives the single reply for one method invocation.
#[derive(Debug)]
pub struct ReplyReceiver {
    channel: String,
    method: String,
    rx: oneshot::Receiver<MethodResponse>,
}

impl ReplyReceiver {
    /// Wait for the reply.
    pub async fn recv(self) -> Result<MethodResponse> {
        let Self {
            channel,
            method,
            rx,
        } = self;
        rx.await
            .map_err(|_| ChannelError::ReplyDropped { channel, method })
    }

    /// Wait for the reply from synchronous code.
    ///
    /// Must not be called from inside an async runtime.
    pub fn blocking_recv(self) -> Result<MethodResponse> {
        let Self {
            channel,
            method,
            rx,
        } = self;
        rx.blocking_recv()
            .map_err(|_| ChannelError::ReplyDropped { channel, method })
    }

    /// Check for the reply without waiting.
    ///
    /// `Ok(None)` means the invocation has not resolved yet.
    pub fn try_recv(&mut self) -> Result<Option<MethodResponse>> {
        match self.rx.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(oneshot::error::TryRecvError::Empty) => Ok(None),
            Err(oneshot::error::TryRecvError::Closed) => Err(ChannelError::ReplyDropped {
                channel: self.channel.clone(),
                method: self.method.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair() -> (Reply, ReplyReceiver) {
        Reply::for_method("test_channel", "testMethod")
    }

    #[test]
    fn test_success_resolution_reaches_receiver() {
        let (reply, receiver) = pair();

        reply.success("Alice");

        assert_eq!(
            receiver.blocking_recv(),
            Ok(MethodResponse::Success(Value::from("Alice")))
        );
    }

    #[test]
    fn test_null_success_is_distinct_from_empty_string() {
        let (reply, receiver) = pair();
        reply.success(Value::Null);
        let absent = receiver.blocking_recv().unwrap();

        let (reply, receiver) = pair();
        reply.success("");
        let empty = receiver.blocking_recv().unwrap();

        assert_eq!(absent, MethodResponse::Success(Value::Null));
        assert_eq!(empty, MethodResponse::Success(Value::from("")));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_not_implemented_resolution() {
        let (reply, receiver) = pair();

        reply.not_implemented();

        let response = receiver.blocking_recv().unwrap();
        assert!(response.is_not_implemented());
        assert!(!response.is_success());
    }

    #[test]
    fn test_error_resolution() {
        let (reply, receiver) = pair();

        reply.error("busy", "an input dialog is already showing");

        assert_eq!(
            receiver.blocking_recv(),
            Ok(MethodResponse::Error {
                code: "busy".to_string(),
                message: "an input dialog is already showing".to_string(),
            })
        );
    }

    #[test]
    fn test_dropped_sink_surfaces_reply_dropped() {
        let (reply, receiver) = pair();

        drop(reply);

        assert_eq!(
            receiver.blocking_recv(),
            Err(ChannelError::ReplyDropped {
                channel: "test_channel".to_string(),
                method: "testMethod".to_string(),
            })
        );
    }

    #[test]
    fn test_try_recv_pending_then_resolved() {
        let (reply, mut receiver) = pair();

        assert_eq!(receiver.try_recv(), Ok(None));

        reply.success(Value::Null);

        assert_eq!(
            receiver.try_recv(),
            Ok(Some(MethodResponse::Success(Value::Null)))
        );
    }

    #[tokio::test]
    async fn test_async_recv() {
        let (reply, receiver) = pair();

        reply.success("from async");

        assert_eq!(
            receiver.recv().await,
            Ok(MethodResponse::Success(Value::from("from async")))
        );
    }
}
