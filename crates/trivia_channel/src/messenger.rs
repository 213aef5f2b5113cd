//! Engine-side routing of method invocations to named channels.
//!
//! The [`EngineMessenger`] owns the channel registry: at most one handler per
//! channel name. [`MethodChannel`] is the handler-side view of one name, the
//! surface a capability uses to bind and unbind itself.

use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

use crate::call::MethodCall;
use crate::reply::{Reply, ReplyReceiver};

/// Receives method invocations addressed to one channel.
///
/// Implemented by capability handlers. Closures with the matching signature
/// implement it automatically, so simple handlers need no named type.
pub trait MethodCallHandler: Send + Sync {
    /// Handle one invocation. `reply` must be resolved exactly once; its
    /// consuming methods make a second resolution unrepresentable, and
    /// dropping it unresolved is logged and surfaces as an error on the
    /// invoking side.
    fn on_method_call(&self, call: MethodCall, reply: Reply);
}

impl<F> MethodCallHandler for F
where
    F: Fn(MethodCall, Reply) + Send + Sync,
{
    fn on_method_call(&self, call: MethodCall, reply: Reply) {
        self(call, reply)
    }
}

/// Routes invocations to whichever handler is bound to the named channel.
///
/// Cheap to clone; clones share one registry. Handlers run synchronously on
/// the invoking thread and decide for themselves when the reply resolves.
#[derive(Clone, Default)]
pub struct EngineMessenger {
    channels: Arc<RwLock<FxHashMap<String, Arc<dyn MethodCallHandler>>>>,
}

impl EngineMessenger {
    /// Create a messenger with no channels bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `channel`, replacing any previous binding.
    pub fn set_handler(&self, channel: impl Into<String>, handler: Arc<dyn MethodCallHandler>) {
        let channel = channel.into();
        let previous = self
            .channels
            .write()
            .unwrap()
            .insert(channel.clone(), handler);
        if previous.is_some() {
            tracing::warn!(%channel, "replacing existing method-call handler");
        } else {
            tracing::debug!(%channel, "bound method-call handler");
        }
    }

    /// Remove the handler bound to `channel`. Returns whether one was bound.
    pub fn clear_handler(&self, channel: &str) -> bool {
        let removed = self
            .channels
            .write()
            .unwrap()
            .remove(channel)
            .is_some();
        if removed {
            tracing::debug!(channel, "cleared method-call handler");
        }
        removed
    }

    /// Whether a handler is currently bound to `channel`.
    pub fn has_handler(&self, channel: &str) -> bool {
        self.channels.read().unwrap().contains_key(channel)
    }

    /// Dispatch `call` to the handler bound to `channel`.
    ///
    /// A channel nobody is bound to resolves as "not implemented" rather
    /// than erroring; an optional capability that never registered looks
    /// the same as one that rejects the method.
    pub fn invoke_method(&self, channel: &str, call: MethodCall) -> ReplyReceiver {
        let (reply, receiver) = Reply::for_method(channel, call.method());
        // Clone the handler out so the registry lock is not held across
        // dispatch; a handler may rebind or clear its own channel.
        let handler = self.channels.read().unwrap().get(channel).cloned();
        match handler {
            Some(handler) => handler.on_method_call(call, reply),
            None => {
                tracing::debug!(
                    channel,
                    method = call.method(),
                    "no handler bound for channel"
                );
                reply.not_implemented();
            }
        }
        receiver
    }
}

/// Handler-side view of one named channel.
#[derive(Clone)]
pub struct MethodChannel {
    messenger: EngineMessenger,
    name: String,
}

impl MethodChannel {
    /// Create a view of `name` on `messenger`. Binds nothing by itself.
    pub fn new(messenger: &EngineMessenger, name: impl Into<String>) -> Self {
        Self {
            messenger: messenger.clone(),
            name: name.into(),
        }
    }

    /// The channel name this view addresses.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind `handler` to this channel, replacing any previous binding.
    pub fn set_method_call_handler<H>(&self, handler: H)
    where
        H: MethodCallHandler + 'static,
    {
        self.messenger.set_handler(&self.name, Arc::new(handler));
    }

    /// Unbind this channel. Returns whether a handler was bound.
    pub fn clear_method_call_handler(&self) -> bool {
        self.messenger.clear_handler(&self.name)
    }

    /// Dispatch `call` to this channel's handler.
    pub fn invoke_method(&self, call: MethodCall) -> ReplyReceiver {
        self.messenger.invoke_method(&self.name, call)
    }
}
