//! Binds the trivia capability onto an engine messenger.

use std::sync::Arc;

use trivia_channel::{EngineMessenger, MethodChannel};

use crate::handler::NativeDialogHandler;
use crate::host::DialogHost;

/// Channel name the game client addresses.
pub const CHANNEL: &str = "trivia_native";

/// Bind the native dialog handler to its channel on `messenger`.
///
/// Called once at startup, after the engine is up and a platform
/// [`DialogHost`] exists. Configuring again replaces the previous binding,
/// which the messenger logs. The returned channel lets the embedder unbind
/// at teardown with [`MethodChannel::clear_method_call_handler`].
pub fn configure(messenger: &EngineMessenger, host: Arc<dyn DialogHost>) -> MethodChannel {
    let channel = MethodChannel::new(messenger, CHANNEL);
    channel.set_method_call_handler(NativeDialogHandler::new(host));
    tracing::debug!(channel = CHANNEL, "configured trivia native bridge");
    channel
}
