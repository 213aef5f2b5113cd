//! Method channels between the embedded UI engine and native capabilities.
//!
//! The engine and the native side of the app talk over named channels. A
//! capability binds a handler to its channel name; the engine addresses it
//! by that name with a [`MethodCall`] and waits on a single reply:
//!
//! - [`MethodCall`] names the method and carries its [`CallArgs`]
//! - [`Reply`] is the single-use reply sink; every resolution method
//!   consumes it, so each invocation resolves exactly once
//! - [`EngineMessenger`] routes invocations to bound handlers;
//!   [`MethodChannel`] is one capability's view of its channel name
//!
//! # Example
//!
//! ```
//! use trivia_channel::{
//!     CallArgs, EngineMessenger, MethodCall, MethodChannel, MethodResponse, Reply,
//! };
//!
//! let messenger = EngineMessenger::new();
//! let channel = MethodChannel::new(&messenger, "greetings");
//! channel.set_method_call_handler(|call: MethodCall, reply: Reply| match call.method() {
//!     "hello" => reply.success("world"),
//!     _ => reply.not_implemented(),
//! });
//!
//! let response = messenger
//!     .invoke_method("greetings", MethodCall::new("hello", CallArgs::new()))
//!     .blocking_recv()?;
//! assert_eq!(response, MethodResponse::Success("world".into()));
//! # Ok::<(), trivia_channel::ChannelError>(())
//! ```

mod call;
mod error;
mod messenger;
mod reply;

pub use call::{CallArgs, MethodCall};
pub use error::{ChannelError, Result};
pub use messenger::{EngineMessenger, MethodCallHandler, MethodChannel};
pub use reply::{MethodResponse, Reply, ReplyReceiver};
