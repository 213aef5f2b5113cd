//! Native capability layer for the Trivia Tycoon client.
//!
//! The game's UI runs inside an embedded engine and reaches platform
//! features over the `trivia_native` method channel. This crate owns that
//! channel end to end:
//!
//! - [`configure`] binds the [`NativeDialogHandler`] to [`CHANNEL`] on an
//!   [`EngineMessenger`](trivia_channel::EngineMessenger)
//! - [`NativeMethod`] is the closed method vocabulary; anything outside it
//!   resolves as not-implemented
//! - [`DialogHost`] is the seam a platform backend implements to actually
//!   put a dialog on screen; [`HeadlessDialogHost`] answers from a
//!   [`DialogScript`] instead, for tests and demos
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use trivia_channel::{CallArgs, EngineMessenger, MethodCall, MethodResponse};
//! use trivia_native::{configure, DialogScript, HeadlessDialogHost, ScriptStep, CHANNEL};
//!
//! let messenger = EngineMessenger::new();
//! let script = DialogScript::new().step(ScriptStep::Submit { text: "Ada".into() });
//! configure(&messenger, Arc::new(HeadlessDialogHost::new(script)));
//!
//! let response = messenger
//!     .invoke_method(CHANNEL, MethodCall::new("showInputDialog", CallArgs::new()))
//!     .blocking_recv()?;
//! assert_eq!(response, MethodResponse::Success("Ada".into()));
//! # Ok::<(), trivia_channel::ChannelError>(())
//! ```

mod dialog;
mod handler;
mod headless;
mod host;
mod method;
mod registrar;

pub use dialog::{InputDialogConfig, InputDialogOutcome, DEFAULT_MESSAGE, DEFAULT_TITLE};
pub use handler::{NativeDialogHandler, BUSY_CODE};
pub use headless::{DialogScript, HeadlessDialogHost, ScriptStep};
pub use host::{DialogCompletion, DialogHost};
pub use method::NativeMethod;
pub use registrar::{configure, CHANNEL};
