//! The method-call handler behind the trivia channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use trivia_channel::{CallArgs, MethodCall, MethodCallHandler, Reply};

use crate::dialog::{InputDialogConfig, InputDialogOutcome};
use crate::host::{DialogCompletion, DialogHost};
use crate::method::NativeMethod;

/// Error code sent when an input dialog is already on screen.
pub const BUSY_CODE: &str = "busy";

/// Handles the trivia channel's methods by driving a [`DialogHost`].
///
/// At most one input dialog is in flight at a time. A `showInputDialog`
/// arriving while one is showing is rejected with the [`BUSY_CODE`] error
/// rather than stacking a second dialog over the first.
pub struct NativeDialogHandler {
    host: Arc<dyn DialogHost>,
    dialog_showing: Arc<AtomicBool>,
}

impl NativeDialogHandler {
    /// Handler that presents dialogs through `host`.
    pub fn new(host: Arc<dyn DialogHost>) -> Self {
        Self {
            host,
            dialog_showing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether an input dialog is currently in flight.
    pub fn is_showing(&self) -> bool {
        self.dialog_showing.load(Ordering::SeqCst)
    }

    fn show_input_dialog(&self, args: &CallArgs, reply: Reply) {
        if self.dialog_showing.swap(true, Ordering::SeqCst) {
            tracing::warn!("input dialog already showing; rejecting invocation");
            reply.error(BUSY_CODE, "an input dialog is already showing");
            return;
        }
        let guard = ShowingGuard(Arc::clone(&self.dialog_showing));
        let config = InputDialogConfig::from_args(args);
        tracing::debug!(
            title = %config.title,
            message = %config.message,
            "presenting input dialog"
        );
        // The guard rides inside the completion: the flag clears when the
        // outcome is delivered, or when the host abandons the completion.
        let completion: DialogCompletion = Box::new(move |outcome| {
            let _guard = guard;
            match outcome {
                InputDialogOutcome::Submitted(text) => {
                    tracing::trace!("input dialog submitted");
                    reply.success(text);
                }
                InputDialogOutcome::Cancelled => {
                    tracing::trace!("input dialog cancelled");
                    reply.success(Value::Null);
                }
            }
        });
        self.host.present_input_dialog(config, completion);
    }
}

impl MethodCallHandler for NativeDialogHandler {
    fn on_method_call(&self, call: MethodCall, reply: Reply) {
        match NativeMethod::parse(call.method()) {
            NativeMethod::ShowInputDialog => self.show_input_dialog(call.args(), reply),
            NativeMethod::Unknown(name) => {
                tracing::debug!(method = %name, "method not implemented on this channel");
                reply.not_implemented();
            }
        }
    }
}

/// Clears the showing flag when the invocation ends, delivered or abandoned.
struct ShowingGuard(Arc<AtomicBool>);

impl Drop for ShowingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DialogScript, HeadlessDialogHost, ScriptStep};
    use pretty_assertions::assert_eq;
    use trivia_channel::{ChannelError, MethodResponse};

    fn handler_with_script(script: DialogScript) -> (NativeDialogHandler, Arc<HeadlessDialogHost>) {
        let host = Arc::new(HeadlessDialogHost::new(script));
        (NativeDialogHandler::new(host.clone()), host)
    }

    fn invoke(
        handler: &NativeDialogHandler,
        method: &str,
        args: CallArgs,
    ) -> trivia_channel::Result<MethodResponse> {
        let (reply, receiver) = Reply::for_method("trivia_native", method);
        handler.on_method_call(MethodCall::new(method, args), reply);
        receiver.blocking_recv()
    }

    #[test]
    fn test_ok_resolves_with_typed_text() {
        let (handler, host) = handler_with_script(DialogScript::new().step(ScriptStep::Submit {
            text: "Grace".to_string(),
        }));

        let response = invoke(
            &handler,
            "showInputDialog",
            CallArgs::new().arg("title", "Winner").arg("message", "Name?"),
        );

        assert_eq!(response, Ok(MethodResponse::Success(Value::from("Grace"))));
        assert_eq!(
            host.presented(),
            vec![InputDialogConfig::new().title("Winner").message("Name?")]
        );
        assert!(!handler.is_showing());
    }

    #[test]
    fn test_cancel_resolves_with_null() {
        let (handler, _) = handler_with_script(DialogScript::new().step(ScriptStep::Cancel));

        let response = invoke(&handler, "showInputDialog", CallArgs::new());

        assert_eq!(response, Ok(MethodResponse::Success(Value::Null)));
    }

    #[test]
    fn test_empty_submission_is_empty_string_not_null() {
        let (handler, _) = handler_with_script(DialogScript::new().step(ScriptStep::Submit {
            text: String::new(),
        }));

        let response = invoke(&handler, "showInputDialog", CallArgs::new());

        assert_eq!(response, Ok(MethodResponse::Success(Value::from(""))));
        assert_ne!(response, Ok(MethodResponse::Success(Value::Null)));
    }

    #[test]
    fn test_unknown_method_is_not_implemented() {
        let (handler, host) = handler_with_script(DialogScript::new());

        let response = invoke(&handler, "vibrate", CallArgs::new());

        assert_eq!(response, Ok(MethodResponse::NotImplemented));
        assert_eq!(host.presented(), vec![]);
    }

    #[test]
    fn test_second_invocation_while_showing_is_rejected_busy() {
        let (handler, host) = handler_with_script(
            DialogScript::new()
                .step(ScriptStep::Hold)
                .step(ScriptStep::Cancel),
        );

        let (first_reply, mut first_receiver) = Reply::for_method("trivia_native", "showInputDialog");
        handler.on_method_call(
            MethodCall::new("showInputDialog", CallArgs::new()),
            first_reply,
        );
        assert!(handler.is_showing());
        assert_eq!(first_receiver.try_recv(), Ok(None));

        let busy = invoke(&handler, "showInputDialog", CallArgs::new());
        assert_eq!(
            busy,
            Ok(MethodResponse::Error {
                code: "busy".to_string(),
                message: "an input dialog is already showing".to_string(),
            })
        );
        // The rejected invocation never reached the host.
        assert_eq!(host.presented().len(), 1);

        // Player finally dismisses the held dialog; the handler frees up.
        assert!(host.dismiss_held(InputDialogOutcome::Submitted("late".to_string())));
        assert_eq!(
            first_receiver.try_recv(),
            Ok(Some(MethodResponse::Success(Value::from("late"))))
        );
        assert!(!handler.is_showing());

        let third = invoke(&handler, "showInputDialog", CallArgs::new());
        assert_eq!(third, Ok(MethodResponse::Success(Value::Null)));
    }

    #[test]
    fn test_abandoned_completion_frees_the_handler() {
        struct AbandoningHost;
        impl DialogHost for AbandoningHost {
            fn present_input_dialog(&self, _: InputDialogConfig, completion: DialogCompletion) {
                drop(completion);
            }
        }

        let handler = NativeDialogHandler::new(Arc::new(AbandoningHost));

        let response = invoke(&handler, "showInputDialog", CallArgs::new());

        assert_eq!(
            response,
            Err(ChannelError::ReplyDropped {
                channel: "trivia_native".to_string(),
                method: "showInputDialog".to_string(),
            })
        );
        assert!(!handler.is_showing());
    }
}
