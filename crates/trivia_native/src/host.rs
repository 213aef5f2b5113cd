//! Platform seam for presenting dialogs.

use crate::dialog::{InputDialogConfig, InputDialogOutcome};

/// Callback a host fires once with the dialog's outcome.
pub type DialogCompletion = Box<dyn FnOnce(InputDialogOutcome) + Send>;

/// Presents native dialogs on behalf of the channel handler.
///
/// Implementations wrap a platform toolkit (an Android activity, a desktop
/// shell) or a script for headless runs. Presentation must not block: the
/// host returns once the dialog is up and fires `completion` when the player
/// dismisses it, possibly from another thread.
///
/// Dropping `completion` unfired abandons the invocation: the waiting side
/// observes a dropped reply and the handler frees itself for the next one.
pub trait DialogHost: Send + Sync {
    /// Show a one-line input dialog and deliver its outcome to `completion`.
    fn present_input_dialog(&self, config: InputDialogConfig, completion: DialogCompletion);
}
