//! Input-dialog configuration and outcomes.

use trivia_channel::CallArgs;

/// What the input dialog shows.
///
/// Both fields have fixed fallbacks, so a dialog can always present; callers
/// sending no arguments get a generic prompt rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputDialogConfig {
    /// Window title.
    pub title: String,
    /// Prompt shown above the text field.
    pub message: String,
}

/// Title used when the caller sends none.
pub const DEFAULT_TITLE: &str = "Title";
/// Prompt used when the caller sends none.
pub const DEFAULT_MESSAGE: &str = "Enter text";

impl Default for InputDialogConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl InputDialogConfig {
    /// Create a configuration with both fallbacks in place.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the prompt shown above the text field.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Build a configuration from invocation arguments.
    ///
    /// Absent or non-string `title` / `message` entries fall back to the
    /// defaults. An empty string is a present value and is kept verbatim.
    pub fn from_args(args: &CallArgs) -> Self {
        let mut config = Self::new();
        if let Some(title) = args.str("title") {
            config = config.title(title);
        }
        if let Some(message) = args.str("message") {
            config = config.message(message);
        }
        config
    }
}

/// How the player dismissed the input dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputDialogOutcome {
    /// Confirmed with whatever was in the field, empty string included.
    Submitted(String),
    /// Dismissed without confirming; any typed text is discarded.
    Cancelled,
}
