//! The method vocabulary of the trivia channel.

use std::fmt;

/// Closed set of methods the channel understands.
///
/// Parsing is total: every wire name maps to a variant, unrecognized names
/// included, so dispatch is an exhaustive match with no stringly fallback.
/// Adding a method means adding a variant, and the compiler then walks every
/// dispatch site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NativeMethod {
    /// Present a one-line input dialog and return what the player typed.
    ShowInputDialog,
    /// A method this channel does not understand; carries the wire name.
    Unknown(String),
}

impl NativeMethod {
    /// Wire name of [`NativeMethod::ShowInputDialog`].
    pub const SHOW_INPUT_DIALOG: &'static str = "showInputDialog";

    /// Map a wire method name onto the closed set.
    pub fn parse(name: &str) -> Self {
        match name {
            Self::SHOW_INPUT_DIALOG => Self::ShowInputDialog,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire name this variant answers to.
    pub fn name(&self) -> &str {
        match self {
            Self::ShowInputDialog => Self::SHOW_INPUT_DIALOG,
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for NativeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
