//! Input Dialog Demo (scripted player, no window)
//!
//! Run with:
//! `cargo run -p trivia_native --example input_dialog`

use std::sync::Arc;

use trivia_channel::{CallArgs, EngineMessenger, MethodCall};
use trivia_native::{configure, DialogScript, HeadlessDialogHost, NativeMethod, CHANNEL};

const SCRIPT: &str = r#"{
    "steps": [
        { "type": "submit", "text": "Ada Lovelace" },
        { "type": "cancel" }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let messenger = EngineMessenger::new();
    let host = Arc::new(HeadlessDialogHost::new(DialogScript::from_json(SCRIPT)?));
    configure(&messenger, host);

    // The game asks for a name; the scripted player types one and hits OK.
    let response = messenger
        .invoke_method(
            CHANNEL,
            MethodCall::new(
                NativeMethod::SHOW_INPUT_DIALOG,
                CallArgs::new()
                    .arg("title", "New High Score")
                    .arg("message", "Enter your name"),
            ),
        )
        .blocking_recv()?;
    println!("submitted dialog -> {response:?}");

    // No arguments this time, so the dialog falls back to its stock title
    // and prompt. The player cancels; a null comes back, which is not the
    // same thing as an empty string.
    let response = messenger
        .invoke_method(
            CHANNEL,
            MethodCall::new(NativeMethod::SHOW_INPUT_DIALOG, CallArgs::new()),
        )
        .blocking_recv()?;
    println!("cancelled dialog -> {response:?}");

    // A method this channel never learned.
    let response = messenger
        .invoke_method(CHANNEL, MethodCall::new("openSettings", CallArgs::new()))
        .blocking_recv()?;
    println!("unknown method -> {response:?}");

    Ok(())
}
