//! Scripted dialog host for tests and headless runs.
//!
//! A [`DialogScript`] stands in for the player: each presented dialog
//! consumes the next [`ScriptStep`]. Scripts have a JSON form so demos and
//! fixtures can keep them as data.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::dialog::{InputDialogConfig, InputDialogOutcome};
use crate::host::{DialogCompletion, DialogHost};

/// One scripted response to a presented dialog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Type `text` and press OK.
    Submit { text: String },
    /// Press Cancel.
    Cancel,
    /// Leave the dialog open; the completion is parked until
    /// [`HeadlessDialogHost::dismiss_held`] fires it.
    Hold,
}

/// Ordered responses for a headless run.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialogScript {
    steps: Vec<ScriptStep>,
}

impl DialogScript {
    /// Empty script; every presented dialog will be cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn step(mut self, step: ScriptStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Parse a script from its JSON form.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid dialog script")
    }

    /// Number of steps in the script.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Dialog host that answers from a fixed script instead of a screen.
///
/// Records every presented configuration, so tests can assert what the
/// player would have seen.
pub struct HeadlessDialogHost {
    steps: Mutex<VecDeque<ScriptStep>>,
    presented: Mutex<Vec<InputDialogConfig>>,
    held: Mutex<VecDeque<DialogCompletion>>,
}

impl HeadlessDialogHost {
    /// Host that answers with `script`, in order.
    pub fn new(script: DialogScript) -> Self {
        Self {
            steps: Mutex::new(script.steps.into()),
            presented: Mutex::new(Vec::new()),
            held: Mutex::new(VecDeque::new()),
        }
    }

    /// Configurations presented so far, oldest first.
    pub fn presented(&self) -> Vec<InputDialogConfig> {
        self.presented.lock().unwrap().clone()
    }

    /// Fire the oldest held completion with `outcome`, as if the player
    /// finally dismissed that dialog. Returns whether one was held.
    pub fn dismiss_held(&self, outcome: InputDialogOutcome) -> bool {
        let completion = self.held.lock().unwrap().pop_front();
        match completion {
            Some(completion) => {
                completion(outcome);
                true
            }
            None => false,
        }
    }
}

impl DialogHost for HeadlessDialogHost {
    fn present_input_dialog(&self, config: InputDialogConfig, completion: DialogCompletion) {
        self.presented.lock().unwrap().push(config.clone());
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(ScriptStep::Submit { text }) => completion(InputDialogOutcome::Submitted(text)),
            Some(ScriptStep::Cancel) => completion(InputDialogOutcome::Cancelled),
            Some(ScriptStep::Hold) => {
                tracing::debug!(title = %config.title, "holding dialog open");
                self.held.lock().unwrap().push_back(completion);
            }
            None => {
                tracing::warn!(title = %config.title, "dialog script exhausted; cancelling");
                completion(InputDialogOutcome::Cancelled);
            }
        }
    }
}
