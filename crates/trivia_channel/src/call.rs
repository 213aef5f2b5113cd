//! Method invocations crossing a platform channel.

use rustc_hash::FxHashMap;
use serde_json::Value;

/// Named arguments carried by a method invocation.
///
/// Every entry is optional and values may be `Null`. The typed accessors
/// treat a missing key, a `Null` value, and a value of the wrong type the
/// same way (`None`), which is exactly what the defaulting rules at the
/// capability boundary rely on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallArgs {
    entries: FxHashMap<String, Value>,
}

impl CallArgs {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, replacing any previous value for the key.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Raw value for `key`, if the key is present (the value may be `Null`).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// String value for `key`; `None` when absent, `Null`, or not a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Number of arguments present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One request over a platform channel: a method name plus named arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodCall {
    method: String,
    args: CallArgs,
}

impl MethodCall {
    /// Create a call.
    pub fn new(method: impl Into<String>, args: CallArgs) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }

    /// Method name of the call.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Arguments of the call.
    pub fn args(&self) -> &CallArgs {
        &self.args
    }
}
