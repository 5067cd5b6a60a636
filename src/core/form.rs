//! Form-state store
//!
//! The wallet keeps submitted values (transfer amount, recipient, asset) in
//! a form store owned by the surrounding page. Here that store is an
//! explicit struct the balance input writes into, instead of a reactive
//! form context: named fields holding canonical value strings, absent when
//! the user has entered nothing.
//!
//! Every write bumps `version`, even a write of the same or an absent
//! value, so callers can observe that a sync fired after a unit change.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FormState {
    values: HashMap<String, Option<String>>,
    version: u64,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a field value. `None` means "no value", which is distinct
    /// from `"0.000000000000"`.
    pub fn set_value(&mut self, name: &str, value: Option<String>) {
        self.values.insert(name.to_string(), value);
        self.version += 1;
        self.dirty = true;
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    /// Whether anything was ever written to this form.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Monotonic write counter, bumped on every commit.
    pub fn version(&self) -> u64 {
        self.version
    }
}
