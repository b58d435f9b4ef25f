//! Shell Memory
//!
//! Flat name → value store backing `set`, `print` and `echo $NAME`.
//! There is no scoping: every command sees the same variables.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: HashMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite unconditionally.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// `None` means the variable was never set. An empty value is `Some("")`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().collect() }
    }
}
