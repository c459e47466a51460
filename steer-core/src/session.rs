//! Per-invocation scratch state.
//!
//! A [`SessionStore`] lives inside one command context and is dropped
//! when dispatch returns; nothing persists across invocations. Values
//! live either at the top level or under a named scope.

use std::collections::HashMap;

/// Flat and scoped string storage for one command run.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
    scoped: HashMap<String, HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Sets a value under a named scope, creating the scope as needed.
    pub fn set_in(&mut self, scope: &str, key: impl Into<String>, value: impl Into<String>) {
        self.scoped
            .entry(scope.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn get_in(&self, scope: &str, key: &str) -> Option<&str> {
        self.scoped
            .get(scope)
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    /// All values under a scope, `None` when the scope was never written.
    pub fn all_in(&self, scope: &str) -> Option<&HashMap<String, String>> {
        self.scoped.get(scope)
    }

    pub fn remove_in(&mut self, scope: &str, key: &str) {
        if let Some(values) = self.scoped.get_mut(scope) {
            values.remove(key);
        }
    }

    /// Drops a whole scope.
    pub fn clear_in(&mut self, scope: &str) {
        self.scoped.remove(scope);
    }
}
