use std::collections::BTreeMap;

use villanelle_core::Value;

/// Flat name → value store. Values may be overwritten but are never removed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableStore {
    values: BTreeMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One [`VariableStore`] per owner (agent or item), created on first write.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScopedVariables {
    scopes: BTreeMap<String, VariableStore>,
}

impl ScopedVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, owner: &str, name: &str, value: Value) {
        self.scopes
            .entry(owner.to_owned())
            .or_default()
            .set(name, value);
    }

    pub fn get(&self, owner: &str, name: &str) -> Option<&Value> {
        self.scopes.get(owner)?.get(name)
    }

    pub fn is_set(&self, owner: &str, name: &str) -> bool {
        self.get(owner, name).is_some()
    }

    pub fn scope(&self, owner: &str) -> Option<&VariableStore> {
        self.scopes.get(owner)
    }
}
