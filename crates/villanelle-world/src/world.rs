use villanelle_core::{DeterministicRng, SplitMix64, Value};

use crate::error::Result;
use crate::locations::LocationGraph;
use crate::variables::{ScopedVariables, VariableStore};

/// Everything the story knows: places, who and what exists, and story variables in three scopes
/// (global, per agent, per item).
///
/// Registries are append-only and keep registration order. Names are identities; keeping them
/// unique is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: LocationGraph,
    agents: Vec<String>,
    items: Vec<String>,
    variables: VariableStore,
    agent_variables: ScopedVariables,
    item_variables: ScopedVariables,
    rng: SplitMix64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
            ..Self::default()
        }
    }

    // Locations

    pub fn add_location<S: AsRef<str>>(&mut self, name: &str, adjacent: &[S]) {
        self.locations.add_location(name, adjacent);
    }

    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.locations.are_adjacent(a, b)
    }

    pub fn next_location(&self, start: &str, destination: &str) -> Result<String> {
        self.locations.next_location(start, destination)
    }

    pub fn locations(&self) -> &LocationGraph {
        &self.locations
    }

    // Registries

    pub fn add_agent(&mut self, name: impl Into<String>) -> String {
        let name = name.into();
        self.agents.push(name.clone());
        name
    }

    pub fn add_item(&mut self, name: impl Into<String>) -> String {
        let name = name.into();
        self.items.push(name.clone());
        name
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    // Global variables

    pub fn set_variable(&mut self, name: &str, value: impl Into<Value>) {
        self.variables.set(name, value.into());
    }

    /// Reading an unset variable is not an error: it is logged and reads as `None`.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        let value = self.variables.get(name);
        if value.is_none() {
            tracing::debug!(variable = name, "variable not set");
        }
        value
    }

    pub fn is_variable_not_set(&self, name: &str) -> bool {
        !self.variables.is_set(name)
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    // Agent variables

    pub fn set_agent_variable(&mut self, agent: &str, name: &str, value: impl Into<Value>) {
        self.agent_variables.set(agent, name, value.into());
    }

    pub fn agent_variable(&self, agent: &str, name: &str) -> Option<&Value> {
        let value = self.agent_variables.get(agent, name);
        if value.is_none() {
            tracing::debug!(agent, variable = name, "agent variable not set");
        }
        value
    }

    pub fn is_agent_variable_not_set(&self, agent: &str, name: &str) -> bool {
        !self.agent_variables.is_set(agent, name)
    }

    // Item variables

    pub fn set_item_variable(&mut self, item: &str, name: &str, value: impl Into<Value>) {
        self.item_variables.set(item, name, value.into());
    }

    pub fn item_variable(&self, item: &str, name: &str) -> Option<&Value> {
        let value = self.item_variables.get(item, name);
        if value.is_none() {
            tracing::debug!(item, variable = name, "item variable not set");
        }
        value
    }

    pub fn is_item_variable_not_set(&self, item: &str, name: &str) -> bool {
        !self.item_variables.is_set(item, name)
    }

    /// Uniform integer in `min..=max` from the world's seeded generator.
    pub fn random_number(&mut self, min: i64, max: i64) -> i64 {
        self.rng.next_in_range(min, max)
    }
}
