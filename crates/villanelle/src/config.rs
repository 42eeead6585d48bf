//! Engine configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Engine configuration, usually loaded from a YAML file next to the story driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Global variable set to the agent whose tree is being ticked
    #[serde(default = "default_executing_agent_variable")]
    pub executing_agent_variable: String,

    /// Prepended to every fragment appended to description or effect text
    #[serde(default = "default_text_separator")]
    pub text_separator: String,

    /// Seed for the world's random number generator
    pub seed: u64,
}

fn default_executing_agent_variable() -> String {
    "executingAgent".to_string()
}

fn default_text_separator() -> String {
    "\n".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            executing_agent_variable: default_executing_agent_variable(),
            text_separator: default_text_separator(),
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load from `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
