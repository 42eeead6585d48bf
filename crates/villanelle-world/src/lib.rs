//! Narrative world model: where things are, who exists, and what the story remembers.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod locations;
pub mod variables;
pub mod world;

pub use error::{NavError, Result};
pub use locations::LocationGraph;
pub use variables::{ScopedVariables, VariableStore};
pub use world::World;
