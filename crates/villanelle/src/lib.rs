//! Behavior-tree narrative engine.
//!
//! Driver code builds trees with the engine's [`TreeBuilder`], binds them to agents or registers
//! them as user-interaction trees, then advances the story with [`Engine::world_tick`] and turns
//! player choices into effects with [`Engine::execute_user_action`]. Everything here is
//! single-threaded and synchronous; `Running` is the only way a tree waits.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod scene;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use interaction::{InteractionLeaves, UserInteraction, UserInteractionObject};
pub use scene::Scene;

pub use villanelle_bt::{execute, BtStatus, Node, Tree, TreeBuilder};
pub use villanelle_core::{Blackboard, NodeId, Value};
pub use villanelle_world::{LocationGraph, NavError, World};
