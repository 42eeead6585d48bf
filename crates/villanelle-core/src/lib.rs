//! Deterministic, engine-agnostic behavior-tree kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod id;
pub mod rng;
pub mod value;

pub use blackboard::{BbKey, Blackboard};
pub use id::{NodeId, NodeIdGen};
pub use rng::{DeterministicRng, SplitMix64};
pub use value::Value;
