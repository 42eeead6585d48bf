//! Behavior-tree runtime built on `villanelle-core`.
//!
//! Trees are immutable once built; every bit of progress a node makes between ticks lives in the
//! [`Blackboard`](villanelle_core::Blackboard) under the node's id. Re-ticking a tree resumes each
//! node from its recorded cursor.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod builder;
pub mod nodes;

pub use bt::{execute, BtStatus, Effect, Precondition, Tree};
pub use builder::TreeBuilder;
pub use nodes::{ActionNode, ActionState, CompositeNode, CompositeState, GuardNode, Node};
