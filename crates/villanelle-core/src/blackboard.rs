use std::any::Any;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::NodeId;

/// Typed handle to one node's execution record.
///
/// A node always reads and writes its record through the same `T`; the type parameter only
/// guards against a node id being reused by a node of a different kind.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbKey<T: 'static> {
    node: NodeId,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> BbKey<T> {
    pub const fn new(node: NodeId) -> Self {
        Self {
            node,
            _phantom: PhantomData,
        }
    }

    pub fn node(self) -> NodeId {
        self.node
    }
}

/// Per-node execution state for every node that is currently mid-execution.
///
/// An entry exists exactly while its node is `Running`; nodes remove their own entry before
/// reporting a terminal status.
#[derive(Default)]
pub struct Blackboard {
    values: BTreeMap<NodeId, Box<dyn Any>>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.values.contains_key(&key.node)
    }

    /// Whether `node` has a record of any type, i.e. whether it is mid-execution.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.values.contains_key(&node)
    }

    /// Ids of all nodes currently holding state, in ascending order.
    pub fn active_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.values.keys().copied()
    }

    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        self.values.insert(key.node, Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: BbKey<T>) -> Option<&T> {
        let value = self.values.get(&key.node)?;
        Some(value.downcast_ref::<T>().unwrap_or_else(|| mismatch(key.node)))
    }

    pub fn get_mut<T: 'static>(&mut self, key: BbKey<T>) -> Option<&mut T> {
        let value = self.values.get_mut(&key.node)?;
        Some(value.downcast_mut::<T>().unwrap_or_else(|| mismatch(key.node)))
    }

    /// Returns the existing record for `key`, installing `init()` first if there is none.
    pub fn get_or_insert_with<T: 'static>(
        &mut self,
        key: BbKey<T>,
        init: impl FnOnce() -> T,
    ) -> &mut T {
        let value = self
            .values
            .entry(key.node)
            .or_insert_with(|| Box::new(init()) as Box<dyn Any>);
        value.downcast_mut::<T>().unwrap_or_else(|| mismatch(key.node))
    }

    pub fn remove<T: 'static>(&mut self, key: BbKey<T>) -> Option<T> {
        let value = self.values.remove(&key.node)?;
        let value = value
            .downcast::<T>()
            .unwrap_or_else(|_| mismatch(key.node));
        Some(*value)
    }
}

impl core::fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Blackboard")
            .field("active_nodes", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn mismatch(node: NodeId) -> ! {
    panic!("blackboard type mismatch for node {node} (stored record differs from requested)")
}
