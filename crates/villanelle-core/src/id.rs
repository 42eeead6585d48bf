use core::cell::Cell;
use core::fmt;

/// Identity of a stateful tree node (action, sequence, selector).
///
/// The id is the only key a node uses to reach its blackboard record, so it must stay stable for
/// the node's lifetime and must never be handed out twice by the same generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic node id allocator.
///
/// Owned by whichever context also owns the blackboard the nodes will write to; two generators
/// may hand out the same ids, so trees built by different generators must not share a blackboard.
#[derive(Debug, Default)]
pub struct NodeIdGen {
    next: Cell<u64>,
}

impl NodeIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> NodeId {
        let id = self.next.get();
        self.next.set(id.checked_add(1).unwrap_or_else(|| {
            panic!("node id space exhausted after {id} allocations")
        }));
        NodeId(id)
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.get()
    }
}
