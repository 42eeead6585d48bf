use std::rc::Rc;

use villanelle_core::Blackboard;

use crate::nodes::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

impl BtStatus {
    pub fn is_running(self) -> bool {
        self == BtStatus::Running
    }

    /// `Success` or `Failure`: the activation is over and the node's state is gone.
    pub fn is_done(self) -> bool {
        !self.is_running()
    }
}

/// Condition evaluated against the effect target on every tick.
pub type Precondition<W> = Box<dyn Fn(&W) -> bool>;

/// The only place a tree touches the world.
pub type Effect<W> = Box<dyn Fn(&mut W)>;

/// A shareable (sub)tree. Nodes are immutable, so the same subtree may be reachable from several
/// parents; they will all observe the same blackboard progress.
pub type Tree<W> = Rc<Node<W>>;

/// Tick `tree` once against `world`.
pub fn execute<W: 'static>(tree: &Tree<W>, world: &mut W, blackboard: &mut Blackboard) -> BtStatus {
    tree.tick(world, blackboard)
}
