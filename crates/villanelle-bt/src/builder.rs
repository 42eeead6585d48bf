use std::rc::Rc;

use villanelle_core::{NodeId, NodeIdGen};

use crate::bt::Tree;
use crate::nodes::{ActionNode, CompositeNode, GuardNode, Node};

/// Builds trees whose stateful nodes draw ids from a single generator.
///
/// Every tree ticked against one blackboard must come from the same builder.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    ids: NodeIdGen,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stateful nodes built so far.
    pub fn nodes_built(&self) -> u64 {
        self.ids.issued()
    }

    fn next_id(&self) -> NodeId {
        self.ids.next_id()
    }

    /// Action that spends one busy tick before its effect fires.
    pub fn action<W: 'static>(
        &self,
        precondition: impl Fn(&W) -> bool + 'static,
        effect: impl Fn(&mut W) + 'static,
    ) -> Tree<W> {
        self.action_with_ticks(precondition, effect, 1)
    }

    /// Action reporting `Running` for `ticks_required` ticks, then firing `effect` and succeeding
    /// on the next one. Zero fires immediately.
    pub fn action_with_ticks<W: 'static>(
        &self,
        precondition: impl Fn(&W) -> bool + 'static,
        effect: impl Fn(&mut W) + 'static,
        ticks_required: u32,
    ) -> Tree<W> {
        Rc::new(Node::Action(ActionNode::new(
            self.next_id(),
            Box::new(precondition),
            Box::new(effect),
            ticks_required,
        )))
    }

    /// Zero-delay action, for narrative state changes that take no time.
    pub fn instant<W: 'static>(
        &self,
        precondition: impl Fn(&W) -> bool + 'static,
        effect: impl Fn(&mut W) + 'static,
    ) -> Tree<W> {
        self.action_with_ticks(precondition, effect, 0)
    }

    pub fn guard<W: 'static>(
        &self,
        precondition: impl Fn(&W) -> bool + 'static,
        child: Tree<W>,
    ) -> Tree<W> {
        self.guard_with(precondition, child, false)
    }

    pub fn neg_guard<W: 'static>(
        &self,
        precondition: impl Fn(&W) -> bool + 'static,
        child: Tree<W>,
    ) -> Tree<W> {
        self.guard_with(precondition, child, true)
    }

    pub fn guard_with<W: 'static>(
        &self,
        precondition: impl Fn(&W) -> bool + 'static,
        child: Tree<W>,
        negate: bool,
    ) -> Tree<W> {
        Rc::new(Node::Guard(GuardNode::new(
            Box::new(precondition),
            child,
            negate,
        )))
    }

    /// Succeeds once every child has succeeded, left to right; fails on the first failure.
    pub fn sequence<W: 'static>(&self, children: Vec<Tree<W>>) -> Tree<W> {
        Rc::new(Node::Sequence(CompositeNode::new(self.next_id(), children)))
    }

    /// Succeeds on the first child success; fails once every child has failed.
    pub fn selector<W: 'static>(&self, children: Vec<Tree<W>>) -> Tree<W> {
        Rc::new(Node::Selector(CompositeNode::new(self.next_id(), children)))
    }
}
