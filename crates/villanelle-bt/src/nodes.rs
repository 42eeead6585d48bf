use core::fmt;

use villanelle_core::{BbKey, Blackboard, NodeId};

use crate::bt::{BtStatus, Effect, Precondition, Tree};

/// Blackboard record of an action that has started but not yet fired its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pub ticks_required: u32,
    /// Busy ticks still to burn before the effect fires.
    pub ticks_done: u32,
}

/// Blackboard record of a sequence or selector: the child to resume at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeState {
    pub current_index: usize,
}

pub struct ActionNode<W> {
    id: NodeId,
    precondition: Precondition<W>,
    effect: Effect<W>,
    ticks_required: u32,
}

impl<W> ActionNode<W> {
    pub(crate) fn new(
        id: NodeId,
        precondition: Precondition<W>,
        effect: Effect<W>,
        ticks_required: u32,
    ) -> Self {
        Self {
            id,
            precondition,
            effect,
            ticks_required,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn ticks_required(&self) -> u32 {
        self.ticks_required
    }

    pub fn state_key(&self) -> BbKey<ActionState> {
        BbKey::new(self.id)
    }

    fn tick(&self, world: &mut W, blackboard: &mut Blackboard) -> BtStatus {
        if !(self.precondition)(&*world) {
            return BtStatus::Failure;
        }

        let key = self.state_key();
        let ticks_required = self.ticks_required;
        let state = blackboard.get_or_insert_with(key, || ActionState {
            ticks_required,
            ticks_done: ticks_required,
        });

        if state.ticks_done > 0 {
            state.ticks_done -= 1;
            return BtStatus::Running;
        }

        (self.effect)(world);
        tracing::trace!(node = %self.id, "action effect fired");
        terminate(blackboard, key, BtStatus::Success)
    }
}

/// Stateless conditional pass-through. A closed guard skips its child without resetting it.
pub struct GuardNode<W> {
    precondition: Precondition<W>,
    child: Tree<W>,
    negate: bool,
}

impl<W: 'static> GuardNode<W> {
    pub(crate) fn new(precondition: Precondition<W>, child: Tree<W>, negate: bool) -> Self {
        Self {
            precondition,
            child,
            negate,
        }
    }

    pub fn child(&self) -> &Tree<W> {
        &self.child
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    fn tick(&self, world: &mut W, blackboard: &mut Blackboard) -> BtStatus {
        let holds = (self.precondition)(&*world);
        if holds != self.negate {
            self.child.tick(world, blackboard)
        } else {
            BtStatus::Failure
        }
    }
}

/// Children plus identity, shared by sequences and selectors.
pub struct CompositeNode<W> {
    id: NodeId,
    children: Vec<Tree<W>>,
}

impl<W: 'static> CompositeNode<W> {
    pub(crate) fn new(id: NodeId, children: Vec<Tree<W>>) -> Self {
        Self { id, children }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn children(&self) -> &[Tree<W>] {
        &self.children
    }

    pub fn state_key(&self) -> BbKey<CompositeState> {
        BbKey::new(self.id)
    }

    /// Walks children from the stored cursor. A child reporting `advance_on` moves the cursor
    /// within the same call; any other terminal status ends the composite with that status, and
    /// running the cursor off the end ends it with `advance_on`.
    fn tick(&self, world: &mut W, blackboard: &mut Blackboard, advance_on: BtStatus) -> BtStatus {
        if self.children.is_empty() {
            return advance_on;
        }

        let key = self.state_key();
        let mut index = blackboard
            .get_or_insert_with(key, CompositeState::default)
            .current_index;

        while let Some(child) = self.children.get(index) {
            let status = child.tick(world, blackboard);
            if status == BtStatus::Running {
                blackboard.set(key, CompositeState { current_index: index });
                return BtStatus::Running;
            }
            if status != advance_on {
                return terminate(blackboard, key, status);
            }
            index += 1;
        }

        terminate(blackboard, key, advance_on)
    }
}

/// A behavior-tree node. The set of kinds is closed; [`Node::tick`] is the only dispatch point.
pub enum Node<W> {
    Action(ActionNode<W>),
    Guard(GuardNode<W>),
    Sequence(CompositeNode<W>),
    Selector(CompositeNode<W>),
}

impl<W: 'static> Node<W> {
    pub fn tick(&self, world: &mut W, blackboard: &mut Blackboard) -> BtStatus {
        match self {
            Node::Action(action) => action.tick(world, blackboard),
            Node::Guard(guard) => guard.tick(world, blackboard),
            Node::Sequence(seq) => seq.tick(world, blackboard, BtStatus::Success),
            Node::Selector(sel) => sel.tick(world, blackboard, BtStatus::Failure),
        }
    }

    /// Blackboard identity; guards have none.
    pub fn id(&self) -> Option<NodeId> {
        match self {
            Node::Action(action) => Some(action.id()),
            Node::Guard(_) => None,
            Node::Sequence(c) | Node::Selector(c) => Some(c.id()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Action(_) => "action",
            Node::Guard(_) => "guard",
            Node::Sequence(_) => "sequence",
            Node::Selector(_) => "selector",
        }
    }

    /// Whether this node currently holds blackboard state, i.e. is mid-execution.
    pub fn is_active(&self, blackboard: &Blackboard) -> bool {
        self.id().is_some_and(|id| blackboard.contains_node(id))
    }
}

impl<W> fmt::Debug for Node<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Action(a) => f
                .debug_struct("Action")
                .field("id", &a.id)
                .field("ticks_required", &a.ticks_required)
                .finish_non_exhaustive(),
            Node::Guard(g) => f
                .debug_struct("Guard")
                .field("negate", &g.negate)
                .field("child", &g.child)
                .finish_non_exhaustive(),
            Node::Sequence(c) => f
                .debug_struct("Sequence")
                .field("id", &c.id)
                .field("children", &c.children)
                .finish(),
            Node::Selector(c) => f
                .debug_struct("Selector")
                .field("id", &c.id)
                .field("children", &c.children)
                .finish(),
        }
    }
}

fn terminate<T: 'static>(blackboard: &mut Blackboard, key: BbKey<T>, status: BtStatus) -> BtStatus {
    blackboard.remove(key);
    status
}
