use villanelle_bt::{execute, BtStatus, Node, Tree, TreeBuilder};
use villanelle_core::Blackboard;

#[derive(Debug, Default)]
struct Journal {
    fired: Vec<&'static str>,
    open: bool,
}

fn always(_: &Journal) -> bool {
    true
}

fn is_open(world: &Journal) -> bool {
    world.open
}

fn record(name: &'static str) -> impl Fn(&mut Journal) {
    move |world: &mut Journal| world.fired.push(name)
}

#[test]
fn action_runs_for_ticks_required_then_fires_once() {
    for n in 1..=4u32 {
        let bt = TreeBuilder::new();
        let tree: Tree<Journal> = bt.action_with_ticks(always, record("walk"), n);
        let mut world = Journal::default();
        let mut bb = Blackboard::new();

        for _ in 0..n {
            assert_eq!(execute(&tree, &mut world, &mut bb), BtStatus::Running);
            assert!(world.fired.is_empty());
            assert!(tree.is_active(&bb));
        }
        assert_eq!(execute(&tree, &mut world, &mut bb), BtStatus::Success);
        assert_eq!(world.fired, vec!["walk"]);
        assert!(bb.is_empty());
    }
}

#[test]
fn default_action_spends_one_busy_tick() {
    let bt = TreeBuilder::new();
    let tree: Tree<Journal> = bt.action(always, record("take"));
    let mut world = Journal::default();
    let mut bb = Blackboard::new();

    assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Running);
    assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Success);
    assert_eq!(world.fired, vec!["take"]);
}

#[test]
fn instant_action_fires_on_first_tick_without_state() {
    let bt = TreeBuilder::new();
    let tree: Tree<Journal> = bt.instant(always, record("flag"));
    let mut world = Journal::default();
    let mut bb = Blackboard::new();

    assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Success);
    assert_eq!(world.fired, vec!["flag"]);
    assert!(bb.is_empty());
}

#[test]
fn failing_precondition_never_allocates_state() {
    let bt = TreeBuilder::new();
    let tree: Tree<Journal> = bt.action_with_ticks(is_open, record("open"), 3);
    let mut world = Journal::default();
    let mut bb = Blackboard::new();

    for _ in 0..3 {
        assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Failure);
        assert!(bb.is_empty());
    }
    assert!(world.fired.is_empty());
}

#[test]
fn precondition_failure_mid_run_keeps_partial_progress() {
    let bt = TreeBuilder::new();
    let tree: Tree<Journal> = bt.action_with_ticks(is_open, record("open"), 2);
    let mut world = Journal {
        open: true,
        ..Default::default()
    };
    let mut bb = Blackboard::new();

    assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Running);
    world.open = false;
    assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Failure);
    // The action returned Failure without reaching its own terminal path, so its record stays.
    assert!(tree.is_active(&bb));

    world.open = true;
    assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Running);
    assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Success);
    assert_eq!(world.fired, vec!["open"]);
}

#[test]
fn completed_action_starts_over_on_next_activation() {
    let bt = TreeBuilder::new();
    let tree: Tree<Journal> = bt.action_with_ticks(always, record("knock"), 1);
    let mut world = Journal::default();
    let mut bb = Blackboard::new();

    for _ in 0..2 {
        assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Running);
        assert_eq!(tree.tick(&mut world, &mut bb), BtStatus::Success);
        assert!(!tree.is_active(&bb));
    }
    assert_eq!(world.fired, vec!["knock", "knock"]);
}

#[test]
fn builder_assigns_increasing_ids_to_stateful_nodes_only() {
    let bt = TreeBuilder::new();
    let a: Tree<Journal> = bt.instant(always, record("a"));
    let g = bt.guard(always, a.clone());
    let s = bt.sequence(vec![g.clone()]);

    assert!(a.id() < s.id());
    assert_eq!(g.id(), None);
    assert_eq!(bt.nodes_built(), 2);
    assert!(matches!(&*g, Node::Guard(inner) if !inner.is_negated()));
    assert_eq!(s.kind(), "sequence");
}
