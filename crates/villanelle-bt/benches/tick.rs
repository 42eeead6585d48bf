use villanelle_bt::{BtStatus, Tree, TreeBuilder};
use villanelle_core::Blackboard;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[derive(Default)]
struct World {
    steps: u64,
}

fn always_true(_world: &World) -> bool {
    true
}

fn step(world: &mut World) {
    world.steps = world.steps.wrapping_add(1);
}

fn bench_bt_tick(c: &mut Criterion) {
    let bt = TreeBuilder::new();

    let instants = (0..32)
        .map(|_| bt.instant(always_true, step))
        .collect::<Vec<Tree<World>>>();
    let root = bt.sequence(instants);

    let mut world = World::default();
    let mut blackboard = Blackboard::new();

    c.bench_function("villanelle-bt/tick(instant actions=32)", |b| {
        b.iter(|| {
            let status = root.tick(&mut world, &mut blackboard);
            black_box(status == BtStatus::Success);
        })
    });

    let busy = (0..8)
        .map(|_| bt.action_with_ticks(always_true, step, 4))
        .collect::<Vec<Tree<World>>>();
    let selector = bt.selector(vec![bt.sequence(busy)]);

    c.bench_function("villanelle-bt/tick(resumable actions=8)", |b| {
        b.iter(|| {
            black_box(selector.tick(&mut world, &mut blackboard));
        })
    });
    black_box(world.steps);
}

criterion_group!(benches, bench_bt_tick);
criterion_main!(benches);
