//! Stack layout and drag throughput.
//!
//! ```bash
//! cargo bench --bench layout
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use rust_cardstack::{Board, CardArena, CardData, Notifier, Stack, StackConfig, ZoneConfig, ZoneHandle};

/// A stack holding `size` identical cards.
fn filled_stack(size: usize) -> (Stack, CardArena) {
    let mut cards = CardArena::new();
    let mut notifier = Notifier::new();
    let mut stack = Stack::new(ZoneHandle::new(0), StackConfig::default());
    for _ in 0..size {
        let card = cards.insert(CardData::loot("gem", "Gem"), Vec2::ZERO);
        stack.try_add(card, Vec2::ZERO, &mut cards, &mut notifier);
    }
    (stack, cards)
}

fn bench_recompute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute_layout");

    for size in [1, 8, 32, 128] {
        let (stack, mut cards) = filled_stack(size);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}_cards")), &size, |b, _| {
            b.iter(|| stack.recompute_layout(black_box(Vec2::new(10.0, 10.0)), &mut cards))
        });
    }

    group.finish();
}

fn bench_fill_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_and_drain");

    for size in [8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}_cards")), &size, |b, &size| {
            b.iter(|| {
                let (mut stack, mut cards) = filled_stack(size);
                let members = stack.members().to_vec();
                for card in members {
                    stack.remove(card, Vec2::ZERO, &mut cards);
                }
                black_box(stack.len())
            })
        });
    }

    group.finish();
}

fn bench_drag_cycle(c: &mut Criterion) {
    let mut board = Board::default();
    let zone = board.add_zone(ZoneConfig::new("Z", Vec2::ZERO));
    let cards: Vec<_> = (0..16)
        .map(|_| board.add_card(CardData::loot("gem", "Gem"), Vec2::ZERO))
        .collect();
    board.populate_zone(zone, &cards);
    let top = cards[15];

    c.bench_function("drag_cycle", |b| {
        b.iter(|| {
            board.pointer_down(top, Vec2::ZERO);
            board.pointer_move(top, black_box(Vec2::new(500.0, 0.0)));
            board.pointer_move(top, black_box(Vec2::new(0.0, 0.0)));
            board.pointer_up(top, Vec2::ZERO);
            board.settle_all(1.0 / 60.0, 100);
            board.drain_notifications();
        })
    });
}

criterion_group!(benches, bench_recompute_layout, bench_fill_and_drain, bench_drag_cycle);
criterion_main!(benches);
