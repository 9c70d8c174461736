use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use morris::board::{Phase, Position, Side};
use morris::movegen::{legal_actions, legal_positions};
use morris::protocol::notation::parse_notation;
use morris::rules::{Game, GameConfig};
use morris::scenario::Scenario;

const MIDGAME: &str = "wm/ww.....wb.w..b......b..b/0,0";

fn preset(name: &str) -> Game {
    Game::from_scenario(&Scenario::preset(name).unwrap(), GameConfig::default()).unwrap()
}

fn bench_legal_positions(c: &mut Criterion) {
    let opening = Game::default();
    let jump = preset("jump");
    let remove = preset("remove");

    c.bench_function("legal_positions_set", |b| {
        b.iter(|| {
            legal_positions(
                black_box(Phase::Set),
                Side::White,
                None,
                black_box(opening.board()),
            )
        })
    });
    c.bench_function("legal_positions_jump", |b| {
        b.iter(|| legal_positions(black_box(Phase::Jump), Side::White, None, black_box(jump.board())))
    });
    c.bench_function("legal_positions_remove", |b| {
        b.iter(|| {
            legal_positions(
                black_box(Phase::Remove),
                Side::White,
                None,
                black_box(remove.board()),
            )
        })
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let game = preset("move");
    let jump = preset("jump");
    c.bench_function("legal_actions_move", |b| {
        b.iter(|| legal_actions(black_box(Phase::Move), Side::White, black_box(game.board())))
    });
    c.bench_function("legal_actions_jump", |b| {
        b.iter(|| legal_actions(black_box(Phase::Jump), Side::White, black_box(jump.board())))
    });
}

fn bench_apply(c: &mut Criterion) {
    let game = preset("move");
    let from = Position::new(10).unwrap();
    let to = Position::new(11).unwrap();
    c.bench_function("apply_single_step", |b| {
        b.iter(|| {
            let mut g = game.clone();
            g.move_token(black_box(from), black_box(to))
        })
    });
}

fn bench_parse_notation(c: &mut Criterion) {
    c.bench_function("parse_notation_midgame", |b| {
        b.iter(|| parse_notation(black_box(MIDGAME)))
    });
}

fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("random_200_actions", |b| {
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| {
            let mut game = Game::default();
            for _ in 0..200 {
                let actions = game.legal_actions();
                let Some(&action) = actions.choose(&mut rng) else {
                    break;
                };
                let _ = game.apply(action);
            }
            game
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_legal_positions,
    bench_legal_actions,
    bench_apply,
    bench_parse_notation,
    bench_random_playout
);
criterion_main!(benches);
