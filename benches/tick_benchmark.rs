use criterion::{Criterion, black_box, criterion_group, criterion_main};
use grimace::classifier::Expression;
use grimace::config::GameConfig;
use grimace::game::{GameSession, Player};

fn session_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("tick_with_traffic", |b| {
        // Guaranteed spawns, placed so the run never ends.
        let config = GameConfig {
            spawn_chance: 1.0,
            low_obstacle_height: 0.0,
            high_obstacle_clearance: 500.0,
            ..GameConfig::default()
        };
        let mut session = GameSession::with_seed(config, 7);
        session.start();
        session.set_expression(Expression::Neutral);
        b.iter(|| {
            session.tick();
            black_box(session.score());
        });
    });

    group.bench_function("tick_idle_field", |b| {
        let config = GameConfig {
            spawn_chance: 0.0,
            ..GameConfig::default()
        };
        let mut session = GameSession::with_seed(config, 7);
        session.start();
        session.set_expression(Expression::Neutral);
        b.iter(|| {
            session.tick();
            black_box(session.tick_count());
        });
    });

    group.finish();
}

fn player_physics_benchmark(c: &mut Criterion) {
    c.bench_function("player_jump_cycle", |b| {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        b.iter(|| {
            player.apply_expression(black_box(Expression::Happy));
            player.update();
            black_box(player.bounding_box());
        });
    });
}

criterion_group!(benches, session_tick_benchmark, player_physics_benchmark);
criterion_main!(benches);
