use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::classifier::Expression;
use crate::config::GameConfig;

use super::{Obstacle, ObstacleSpawner, Player, Rect};

/// High-level lifecycle. `Start` exists only until the first start signal;
/// afterwards the session alternates between `Playing` and `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Start,
    Playing,
    GameOver,
}

/// The whole mutable game state, owned in one place: phase, score, player,
/// obstacles, spawner and the latest classifier label. The host calls
/// `set_expression` whenever the classifier publishes, `start` on the user's
/// signal, and `tick` once per frame; everything else is read-only queries
/// for the renderer.
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    score: u32,
    obstacles: Vec<Obstacle>,
    player: Player,
    spawner: ObstacleSpawner,
    expression: Expression,
    tick_count: u64,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic session: same seed, same obstacle sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            player: Player::new(&config),
            spawner: ObstacleSpawner::new(&config),
            phase: GamePhase::Start,
            score: 0,
            obstacles: Vec::new(),
            expression: Expression::Neutral,
            tick_count: 0,
            rng,
            config,
        }
    }

    /// Start or restart. A no-op while already playing, so a repeated signal
    /// cannot wipe a run in progress.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.obstacles.clear();
        self.player = Player::new(&self.config);
        self.expression = Expression::Neutral;
        self.tick_count = 0;
        info!("session started");
    }

    /// Record the latest classifier label. Takes effect on the next tick.
    pub fn set_expression(&mut self, expression: Expression) {
        self.expression = expression;
    }

    /// One simulation step. Does nothing outside `Playing`.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.tick_count += 1;

        if self.spawner.should_spawn(self.tick_count, &mut self.rng) {
            let obstacle = Obstacle::spawn(&self.config, &mut self.rng);
            debug!(kind = ?obstacle.kind(), "obstacle spawned");
            self.obstacles.push(obstacle);
        }

        // Single in-place pass: move, collide, drop the ones that left the
        // screen. A hit ends the run but the pass still finishes, so
        // obstacles passed on the same tick are still scored.
        let player_box = self.player.bounding_box();
        let mut passed = 0u32;
        let mut collided = false;
        self.obstacles.retain_mut(|obstacle| {
            obstacle.update();
            if obstacle.hits(&player_box) {
                collided = true;
            }
            if obstacle.is_offscreen() {
                passed += 1;
                return false;
            }
            true
        });
        self.score += passed;

        if collided {
            self.phase = GamePhase::GameOver;
            info!(score = self.score, "game over");
            return;
        }

        self.player.apply_expression(self.expression);
        self.player.update();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn expression(&self) -> Expression {
        self.expression
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Player box for the renderer.
    pub fn player_box(&self) -> Rect {
        self.player.bounding_box()
    }
}
