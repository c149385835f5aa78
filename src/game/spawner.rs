use rand::Rng;

use crate::config::GameConfig;

/// Fixed-cadence, probabilistic spawn policy: every `interval_ticks` ticks,
/// one uniform draw decides whether an obstacle appears. No caps, no gap
/// shaping; droughts follow a geometric distribution over windows.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleSpawner {
    interval_ticks: u64,
    spawn_chance: f64,
}

impl ObstacleSpawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            interval_ticks: config.spawn_interval_ticks,
            spawn_chance: config.spawn_chance,
        }
    }

    /// Decide whether tick `tick` (1-based) spawns. Draws from the rng only
    /// on cadence ticks, so trajectories stay reproducible under a seed.
    pub fn should_spawn(&self, tick: u64, rng: &mut impl Rng) -> bool {
        if tick == 0 || tick % self.interval_ticks != 0 {
            return false;
        }
        rng.gen_range(0.0..1.0) < self.spawn_chance
    }
}
