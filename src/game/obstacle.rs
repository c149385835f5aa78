use rand::Rng;

use crate::config::GameConfig;

use super::Rect;

/// Obstacle placement class, fixed at spawn.
///
/// Low sits on the ground and has to be jumped over; High hangs above the
/// duck gap and has to be ducked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    speed: f32,
    kind: ObstacleKind,
}

impl Obstacle {
    /// Spawn at the right edge with a uniformly random kind.
    pub fn spawn(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let kind = if rng.gen_bool(0.5) {
            ObstacleKind::Low
        } else {
            ObstacleKind::High
        };
        Self::with_kind(config, kind, config.playfield_width)
    }

    /// Deterministic constructor; `x` is the left edge.
    pub fn with_kind(config: &GameConfig, kind: ObstacleKind, x: f32) -> Self {
        let ground_y = config.ground_y();
        let (height, y) = match kind {
            ObstacleKind::Low => (
                config.low_obstacle_height,
                ground_y - config.low_obstacle_height,
            ),
            ObstacleKind::High => (
                config.high_obstacle_height,
                ground_y - config.high_obstacle_clearance,
            ),
        };
        Self {
            x,
            y,
            width: config.obstacle_width,
            height,
            speed: config.obstacle_speed,
            kind,
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// One tick of leftward motion.
    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    /// Fully past the left edge of the playfield.
    pub fn is_offscreen(&self) -> bool {
        self.x < -self.width
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Strict AABB test against the player's box.
    pub fn hits(&self, player_box: &Rect) -> bool {
        self.bounding_box().overlaps(player_box)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::classifier::Expression;
    use crate::game::Player;

    use super::*;

    #[test]
    fn low_obstacle_rests_on_the_ground() {
        let config = GameConfig::default();
        let obstacle = Obstacle::with_kind(&config, ObstacleKind::Low, 500.0);
        let bb = obstacle.bounding_box();
        assert_eq!(bb.bottom(), config.ground_y());
        assert_eq!(bb.h, config.low_obstacle_height);
    }

    #[test]
    fn high_obstacle_leaves_a_duck_gap() {
        let config = GameConfig::default();
        let obstacle = Obstacle::with_kind(&config, ObstacleKind::High, 500.0);
        let bb = obstacle.bounding_box();
        assert_eq!(bb.top(), config.ground_y() - config.high_obstacle_clearance);
        // The gap under it clears a ducking player but not a running one.
        assert!(config.ground_y() - bb.bottom() > config.duck_height);
        assert!(config.ground_y() - bb.bottom() < config.player_height);
    }

    #[test]
    fn update_moves_left_at_constant_speed() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::with_kind(&config, ObstacleKind::Low, 500.0);
        obstacle.update();
        assert_eq!(obstacle.x(), 500.0 - config.obstacle_speed);
        obstacle.update();
        assert_eq!(obstacle.x(), 500.0 - 2.0 * config.obstacle_speed);
    }

    #[test]
    fn offscreen_boundary_is_strict() {
        let config = GameConfig::default();
        let mut obstacle =
            Obstacle::with_kind(&config, ObstacleKind::Low, -config.obstacle_width);
        assert!(!obstacle.is_offscreen());
        obstacle.update();
        assert!(obstacle.is_offscreen());
    }

    #[test]
    fn both_kinds_hit_a_running_player() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        for kind in [ObstacleKind::Low, ObstacleKind::High] {
            let obstacle = Obstacle::with_kind(&config, kind, config.player_x);
            assert!(obstacle.hits(&player.bounding_box()));
        }
    }

    #[test]
    fn ducking_player_clears_a_high_obstacle() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.apply_expression(Expression::Sad);
        player.update();

        let obstacle = Obstacle::with_kind(&config, ObstacleKind::High, config.player_x);
        assert!(!obstacle.hits(&player.bounding_box()));

        // A low one still connects.
        let low = Obstacle::with_kind(&config, ObstacleKind::Low, config.player_x);
        assert!(low.hits(&player.bounding_box()));
    }

    #[test]
    fn airborne_player_clears_a_low_obstacle() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.apply_expression(Expression::Happy);
        // Ride the jump to its apex.
        for _ in 0..20 {
            player.update();
        }
        assert!(player.y() < config.ground_y() - config.low_obstacle_height);

        let obstacle = Obstacle::with_kind(&config, ObstacleKind::Low, config.player_x);
        assert!(!obstacle.hits(&player.bounding_box()));
    }

    #[test]
    fn edge_adjacent_obstacle_is_not_a_hit() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        // Obstacle left edge exactly on the player's right edge.
        let obstacle = Obstacle::with_kind(
            &config,
            ObstacleKind::Low,
            config.player_x + config.player_width,
        );
        assert!(!obstacle.hits(&player.bounding_box()));
    }

    #[test]
    fn spawn_picks_both_kinds() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut low = 0u32;
        for _ in 0..1000 {
            let obstacle = Obstacle::spawn(&config, &mut rng);
            assert_eq!(obstacle.x(), config.playfield_width);
            if obstacle.kind() == ObstacleKind::Low {
                low += 1;
            }
        }
        // Uniform draw; allow a generous band around 50%.
        assert!((350..=650).contains(&low), "low count was {low}");
    }
}
