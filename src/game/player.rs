use crate::classifier::Expression;
use crate::config::GameConfig;

use super::Rect;

/// Behavioral state driven by the classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Running,
    Jumping,
    Ducking,
}

/// The runner. `y` is the feet position (down-positive); the sprite box
/// extends `height` units upward from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    x: f32,
    y: f32,
    vy: f32,
    width: f32,
    normal_height: f32,
    duck_height: f32,
    height: f32,
    gravity: f32,
    jump_impulse: f32,
    ground_y: f32,
    state: PlayerState,
}

impl Player {
    /// New player at the ground line, running.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.player_x,
            y: config.ground_y(),
            vy: 0.0,
            width: config.player_width,
            normal_height: config.player_height,
            duck_height: config.duck_height,
            height: config.player_height,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            ground_y: config.ground_y(),
            state: PlayerState::Running,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn vy(&self) -> f32 {
        self.vy
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_grounded(&self) -> bool {
        self.y >= self.ground_y
    }

    /// Map the latest expression onto a behavioral state. Airborne players
    /// ignore this entirely: no mid-air ducks, no double jumps.
    pub fn apply_expression(&mut self, expression: Expression) {
        if !self.is_grounded() {
            return;
        }
        match expression {
            Expression::Happy | Expression::Surprised => {
                self.jump();
                self.state = PlayerState::Jumping;
            }
            Expression::Sad | Expression::Angry | Expression::Fearful | Expression::Disgusted => {
                self.state = PlayerState::Ducking;
            }
            Expression::Neutral => {
                self.state = PlayerState::Running;
            }
        }
    }

    // An impulse only ever applies from the ground; airborne calls do
    // nothing.
    fn jump(&mut self) {
        if self.is_grounded() {
            self.vy = self.jump_impulse;
        }
    }

    /// One tick of physics: position integrates first, then gravity feeds
    /// the velocity, then the ground clamp.
    pub fn update(&mut self) {
        self.y += self.vy;
        self.vy += self.gravity;

        if self.y > self.ground_y {
            self.y = self.ground_y;
            self.vy = 0.0;
            if self.state == PlayerState::Jumping {
                self.state = PlayerState::Running;
            }
        }

        self.height = if self.state == PlayerState::Ducking && self.is_grounded() {
            self.duck_height
        } else {
            self.normal_height
        };
    }

    /// Current sprite box for collision checks and the renderer.
    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y - self.height, self.width, self.height)
    }
}
