use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.json";

/// Playfield, physics and spawn tuning. Defaults match the original tuning
/// of the game: an 800x450 field with the ground line 40 units above the
/// bottom edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ground_margin: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub duck_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    pub low_obstacle_height: f32,
    pub high_obstacle_height: f32,
    pub high_obstacle_clearance: f32,
    pub spawn_interval_ticks: u64,
    pub spawn_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: 800.0,
            playfield_height: 450.0,
            ground_margin: 40.0,
            player_x: 50.0,
            player_width: 50.0,
            player_height: 80.0,
            duck_height: 40.0,
            gravity: 0.8,
            jump_impulse: -18.0,
            obstacle_width: 40.0,
            obstacle_speed: 7.0,
            low_obstacle_height: 60.0,
            high_obstacle_height: 50.0,
            high_obstacle_clearance: 100.0,
            spawn_interval_ticks: 100,
            spawn_chance: 0.5,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground line (player feet rest here).
    pub fn ground_y(&self) -> f32 {
        self.playfield_height - self.ground_margin
    }

    /// Loads config from the default config file.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(CONFIG_FILE)
    }

    /// Saves config to a specified path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
