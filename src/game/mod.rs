mod geometry;
mod obstacle;
mod player;
mod session;
mod spawner;

pub use geometry::Rect;
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{Player, PlayerState};
pub use session::{GamePhase, GameSession};
pub use spawner::ObstacleSpawner;
