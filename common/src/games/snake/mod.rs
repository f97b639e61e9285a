pub mod autopilot;
mod entity;
mod game_state;
mod point;
mod point_map;
mod session;
mod settings;
mod types;

pub use autopilot::{autopilot_for, BoardView, FoodSeekerPilot, SweepPilot, TurnStrategy};
pub use entity::{Segment, Snake};
pub use game_state::{GameDump, SnakeGameState, FOOD_PLACEMENT_ATTEMPTS, MAX_FIELD_SIZE};
pub use point::{pack_coords, Point};
pub use point_map::PointMap;
pub use session::{FrameOutcome, SessionCommand, SnakeSession};
pub use settings::{AutopilotKind, SnakeSettings, MAX_SPEED, MIN_FIELD_SIZE, MIN_SPEED};
pub use types::{DeathReason, GameStatus, Heading, StyleToken, Turn};
