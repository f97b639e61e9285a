use std::fmt::Debug;

use crate::log_debug;
use super::game_state::SnakeGameState;
use super::point::Point;
use super::point_map::PointMap;
use super::settings::AutopilotKind;
use super::entity::Snake;
use super::types::{Heading, StyleToken, Turn};

/// Read-only view of the board handed to a [`TurnStrategy`] each tick.
pub struct BoardView<'a> {
    pub head: Point,
    pub heading: Heading,
    pub size: u16,
    pub wrap: bool,
    pub snake: &'a Snake,
    pub food: &'a PointMap<Option<StyleToken>>,
}

/// Produces steering input in place of the player.
pub trait TurnStrategy: Debug {
    /// `None` leaves the pending player turn untouched.
    fn next_turn(&mut self, board: &BoardView<'_>) -> Option<Turn>;

    /// Called on every reset so no half-finished manoeuvre leaks into a new board.
    fn reset(&mut self) {}
}

pub fn autopilot_for(kind: AutopilotKind) -> Box<dyn TurnStrategy> {
    match kind {
        AutopilotKind::Sweep => Box::new(SweepPilot::default()),
        AutopilotKind::FoodSeeker => Box::new(FoodSeekerPilot),
    }
}

/// Sweeps the board in horizontal passes: right along the top row, down the
/// right edge, then back and forth above the bottom row, returning along the
/// bottom row. Every turn at a pass end is a U-turn, so the second half is
/// queued for the following tick.
///
/// Not a Hamiltonian cycle on every board size; on some sizes the snake can
/// still run into itself.
#[derive(Debug, Default)]
pub struct SweepPilot {
    follow_up: Option<Turn>,
}

impl TurnStrategy for SweepPilot {
    fn next_turn(&mut self, board: &BoardView<'_>) -> Option<Turn> {
        if let Some(turn) = self.follow_up.take() {
            log_debug!("autopilot at ({}, {}): follow-up {:?}", board.head.x, board.head.y, turn);
            return Some(turn);
        }

        let size = u32::from(board.size);
        let x = u32::from(board.head.x);
        let y = u32::from(board.head.y);

        let (turn, follow_up) = if y == 0 && x + 1 < size {
            (Turn::Right, Turn::Right)
        } else if y + 2 == size && x + 2 < size && x > 0 {
            (Turn::Left, Turn::Left)
        } else if y + 1 == size && (x + 1 == size || x == 0) {
            (Turn::Right, Turn::None)
        } else {
            return None;
        };

        log_debug!("autopilot at ({}, {}): {:?} then {:?}", x, y, turn, follow_up);
        self.follow_up = Some(follow_up);
        Some(turn)
    }

    fn reset(&mut self) {
        self.follow_up = None;
    }
}

/// Greedy: of the three reachable cells, takes the safe one closest to the
/// nearest food. Goes straight when nothing is safe.
#[derive(Debug, Default)]
pub struct FoodSeekerPilot;

impl FoodSeekerPilot {
    fn distance(a: Point, b: Point, board: &BoardView<'_>) -> u32 {
        let dx = u32::from(a.x.abs_diff(b.x));
        let dy = u32::from(a.y.abs_diff(b.y));

        if board.wrap {
            let size = u32::from(board.size);
            dx.min(size.saturating_sub(dx)) + dy.min(size.saturating_sub(dy))
        } else {
            dx + dy
        }
    }

    fn nearest_food(board: &BoardView<'_>) -> Option<Point> {
        board
            .food
            .keys()
            .min_by_key(|food| Self::distance(board.head, *food, board))
    }
}

impl TurnStrategy for FoodSeekerPilot {
    fn next_turn(&mut self, board: &BoardView<'_>) -> Option<Turn> {
        let target = Self::nearest_food(board);
        let mut best: Option<(Turn, u32)> = None;

        for turn in [Turn::None, Turn::Left, Turn::Right] {
            let heading = board.heading.turned(turn);
            let Some(next) = SnakeGameState::next_position(board.head, heading, board.size, board.wrap)
            else {
                continue;
            };
            if board.snake.contains(next) {
                continue;
            }

            let distance = target.map_or(0, |food| Self::distance(next, food, board));
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((turn, distance));
            }
        }

        let turn = best.map_or(Turn::None, |(turn, _)| turn);
        log_debug!("food seeker at ({}, {}) towards {:?}: {:?}", board.head.x, board.head.y, target, turn);
        Some(turn)
    }
}
