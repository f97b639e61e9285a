use std::time::Duration;

use crate::games::TickScheduler;
use crate::log;
use super::game_state::SnakeGameState;
use super::types::{DeathReason, Turn};

/// Player and debug input, already decoupled from any key layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Turn),
    AddFood,
    AddSpecialFood,
    FillFood,
    Grow,
    NextColour,
    Dump,
    SpeedUp,
    SpeedDown,
    TogglePause,
    /// Starts a new game when dead, toggles pause otherwise.
    PauseOrRestart,
    Reset,
    ToggleWrap,
    ToggleAuto,
    ToggleLabels,
    IncreaseSize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No tick due yet.
    Idle,
    /// A tick was due but the game is paused or over.
    Held,
    Stepped,
    Died(DeathReason),
}

/// Owns one game and the scheduler that paces it.
#[derive(Debug)]
pub struct SnakeSession {
    game: SnakeGameState,
    scheduler: TickScheduler,
}

impl SnakeSession {
    pub fn new(game: SnakeGameState) -> Self {
        Self {
            game,
            scheduler: TickScheduler::new(),
        }
    }

    pub fn game(&self) -> &SnakeGameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut SnakeGameState {
        &mut self.game
    }

    /// Called once per rendered frame with the time since the session began.
    pub fn on_frame(&mut self, now: Duration) -> FrameOutcome {
        if !self.scheduler.poll(now, self.game.step_time()) {
            return FrameOutcome::Idle;
        }
        if self.game.paused || self.game.is_dead() {
            return FrameOutcome::Held;
        }

        match self.game.step() {
            Ok(()) => FrameOutcome::Stepped,
            Err(reason) => FrameOutcome::Died(reason),
        }
    }

    /// Applies one input command. `Dump` returns the YAML snapshot it logged.
    pub fn apply(&mut self, command: SessionCommand) -> Result<Option<String>, String> {
        let game = &mut self.game;
        match command {
            SessionCommand::Turn(turn) => game.turn = turn,
            SessionCommand::AddFood => {
                game.add_food(None);
            }
            SessionCommand::AddSpecialFood => {
                game.add_food(Some(true));
            }
            SessionCommand::FillFood => game.fill_food(None),
            SessionCommand::Grow => game.grow(),
            SessionCommand::NextColour => game.next_colour(),
            SessionCommand::Dump => {
                let yaml = game.dump().to_yaml()?;
                log!("Game dump:\n{}", yaml);
                return Ok(Some(yaml));
            }
            SessionCommand::SpeedUp => game.set_speed(game.speed().saturating_add(1)),
            SessionCommand::SpeedDown => game.set_speed(game.speed().saturating_sub(1)),
            SessionCommand::TogglePause => game.paused = !game.paused,
            SessionCommand::PauseOrRestart => {
                if game.is_dead() {
                    game.reset(false);
                } else {
                    game.paused = !game.paused;
                }
            }
            SessionCommand::Reset => game.reset(false),
            SessionCommand::ToggleWrap => game.set_wrap(!game.wrap()),
            SessionCommand::ToggleAuto => {
                game.auto = !game.auto;
                log!("Autopilot {}", if game.auto { "on" } else { "off" });
            }
            SessionCommand::ToggleLabels => game.labels = !game.labels,
            SessionCommand::IncreaseSize => game.set_size(game.size().saturating_add(1)),
        }
        Ok(None)
    }

    /// Stops the game loop; later frames are always idle.
    pub fn stop(&mut self) {
        if !self.scheduler.is_cancelled() {
            self.scheduler.cancel();
            log!("Session stopped with score {}", self.game.score());
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.scheduler.is_cancelled()
    }
}
