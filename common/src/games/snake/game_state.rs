use std::time::Duration;

use serde::Serialize;

use crate::config::YamlConfigSerializer;
use crate::games::SessionRng;
use crate::{log, log_debug};
use super::autopilot::{autopilot_for, BoardView, TurnStrategy};
use super::point::Point;
use super::point_map::PointMap;
use super::settings::{SnakeSettings, MAX_SPEED, MIN_FIELD_SIZE, MIN_SPEED};
use super::entity::{Segment, Snake};
use super::types::{DeathReason, GameStatus, Heading, StyleToken, Turn};

/// Upper bound on random probes per food item; placement gives up after this.
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 1000;
/// Largest even side length whose cells all pack into 16 bits per axis.
pub const MAX_FIELD_SIZE: u16 = u16::MAX - 1;

const SPECIAL_FOOD_MULTIPLIER: u64 = 10;
const STEP_TIME_UNIT_MS: u64 = 50;

/// Rounds up to an even side length, saturating at [`MAX_FIELD_SIZE`].
fn even_size(value: u16) -> u16 {
    let even = u32::from(value).div_ceil(2) * 2;
    u16::try_from(even).map_or(MAX_FIELD_SIZE, |size| size.min(MAX_FIELD_SIZE))
}

/// Plain snapshot of a game for logging.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameDump {
    pub food: Vec<Point>,
    /// Tail first.
    pub snake: Vec<Point>,
    pub head: (Point, Heading),
    pub tail: (Point, Heading),
    pub score: u64,
    pub size: u16,
    pub dead: bool,
}

impl GameDump {
    pub fn to_yaml(&self) -> Result<String, String> {
        YamlConfigSerializer::to_yaml(self)
    }
}

/// Single-player snake on a square grid.
///
/// One instance lives for a whole session and is only touched from the UI
/// thread: the input routine writes `turn`, `paused`, `labels`, `auto` and
/// the setters, and the frame gate calls [`step`](Self::step).
#[derive(Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: PointMap<Option<StyleToken>>,
    score: u64,
    size: u16,
    speed: u8,
    wrap: bool,
    death_reason: Option<DeathReason>,
    grow: bool,
    colour: StyleToken,
    style_count: usize,
    settings: SnakeSettings,
    autopilot: Box<dyn TurnStrategy>,
    rng: SessionRng,
    /// Steering for the next tick only; cleared by every step.
    pub turn: Turn,
    pub paused: bool,
    pub labels: bool,
    pub auto: bool,
}

impl SnakeGameState {
    /// `style_count` is the number of colour schemes special food can pick from.
    pub fn new(settings: SnakeSettings, style_count: usize, rng: SessionRng) -> Self {
        let mut state = Self {
            snake: Snake::new(),
            food: PointMap::new(),
            score: 0,
            size: settings.initial_size,
            speed: settings.initial_speed,
            wrap: settings.wrap,
            death_reason: None,
            grow: false,
            colour: StyleToken::default(),
            style_count,
            autopilot: autopilot_for(settings.autopilot),
            settings,
            rng,
            turn: Turn::None,
            paused: false,
            labels: false,
            auto: false,
        };
        state.reset(false);
        state
    }

    pub fn with_seed(settings: SnakeSettings, style_count: usize, seed: u64) -> Self {
        Self::new(settings, style_count, SessionRng::new(seed))
    }

    /// A full reset starts a new game. A partial reset only reseeds the snake
    /// and food, keeping score, speed and size; it pauses unless `auto` is on.
    pub fn reset(&mut self, partial: bool) {
        self.food.clear();
        self.snake.clear();
        if !partial {
            self.score = 0;
            self.speed = self.settings.initial_speed.clamp(MIN_SPEED, MAX_SPEED);
            self.size = even_size(self.settings.initial_size.max(MIN_FIELD_SIZE));
            self.colour = StyleToken::default();
            self.auto = false;
        }
        self.death_reason = None;
        self.turn = Turn::None;
        self.paused = partial && !self.auto;
        self.grow = false;
        self.autopilot.reset();

        let bottom = self.size - 1;
        self.snake.push_head(Point::new(0, bottom), Heading::North);
        self.snake.push_head(Point::new(0, bottom - 1), Heading::North);
        self.add_food(None);

        if partial {
            log!(
                "Level up: {0}x{0} grid, speed {1}, score {2}",
                self.size,
                self.speed,
                self.score
            );
        } else {
            log!("New game on a {0}x{0} grid (seed {1})", self.size, self.rng.seed());
        }
    }

    /// Cell reached by moving one step from `from`, or `None` when that step
    /// leaves a non-wrapping grid.
    pub fn next_position(from: Point, heading: Heading, size: u16, wrap: bool) -> Option<Point> {
        let (dx, dy) = heading.delta();
        let size = i32::from(size);
        let mut x = i32::from(from.x) + dx;
        let mut y = i32::from(from.y) + dy;

        if wrap {
            x = x.rem_euclid(size);
            y = y.rem_euclid(size);
        }
        if x >= size || y >= size {
            return None;
        }
        Point::try_new(x, y).ok()
    }

    /// Advances the game by one tick.
    ///
    /// A collision leaves the snake and food untouched and only marks the
    /// game dead. Stepping a dead game returns the recorded reason again.
    pub fn step(&mut self) -> Result<(), DeathReason> {
        if let Some(reason) = self.death_reason {
            return Err(reason);
        }

        let (head, heading) = self.snake.head();

        if self.auto {
            let board = BoardView {
                head,
                heading,
                size: self.size,
                wrap: self.wrap,
                snake: &self.snake,
                food: &self.food,
            };
            if let Some(turn) = self.autopilot.next_turn(&board) {
                self.turn = turn;
            }
        }

        let next_heading = heading.turned(self.turn);
        self.turn = Turn::None;

        let Some(next_head) = Self::next_position(head, next_heading, self.size, self.wrap) else {
            return Err(self.kill(DeathReason::WallCollision));
        };
        if self.snake.contains(next_head) {
            return Err(self.kill(DeathReason::SelfCollision));
        }

        self.snake.push_head(next_head, next_heading);

        let eaten = self.food.remove(next_head);
        if self.grow || eaten.is_some() {
            let special = eaten.flatten();
            let multiplier = if special.is_some() { SPECIAL_FOOD_MULTIPLIER } else { 1 };
            let gained = self.snake.len() as u64 * u64::from(self.speed) * multiplier;
            self.score += gained;
            self.grow = false;
            if let Some(style) = special {
                self.colour = style;
            }
            log_debug!(
                "Ate at ({}, {}): +{} (length {}, score {})",
                next_head.x,
                next_head.y,
                gained,
                self.snake.len(),
                self.score
            );
        } else {
            self.snake.pop_tail();
        }

        if self.snake.len() == self.cell_count() {
            self.set_speed(self.speed.saturating_add(1));
            self.set_size(self.size.saturating_add(1));
            self.reset(true);
        }

        if self.food.is_empty()
            || (self.food.len() < self.min_food() && self.rng.chance(self.settings.food_spawn_chance))
        {
            self.add_food(None);
        }

        Ok(())
    }

    fn kill(&mut self, reason: DeathReason) -> DeathReason {
        self.death_reason = Some(reason);
        log!(
            "Game over ({:?}): length {}, score {}",
            reason,
            self.snake.len(),
            self.score
        );
        reason
    }

    /// `Some(true)` forces special food, `Some(false)` forces plain food and
    /// `None` rolls the configured special chance.
    fn roll_style(&mut self, special: Option<bool>) -> Option<StyleToken> {
        let special = special.unwrap_or_else(|| self.rng.chance(self.settings.special_food_chance));
        if !special || self.style_count == 0 {
            return None;
        }
        Some(StyleToken(self.rng.random_range(0..self.style_count)))
    }

    /// Drops one food item on a random free cell. Returns `None` when the
    /// board is full or no free cell turned up within
    /// [`FOOD_PLACEMENT_ATTEMPTS`] probes.
    pub fn add_food(&mut self, special: Option<bool>) -> Option<Point> {
        let style = self.roll_style(special);
        if self.food.len() + self.snake.len() >= self.cell_count() {
            return None;
        }

        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            let point = Point::new(
                self.rng.random_range(0..self.size),
                self.rng.random_range(0..self.size),
            );
            if self.food.contains(point) || self.snake.contains(point) {
                continue;
            }
            self.food.insert(point, style);
            log_debug!("Food at ({}, {}), style {:?}", point.x, point.y, style);
            return Some(point);
        }

        log_debug!("No free cell found after {} attempts", FOOD_PLACEMENT_ATTEMPTS);
        None
    }

    /// Turns every cell not covered by the snake into food.
    pub fn fill_food(&mut self, special: Option<bool>) {
        for x in 0..self.size {
            for y in 0..self.size {
                let point = Point::new(x, y);
                if self.snake.contains(point) {
                    continue;
                }
                let style = self.roll_style(special);
                self.food.insert(point, style);
            }
        }
        log!("Filled the board with {} food", self.food.len());
    }

    /// The next step grows the snake whether or not it eats.
    pub fn grow(&mut self) {
        self.grow = true;
    }

    pub fn next_colour(&mut self) {
        if self.style_count == 0 {
            return;
        }
        self.colour = StyleToken((self.colour.0 + 1) % self.style_count);
    }

    pub fn set_autopilot(&mut self, autopilot: Box<dyn TurnStrategy>) {
        self.autopilot = autopilot;
    }

    /// Only ever grows the grid, rounding up to an even side length.
    pub fn set_size(&mut self, value: u16) {
        self.size = even_size(self.size.max(value));
    }

    pub fn set_speed(&mut self, value: u8) {
        self.speed = value.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_dead(&self) -> bool {
        self.death_reason.is_some()
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn status(&self) -> GameStatus {
        if self.is_dead() {
            GameStatus::Dead
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Active
        }
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        usize::from(self.size).pow(2)
    }

    /// Interval between ticks: 500ms at speed 1 down to 50ms at speed 10.
    pub fn step_time(&self) -> Duration {
        Duration::from_millis(STEP_TIME_UNIT_MS * (u64::from(MAX_SPEED) + 1 - u64::from(self.speed)))
    }

    /// Food count below which a new item may spawn each tick.
    pub fn min_food(&self) -> usize {
        let per_food = usize::try_from(self.settings.cells_per_food).unwrap_or(usize::MAX).max(1);
        self.cell_count().div_ceil(per_food)
    }

    pub fn colour(&self) -> StyleToken {
        self.colour
    }

    pub fn style_count(&self) -> usize {
        self.style_count
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn head(&self) -> (Point, Heading) {
        self.snake.head()
    }

    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    pub fn food(&self) -> impl Iterator<Item = (Point, Option<StyleToken>)> + '_ {
        self.food.iter().map(|(point, style)| (point, *style))
    }

    /// Head first.
    pub fn snake(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.snake.segments()
    }

    pub fn dump(&self) -> GameDump {
        GameDump {
            food: self.food.keys().collect(),
            snake: self.snake.points().collect(),
            head: self.snake.head(),
            tail: self.snake.tail(),
            score: self.score,
            size: self.size,
            dead: self.is_dead(),
        }
    }
}
