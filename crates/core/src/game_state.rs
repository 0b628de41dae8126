//! Game state module - manages the complete snake session
//!
//! This module ties together the grid, the snake body, direction buffering,
//! fruit placement and scoring. It advances exactly one cell per tick and
//! exposes the frame cadence that decides when a tick happens.
//!
//! # Collision protocol
//!
//! A move into a wall (with wrapping off) or into the snake's own body does not
//! end the game immediately. The first failing tick freezes the snake and enters
//! [`Phase::PendingGameOver`]; a second consecutive failing tick enters
//! [`Phase::GameOver`]. Any successful move in between returns to
//! [`Phase::Running`].

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::rng::{EntropyError, EntropySource};
use crate::snake::SnakeBody;
use crate::types::*;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Normal move; length unchanged
    Moved,
    /// Ate the fruit and grew by one segment
    Ate,
    /// First collision: the snake is frozen for one grace tick
    Blocked,
    /// Second consecutive collision: the session is over
    GameOver,
    /// The session was already in a terminal phase
    Halted,
}

/// Result of trying to make sure a fruit is on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitPlacement {
    AlreadyPlaced,
    Placed(usize),
    /// No empty cell is left: the snake fills the grid
    Saturated,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    body: SnakeBody,
    x: i32,
    y: i32,
    direction: Direction,
    requested: Direction,
    score: u32,
    fruit_placed: bool,
    phase: Phase,
    frames_per_tick: u32,
    current_frame: u32,
    screen_wrap: bool,
    lsd_mode: bool,
    /// Monotonic session id (increments on reset).
    episode_id: u32,
}

impl GameState {
    /// Create a new session with a centered one-segment snake
    pub fn new(config: GameConfig) -> Self {
        let config = config.clamped();
        let grid = Grid::new(config.grid_width, config.grid_height);
        let body = SnakeBody::new(grid.len(), 0);

        let mut state = Self {
            config,
            grid,
            body,
            x: 0,
            y: 0,
            direction: Direction::RIGHT,
            requested: Direction::NONE,
            score: 0,
            fruit_placed: false,
            phase: Phase::Running,
            frames_per_tick: config.frames_per_tick,
            current_frame: 0,
            screen_wrap: config.screen_wrap,
            lsd_mode: false,
            episode_id: 0,
        };
        state.reset_session();
        state
    }

    /// Start a new session. Wrap and cosmetic toggles are kept.
    pub fn reset(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.reset_session();
        info!(episode = self.episode_id, "session reset");
    }

    fn reset_session(&mut self) {
        self.grid.clear();

        self.x = (self.grid.width() / 2) as i32;
        self.y = (self.grid.height() / 2) as i32;
        self.direction = Direction::RIGHT;
        self.requested = Direction::NONE;

        let start = self.grid.index(self.x as u16, self.y as u16);
        self.body.reset(start);
        self.grid.set(start, Tile::Snake);

        self.score = 0;
        self.fruit_placed = false;
        self.phase = Phase::Running;
        self.frames_per_tick = self.config.frames_per_tick;
        self.current_frame = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    /// Head position
    pub fn head(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn requested_direction(&self) -> Direction {
        self.requested
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fruit_placed(&self) -> bool {
        self.fruit_placed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn frames_per_tick(&self) -> u32 {
        self.frames_per_tick
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn screen_wrap(&self) -> bool {
        self.screen_wrap
    }

    pub fn lsd_mode(&self) -> bool {
        self.lsd_mode
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn set_screen_wrap(&mut self, on: bool) {
        self.screen_wrap = on;
    }

    /// Change the cadence; zero is clamped to 1. Restarts the frame count.
    pub fn set_frames_per_tick(&mut self, frames: u32) {
        self.frames_per_tick = frames.max(MIN_FRAMES_PER_TICK);
        self.current_frame = 0;
        debug!(frames_per_tick = self.frames_per_tick, "cadence changed");
    }

    /// Buffer a direction change from a key press.
    ///
    /// The request is derived from the current direction (see
    /// [`Direction::steer`]) and overwrites any earlier request made since the
    /// last tick.
    pub fn request_direction(&mut self, pressed: Direction) {
        self.requested = self.direction.steer(pressed);
    }

    /// Apply a gameplay action.
    ///
    /// Returns false for actions the state does not handle (`ToggleFullscreen`,
    /// `Quit`) and for a restart while the session is still live.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Up | GameAction::Down | GameAction::Left | GameAction::Right => {
                if let Some(pressed) = action.direction() {
                    self.request_direction(pressed);
                }
                true
            }
            GameAction::Restart => {
                if self.phase.is_terminal() {
                    self.reset();
                    true
                } else {
                    false
                }
            }
            GameAction::SpeedUp => {
                self.set_frames_per_tick(self.frames_per_tick.saturating_sub(1));
                true
            }
            GameAction::SpeedDown => {
                self.set_frames_per_tick(self.frames_per_tick.saturating_add(1));
                true
            }
            GameAction::ToggleWrap => {
                self.screen_wrap = !self.screen_wrap;
                true
            }
            GameAction::ToggleLsd => {
                self.lsd_mode = !self.lsd_mode;
                true
            }
            GameAction::ToggleFullscreen | GameAction::Quit => false,
        }
    }

    /// Count one frame; tick when the count reaches the cadence.
    ///
    /// Terminal phases neither count nor tick.
    pub fn advance_frame(&mut self) -> Option<TickOutcome> {
        if self.phase.is_terminal() {
            return None;
        }
        self.current_frame += 1;
        if self.current_frame < self.frames_per_tick {
            return None;
        }
        self.current_frame = 0;
        Some(self.tick())
    }

    /// Advance the snake by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase.is_terminal() {
            return TickOutcome::Halted;
        }

        if !self.requested.is_none() {
            self.direction = self.requested;
            self.requested = Direction::NONE;
        }

        let mut new_x = self.x + self.direction.dx as i32;
        let mut new_y = self.y + self.direction.dy as i32;
        if self.screen_wrap {
            new_x = new_x.rem_euclid(self.grid.width() as i32);
            new_y = new_y.rem_euclid(self.grid.height() as i32);
        }

        let target = match self.grid.tile_at(new_x, new_y) {
            None | Some(Tile::Snake) => return self.collide(),
            Some(tile) => tile,
        };

        // In range by the lookup above.
        let new_index = self.grid.index(new_x as u16, new_y as u16);
        let outcome = if target == Tile::Fruit {
            self.score = self.score.saturating_add(FRUIT_SCORE);
            self.fruit_placed = false;
            self.body.grow(new_index);
            TickOutcome::Ate
        } else {
            let vacated = self.body.advance(new_index);
            self.grid.set(vacated, Tile::Empty);
            TickOutcome::Moved
        };

        self.x = new_x;
        self.y = new_y;
        self.grid.set(new_index, Tile::Snake);
        self.phase = Phase::Running;
        outcome
    }

    fn collide(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::PendingGameOver;
                TickOutcome::Blocked
            }
            _ => {
                self.phase = Phase::GameOver;
                info!(
                    episode = self.episode_id,
                    phase = self.phase.as_str(),
                    score = self.score,
                    length = self.body.len(),
                    "game over"
                );
                TickOutcome::GameOver
            }
        }
    }

    /// Make sure exactly one fruit is on the grid.
    ///
    /// Rejection-samples up to `MAX_FRUIT_ATTEMPTS` random cells, then picks
    /// uniformly among the remaining empty cells. With no empty cell left the
    /// session enters [`Phase::Won`].
    pub fn place_fruit<E: EntropySource + ?Sized>(
        &mut self,
        entropy: &mut E,
    ) -> Result<FruitPlacement, EntropyError> {
        if self.fruit_placed {
            return Ok(FruitPlacement::AlreadyPlaced);
        }

        let cells = self.grid.len() as u32;
        for _ in 0..MAX_FRUIT_ATTEMPTS {
            let candidate = (entropy.next_u32()? % cells) as usize;
            if self.grid.get(candidate) == Some(Tile::Empty) {
                return Ok(self.put_fruit(candidate));
            }
        }

        let free = self.grid.count(Tile::Empty);
        if free == 0 {
            return Ok(self.saturate());
        }
        let n = entropy.next_u32()? as usize % free;
        Ok(match self.grid.nth_empty(n) {
            Some(index) => self.put_fruit(index),
            None => self.saturate(),
        })
    }

    /// Deterministic placement: the first empty cell after the head.
    ///
    /// Used when the entropy source fails.
    pub fn place_fruit_fallback(&mut self) -> FruitPlacement {
        if self.fruit_placed {
            return FruitPlacement::AlreadyPlaced;
        }
        match self.grid.next_empty_from(self.body.head() + 1) {
            Some(index) => self.put_fruit(index),
            None => self.saturate(),
        }
    }

    /// Put the fruit on a specific cell. Fails if a fruit is already placed or
    /// the cell is not empty.
    pub fn place_fruit_at(&mut self, index: usize) -> bool {
        if self.fruit_placed || self.grid.get(index) != Some(Tile::Empty) {
            return false;
        }
        self.put_fruit(index);
        true
    }

    fn put_fruit(&mut self, index: usize) -> FruitPlacement {
        self.grid.set(index, Tile::Fruit);
        self.fruit_placed = true;
        FruitPlacement::Placed(index)
    }

    fn saturate(&mut self) -> FruitPlacement {
        if self.phase != Phase::Won {
            self.phase = Phase::Won;
            info!(
                episode = self.episode_id,
                score = self.score,
                "grid saturated, session won"
            );
        }
        FruitPlacement::Saturated
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FailingEntropy, SimpleRng};

    fn state() -> GameState {
        GameState::default()
    }

    fn at(state: &GameState, x: u16, y: u16) -> usize {
        state.grid().index(x, y)
    }

    #[test]
    fn test_new_game_state() {
        let s = state();
        assert_eq!(s.head(), (7, 7));
        assert_eq!(s.direction(), Direction::RIGHT);
        assert_eq!(s.requested_direction(), Direction::NONE);
        assert_eq!(s.body().len(), 1);
        assert_eq!(s.score(), 0);
        assert!(!s.fruit_placed());
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.frames_per_tick(), DEFAULT_FRAMES_PER_TICK);
        assert_eq!(s.grid().tile_at(7, 7), Some(Tile::Snake));
        assert_eq!(s.grid().count(Tile::Snake), 1);
    }

    #[test]
    fn test_tick_moves_one_cell_and_clears_old_cell() {
        let mut s = state();
        assert_eq!(s.tick(), TickOutcome::Moved);
        assert_eq!(s.head(), (8, 7));
        assert_eq!(s.grid().tile_at(7, 7), Some(Tile::Empty));
        assert_eq!(s.grid().tile_at(8, 7), Some(Tile::Snake));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_request_committed_on_next_tick_only() {
        let mut s = state();
        s.apply_action(GameAction::Up);
        assert_eq!(s.direction(), Direction::RIGHT);
        assert_eq!(s.requested_direction(), Direction::UP);

        s.tick();
        assert_eq!(s.direction(), Direction::UP);
        assert_eq!(s.requested_direction(), Direction::NONE);
        assert_eq!(s.head(), (7, 8));
    }

    #[test]
    fn test_last_request_before_tick_wins() {
        let mut s = state();
        s.apply_action(GameAction::Up);
        s.apply_action(GameAction::Down);
        s.tick();
        assert_eq!(s.direction(), Direction::DOWN);
    }

    #[test]
    fn test_reverse_request_keeps_current_direction() {
        let mut s = state();
        s.apply_action(GameAction::Left);
        assert_eq!(s.requested_direction(), Direction::RIGHT);
        s.tick();
        assert_eq!(s.head(), (8, 7));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut s = state();
        let fruit = at(&s, 8, 7);
        assert!(s.place_fruit_at(fruit));

        assert_eq!(s.tick(), TickOutcome::Ate);
        assert_eq!(s.score(), FRUIT_SCORE);
        assert_eq!(s.body().len(), 2);
        assert!(!s.fruit_placed());
        // Old tail stays put.
        assert_eq!(s.grid().tile_at(7, 7), Some(Tile::Snake));
        assert_eq!(s.grid().tile_at(8, 7), Some(Tile::Snake));
        assert_eq!(s.grid().count(Tile::Fruit), 0);
    }

    #[test]
    fn test_wall_collision_has_one_grace_tick() {
        let mut s = state();
        for _ in 0..7 {
            assert_eq!(s.tick(), TickOutcome::Moved);
        }
        assert_eq!(s.head(), (14, 7));

        assert_eq!(s.tick(), TickOutcome::Blocked);
        assert_eq!(s.phase(), Phase::PendingGameOver);
        assert_eq!(s.head(), (14, 7));

        assert_eq!(s.tick(), TickOutcome::GameOver);
        assert_eq!(s.phase(), Phase::GameOver);
        assert_eq!(s.tick(), TickOutcome::Halted);
        assert_eq!(s.head(), (14, 7));
    }

    #[test]
    fn test_successful_move_clears_pending() {
        let mut s = state();
        for _ in 0..7 {
            s.tick();
        }
        assert_eq!(s.tick(), TickOutcome::Blocked);

        s.apply_action(GameAction::Up);
        assert_eq!(s.tick(), TickOutcome::Moved);
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.head(), (14, 8));
    }

    #[test]
    fn test_wrap_moves_to_opposite_edge() {
        let mut s = state();
        s.set_screen_wrap(true);
        for _ in 0..8 {
            s.tick();
        }
        assert_eq!(s.head(), (0, 7));
        assert_eq!(s.phase(), Phase::Running);
    }

    #[test]
    fn test_collision_with_own_body() {
        let mut s = state();
        let body = at(&s, 8, 7);
        s.grid_mut().set(body, Tile::Snake);
        assert_eq!(s.tick(), TickOutcome::Blocked);
        assert_eq!(s.head(), (7, 7));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut s = state();
        s.tick();
        assert!(!s.apply_action(GameAction::Restart));
        assert_eq!(s.head(), (8, 7));

        for _ in 0..8 {
            s.tick();
        }
        assert_eq!(s.phase(), Phase::GameOver);
        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.head(), (7, 7));
        assert_eq!(s.episode_id(), 1);
    }

    #[test]
    fn test_reset_keeps_toggles_and_restores_cadence() {
        let mut s = state();
        s.apply_action(GameAction::ToggleWrap);
        s.apply_action(GameAction::ToggleLsd);
        s.apply_action(GameAction::SpeedUp);
        s.reset();
        assert!(s.screen_wrap());
        assert!(s.lsd_mode());
        assert_eq!(s.frames_per_tick(), DEFAULT_FRAMES_PER_TICK);
    }

    #[test]
    fn test_speed_actions_clamp_and_reset_frame_counter() {
        let mut s = state();
        s.advance_frame();
        assert_eq!(s.current_frame(), 1);

        for _ in 0..10 {
            s.apply_action(GameAction::SpeedUp);
        }
        assert_eq!(s.frames_per_tick(), 1);
        assert_eq!(s.current_frame(), 0);

        s.apply_action(GameAction::SpeedDown);
        assert_eq!(s.frames_per_tick(), 2);

        s.set_frames_per_tick(0);
        assert_eq!(s.frames_per_tick(), 1);
    }

    #[test]
    fn test_advance_frame_ticks_on_cadence() {
        let mut s = state();
        for _ in 0..DEFAULT_FRAMES_PER_TICK - 1 {
            assert_eq!(s.advance_frame(), None);
        }
        assert_eq!(s.advance_frame(), Some(TickOutcome::Moved));
        assert_eq!(s.current_frame(), 0);
        assert_eq!(s.head(), (8, 7));
    }

    #[test]
    fn test_host_actions_are_not_handled() {
        let mut s = state();
        assert!(!s.apply_action(GameAction::Quit));
        assert!(!s.apply_action(GameAction::ToggleFullscreen));
    }

    #[test]
    fn test_place_fruit_puts_exactly_one() {
        let mut s = state();
        let mut rng = SimpleRng::new(42);
        let placed = s.place_fruit(&mut rng).unwrap();
        assert!(matches!(placed, FruitPlacement::Placed(_)));
        assert!(s.fruit_placed());
        assert_eq!(s.grid().count(Tile::Fruit), 1);

        assert_eq!(s.place_fruit(&mut rng).unwrap(), FruitPlacement::AlreadyPlaced);
        assert_eq!(s.grid().count(Tile::Fruit), 1);
    }

    #[test]
    fn test_place_fruit_propagates_entropy_failure() {
        let mut s = state();
        assert!(s.place_fruit(&mut FailingEntropy).is_err());
        assert!(!s.fruit_placed());
        assert_eq!(s.grid().count(Tile::Fruit), 0);
    }

    #[test]
    fn test_fallback_picks_cell_after_head() {
        let mut s = state();
        let placed = s.place_fruit_fallback();
        assert_eq!(placed, FruitPlacement::Placed(at(&s, 8, 7)));
    }

    #[test]
    fn test_place_fruit_finds_last_free_cell() {
        let mut s = GameState::new(GameConfig::new(3, 3, 1, false));
        let head = s.body().head();
        for i in 0..9 {
            if i != head && i != 5 {
                s.grid_mut().set(i, Tile::Snake);
            }
        }
        // One free cell out of nine: sampling may miss, the exact pick may not.
        let placed = s.place_fruit(&mut SimpleRng::new(3)).unwrap();
        assert_eq!(placed, FruitPlacement::Placed(5));
    }

    #[test]
    fn test_saturated_grid_is_won() {
        let mut s = GameState::new(GameConfig::new(2, 2, 1, false));
        for i in 0..4 {
            s.grid_mut().set(i, Tile::Snake);
        }
        assert_eq!(
            s.place_fruit(&mut SimpleRng::new(1)).unwrap(),
            FruitPlacement::Saturated
        );
        assert_eq!(s.phase(), Phase::Won);
        assert_eq!(s.place_fruit_fallback(), FruitPlacement::Saturated);
        assert_eq!(s.tick(), TickOutcome::Halted);
        assert!(s.apply_action(GameAction::Restart));
    }
}
