//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, pixel rendering, terminal input).
//!
//! # Grid Dimensions
//!
//! The default playfield is a 15x15 grid. Row `y = 0` is the **bottom** row:
//! the pixel buffer the game renders into is stored bottom-up, so moving "up"
//! on screen is `+y`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Minimum duration of one frame-driver iteration |
//! | `DEFAULT_FRAMES_PER_TICK` | 5 | Frames between two simulation ticks |
//! | `MIN_FRAMES_PER_TICK` | 1 | Cadence floor (fastest speed) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Tile, DEFAULT_GRID_WIDTH};
//!
//! // Directions are unit vectors with y pointing up.
//! assert_eq!(Direction::UP.dy, 1);
//! assert_eq!(Direction::RIGHT.steer(Direction::LEFT), Direction::RIGHT);
//!
//! assert_eq!(GameAction::Up.direction(), Some(Direction::UP));
//! assert_eq!(GameAction::SpeedUp.as_str(), "speedUp");
//!
//! assert_eq!(Tile::default(), Tile::Empty);
//! assert_eq!(DEFAULT_GRID_WIDTH, 15);
//! ```

/// Default grid width in cells (15 columns)
pub const DEFAULT_GRID_WIDTH: u16 = 15;

/// Default grid height in cells (15 rows)
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Smallest accepted grid side; anything smaller is clamped up.
pub const MIN_GRID_SIDE: u16 = 2;

/// Largest accepted grid side; anything larger is clamped down.
pub const MAX_GRID_SIDE: u16 = 256;

/// Minimum duration of one frame-driver iteration in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Frames between simulation ticks after a reset
pub const DEFAULT_FRAMES_PER_TICK: u32 = 5;

/// Cadence floor; a cadence of zero is clamped to this value
pub const MIN_FRAMES_PER_TICK: u32 = 1;

/// Points awarded per fruit
pub const FRUIT_SCORE: u32 = 10;

/// Number of digits the score display always shows
pub const SCORE_DIGITS: u32 = 6;

/// Rejection-sampling attempts before fruit placement switches to an exact pick
pub const MAX_FRUIT_ATTEMPTS: u32 = 64;

/// Packed 32-bit colors (`0xAARRGGBB`).
pub mod colors {
    /// Everything outside the playfield.
    pub const BACKDROP: u32 = 0xFF11_1111;
    /// Playfield background.
    pub const PLAYFIELD: u32 = 0xFF22_2222;
    pub const SNAKE: u32 = 0xFF55_5555;
    pub const FRUIT: u32 = 0xFFFF_3300;
    pub const SCORE: u32 = 0xFFDD_DDDD;
}


/// Contents of one grid cell
///
/// The discriminants are stable; `Empty` is zero so a freshly cleared grid is
/// all-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    Snake = 1,
    Fruit = 2,
}

impl Tile {
    /// True for tiles the renderer draws on top of the playfield background
    pub fn is_occupied(self) -> bool {
        !matches!(self, Tile::Empty)
    }
}

/// A grid step: a unit vector along one axis, or zero
///
/// `y` points up (see the module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const NONE: Direction = Direction { dx: 0, dy: 0 };
    pub const UP: Direction = Direction { dx: 0, dy: 1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: -1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    pub fn is_none(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Translate a key press into a request, given the direction the snake is
    /// currently moving.
    ///
    /// Pressing along the axis the snake already travels keeps the current
    /// direction, so a request can never reverse the snake into itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::RIGHT.steer(Direction::LEFT), Direction::RIGHT);
    /// assert_eq!(Direction::RIGHT.steer(Direction::DOWN), Direction::DOWN);
    /// ```
    pub fn steer(self, pressed: Direction) -> Direction {
        if pressed.dx != 0 {
            Direction::new(if self.dx != 0 { self.dx } else { pressed.dx }, 0)
        } else if pressed.dy != 0 {
            Direction::new(0, if self.dy != 0 { self.dy } else { pressed.dy })
        } else {
            Direction::NONE
        }
    }
}

/// Session phase
///
/// A collision first moves the session into `PendingGameOver`: the snake stays
/// frozen for one grace tick, and a second failing tick ends the game. Any
/// successful move in between returns to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    PendingGameOver,
    GameOver,
    /// The snake filled the grid; no empty cell is left for fruit.
    Won,
}

impl Phase {
    /// Terminal phases only end with a reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::PendingGameOver => "pendingGameOver",
            Phase::GameOver => "gameOver",
            Phase::Won => "won",
        }
    }
}

/// Actions produced by the input layer
///
/// Directional actions, restart, speed and the two gameplay toggles are applied
/// by the game state. `ToggleFullscreen` and `Quit` belong to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Up,
    Down,
    Left,
    Right,
    /// Start a new session (only honoured once the game has ended)
    Restart,
    /// Lower `frames_per_tick` by one (floor 1)
    SpeedUp,
    /// Raise `frames_per_tick` by one
    SpeedDown,
    ToggleWrap,
    ToggleFullscreen,
    /// Cosmetic mode: random playfield and snake colors
    ToggleLsd,
    Quit,
}

impl GameAction {
    /// Convert to camelCase string (used in log fields)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Up => "up",
            GameAction::Down => "down",
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::Restart => "restart",
            GameAction::SpeedUp => "speedUp",
            GameAction::SpeedDown => "speedDown",
            GameAction::ToggleWrap => "toggleWrap",
            GameAction::ToggleFullscreen => "toggleFullscreen",
            GameAction::ToggleLsd => "toggleLsd",
            GameAction::Quit => "quit",
        }
    }

    /// The direction a steering action points at, if it is one
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Up => Some(Direction::UP),
            GameAction::Down => Some(Direction::DOWN),
            GameAction::Left => Some(Direction::LEFT),
            GameAction::Right => Some(Direction::RIGHT),
            _ => None,
        }
    }
}
