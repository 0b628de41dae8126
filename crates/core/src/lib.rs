//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, session state and the simulation half
//! of the frame loop. It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: given a seeded [`SimpleRng`], the same inputs replay the same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any host that can show a pixel buffer can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: the tile grid with bounds-checked lookup
//! - [`snake`]: the snake body as a fixed-capacity ring buffer of grid indices
//! - [`game_state`]: session state, the tick, the collision grace protocol, fruit placement
//! - [`rng`]: entropy sources (OS CSPRNG and a seeded LCG)
//! - [`driver`]: per-frame input / fruit / tick ordering
//! - [`config`]: clamped session configuration
//!
//! # Game Rules
//!
//! - The snake moves exactly one cell per tick; speed only changes the cadence
//! - Eating a fruit scores 10 points and grows the snake by one segment
//! - Walls (with wrapping off) and the snake's own body are fatal after one grace tick
//! - A snake that fills the whole grid wins the session
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState, TickOutcome};
//! use tui_snake_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default());
//! assert_eq!(game.head(), (7, 7));
//!
//! game.apply_action(GameAction::Up);
//! assert_eq!(game.tick(), TickOutcome::Moved);
//! assert_eq!(game.head(), (7, 8));
//! ```

pub mod config;
pub mod driver;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use driver::{FrameDriver, FrameReport};
pub use game_state::{FruitPlacement, GameState, TickOutcome};
pub use grid::Grid;
pub use rng::{EntropyError, EntropySource, FailingEntropy, OsEntropy, SimpleRng};
pub use snake::SnakeBody;
