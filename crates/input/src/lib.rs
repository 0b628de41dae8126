//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and buffers
//! them per frame. Independent of any UI framework.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::{InputQueue, MAX_ACTIONS_PER_FRAME};
pub use map::handle_key_event;
