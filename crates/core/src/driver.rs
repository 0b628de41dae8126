//! Frame driver - the per-iteration game loop body, without I/O.
//!
//! One call to [`FrameDriver::run_frame`] performs the simulation half of a
//! frame in a fixed order:
//!
//! 1. apply the frame's input actions (requests and toggles only)
//! 2. make sure a fruit is on the grid
//! 3. count the frame and tick when the cadence is reached
//!
//! Rendering, presentation and sleeping stay with the host, which owns the
//! pixel buffer and the wall clock.

use tracing::{debug, warn};

use crate::game_state::{FruitPlacement, GameState, TickOutcome};
use crate::rng::EntropySource;
use crate::types::GameAction;

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub tick: Option<TickOutcome>,
    pub fruit: FruitPlacement,
    /// The entropy source failed and the fruit was placed deterministically.
    pub fallback_placement: bool,
}

#[derive(Debug)]
pub struct FrameDriver<E> {
    state: GameState,
    entropy: E,
    running: bool,
    fullscreen: bool,
}

impl<E: EntropySource> FrameDriver<E> {
    pub fn new(state: GameState, entropy: E) -> Self {
        Self {
            state,
            entropy,
            running: true,
            fullscreen: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Session state and entropy together, for renderers that need colors.
    pub fn parts_mut(&mut self) -> (&GameState, &mut E) {
        (&self.state, &mut self.entropy)
    }

    /// False once a `Quit` action was seen
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Apply one action; host-level actions update the driver's own flags.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Quit => self.running = false,
            GameAction::ToggleFullscreen => self.fullscreen = !self.fullscreen,
            _ => {
                if self.state.apply_action(action) {
                    debug!(action = action.as_str(), "applied");
                }
            }
        }
    }

    /// Run the simulation phases of one frame
    pub fn run_frame<I>(&mut self, actions: I) -> FrameReport
    where
        I: IntoIterator<Item = GameAction>,
    {
        for action in actions {
            self.apply_action(action);
        }

        let (fruit, fallback_placement) = self.ensure_fruit();
        let tick = self.state.advance_frame();

        FrameReport {
            tick,
            fruit,
            fallback_placement,
        }
    }

    fn ensure_fruit(&mut self) -> (FruitPlacement, bool) {
        match self.state.place_fruit(&mut self.entropy) {
            Ok(placement) => (placement, false),
            Err(err) => {
                warn!(error = %err, "entropy source failed, placing fruit deterministically");
                (self.state.place_fruit_fallback(), true)
            }
        }
    }
}
