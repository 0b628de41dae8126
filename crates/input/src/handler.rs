//! Per-frame input queue.
//!
//! Key presses are collected between frames and handed to the frame driver in
//! arrival order. Repeat and release events are dropped, so holding a key does
//! not flood the queue on terminals that report them.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Upper bound on actions kept for one frame; later presses are dropped.
pub const MAX_ACTIONS_PER_FRAME: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
    dropped: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the action bound to `key`, if any. Returns the queued action.
    pub fn push_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let action = handle_key_event(key)?;
        if self.pending.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return None;
        }
        Some(action)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Presses discarded because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Take everything queued since the last drain.
    pub fn drain(&mut self) -> ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME> {
        self.dropped = 0;
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn presses_are_queued_in_order() {
        let mut q = InputQueue::new();
        q.push_key(KeyEvent::from(KeyCode::Up));
        q.push_key(KeyEvent::from(KeyCode::Left));
        q.push_key(KeyEvent::from(KeyCode::F(3)));

        let actions = q.drain();
        assert_eq!(
            actions.as_slice(),
            &[GameAction::Up, GameAction::Left, GameAction::ToggleWrap]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn repeat_and_release_are_ignored() {
        let mut q = InputQueue::new();
        assert_eq!(q.push_key(event(KeyCode::Up, KeyEventKind::Repeat)), None);
        assert_eq!(q.push_key(event(KeyCode::Up, KeyEventKind::Release)), None);
        assert_eq!(
            q.push_key(event(KeyCode::Up, KeyEventKind::Press)),
            Some(GameAction::Up)
        );
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut q = InputQueue::new();
        assert_eq!(q.push_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert!(q.is_empty());
    }

    #[test]
    fn overflow_is_counted_and_dropped() {
        let mut q = InputQueue::new();
        for _ in 0..MAX_ACTIONS_PER_FRAME + 3 {
            q.push_key(KeyEvent::from(KeyCode::Right));
        }
        assert_eq!(q.len(), MAX_ACTIONS_PER_FRAME);
        assert_eq!(q.dropped(), 3);

        assert_eq!(q.drain().len(), MAX_ACTIONS_PER_FRAME);
        assert_eq!(q.dropped(), 0);
    }
}
