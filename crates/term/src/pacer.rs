use std::time::Duration;

/// Pads each frame-loop iteration out to a fixed frame time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame: Duration,
}

impl FramePacer {
    /// `frame_ms` is clamped to at least 1 ms.
    pub fn new(frame_ms: u64) -> Self {
        Self {
            frame: Duration::from_millis(frame_ms.max(1)),
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// How long to sleep after an iteration that took `elapsed`.
    ///
    /// - `elapsed < frame`: the remainder of the frame.
    /// - Otherwise `None`; overrun frames are not made up later.
    pub fn sleep_for(&self, elapsed: Duration) -> Option<Duration> {
        self.frame.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(u64::from(crate::types::FRAME_MS))
    }
}
