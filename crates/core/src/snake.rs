//! Snake body - a fixed-capacity ring buffer of grid indices
//!
//! The buffer is allocated once with one slot per grid cell, which bounds the
//! longest possible snake. `head` and `tail` are positions in the ring; the live
//! segments run from `tail` to `head` inclusive.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    segments: Box<[usize]>,
    head: usize,
    tail: usize,
}

impl SnakeBody {
    /// A one-segment snake at `start` with room for `capacity` segments.
    pub fn new(capacity: usize, start: usize) -> Self {
        let mut segments = vec![0usize; capacity.max(1)].into_boxed_slice();
        segments[0] = start;
        Self {
            segments,
            head: 0,
            tail: 0,
        }
    }

    /// Collapse back to a single segment at `start`, keeping the allocation.
    pub fn reset(&mut self, start: usize) {
        self.head = 0;
        self.tail = 0;
        self.segments[0] = start;
    }

    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    /// Number of live segments (always >= 1)
    pub fn len(&self) -> usize {
        (self.head + self.segments.len() - self.tail) % self.segments.len() + 1
    }

    /// Always false: a body never has fewer than one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Grid index of the head segment
    pub fn head(&self) -> usize {
        self.segments[self.head]
    }

    /// Grid index of the tail segment
    pub fn tail(&self) -> usize {
        self.segments[self.tail]
    }

    #[inline(always)]
    fn step(&self, i: usize) -> usize {
        (i + 1) % self.segments.len()
    }

    /// Add a new head at `index` without moving the tail.
    pub fn grow(&mut self, index: usize) {
        self.head = self.step(self.head);
        self.segments[self.head] = index;
    }

    /// Move: drop the tail segment and add a new head at `index`.
    ///
    /// Returns the grid index the tail vacated.
    pub fn advance(&mut self, index: usize) -> usize {
        let vacated = self.segments[self.tail];
        self.tail = self.step(self.tail);
        self.grow(index);
        vacated
    }

    /// Grid indices from tail to head
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let len = self.len();
        (0..len).map(move |i| self.segments[(self.tail + i) % self.segments.len()])
    }
}
