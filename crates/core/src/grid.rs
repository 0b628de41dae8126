//! Grid module - the snake's playfield
//!
//! A dense `width x height` array of [`Tile`] tags, row-major (`x + y * width`).
//! Row 0 is the bottom row.
//! Lookups outside the grid return `None`, which the simulation treats as a wall.

use crate::types::{Tile, MAX_GRID_SIDE, MIN_GRID_SIDE};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid. Each side is clamped to `[MIN_GRID_SIDE, MAX_GRID_SIDE]`.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE);
        let height = height.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE);
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells; also the snake's maximum length
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Flat index of an in-range coordinate
    #[inline(always)]
    pub fn index(&self, x: u16, y: u16) -> usize {
        debug_assert!(x < self.width && y < self.height);
        x as usize + y as usize * self.width as usize
    }

    /// Flat index, or `None` when `(x, y)` lies outside the grid
    #[inline(always)]
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(x as usize + y as usize * self.width as usize)
    }

    /// Coordinates of a flat index
    pub fn coords(&self, index: usize) -> (u16, u16) {
        let w = self.width as usize;
        ((index % w) as u16, (index / w) as u16)
    }

    /// Tile at `(x, y)`; `None` is the out-of-bounds sentinel
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        self.checked_index(x, y).map(|i| self.tiles[i])
    }

    /// Tile at a flat index (`None` past the end)
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Set the tile at a flat index. Returns false if the index is out of range.
    pub fn set(&mut self, index: usize, tile: Tile) -> bool {
        match self.tiles.get_mut(index) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// Reset every tile to `Empty`
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Empty);
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate `(index, tile)` over every occupied cell in index order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_occupied())
            .map(|(i, &t)| (i, t))
    }

    /// Indices of every empty cell in index order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Tile::Empty)
            .map(|(i, _)| i)
    }

    /// Index of the `n`-th empty cell (in index order), if there are more than `n`
    pub fn nth_empty(&self, n: usize) -> Option<usize> {
        self.empty_cells().nth(n)
    }

    /// First empty cell at or after `start`, wrapping around the end
    pub fn next_empty_from(&self, start: usize) -> Option<usize> {
        let len = self.tiles.len();
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| self.tiles[i] == Tile::Empty)
    }
}
