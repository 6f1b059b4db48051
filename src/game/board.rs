use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

use super::config::GameConfig;
use super::error::GameError;

/// A position on the game grid
///
/// `x` runs over `0..height` and `y` over `0..width`.
/// Coordinates are signed so that a step off the edge is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    SnakeHead,
    SnakeBody,
    Apple,
}

/// Fixed-size grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    spawn_buffer: usize,
    max_spawn_attempts: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocate an empty board sized and tuned by `config`
    pub fn new(config: &GameConfig) -> Self {
        Self {
            height: config.board_height,
            width: config.board_width,
            spawn_buffer: config.spawn_buffer,
            max_spawn_attempts: config.max_spawn_attempts,
            cells: vec![Cell::Empty; config.board_height * config.board_width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.height && pos.y >= 0 && (pos.y as usize) < self.width
    }

    /// Write a cell. The caller guarantees `pos` is in bounds.
    pub fn set_piece(&mut self, pos: Position, kind: Cell) {
        let index = self.index(pos);
        self.cells[index] = kind;
    }

    /// Read a cell. The caller guarantees `pos` is in bounds.
    pub fn get_piece(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Every position holding `kind`, ordered by `x` then `y`
    pub fn positions_of(&self, kind: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == kind)
            .map(move |(i, _)| Position::new((i / self.width) as i32, (i % self.width) as i32))
    }

    /// Number of cells holding `kind`
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Pick a uniformly random empty cell away from the edges.
    ///
    /// `x` is drawn from `[margin_x, height - 1 - margin_x]` and `y` from
    /// `[margin_y, width - 1 - margin_y]`, where each margin is the
    /// board's spawn buffer (when `use_basic_buffers`) plus the matching
    /// entry of `extra_buffers`. After `max_spawn_attempts` misses the region
    /// is scanned so a crowded board still terminates.
    pub fn random_free_spot<R: Rng>(
        &self,
        rng: &mut R,
        extra_buffers: (usize, usize),
        use_basic_buffers: bool,
    ) -> Result<Position, GameError> {
        let buffer = if use_basic_buffers { self.spawn_buffer } else { 0 };
        let (Some(rows), Some(cols)) = (
            spawn_range(self.height, buffer + extra_buffers.0),
            spawn_range(self.width, buffer + extra_buffers.1),
        ) else {
            return Err(GameError::BoardFull);
        };

        for _ in 0..self.max_spawn_attempts {
            let pos = Position::new(
                rng.gen_range(rows.clone()) as i32,
                rng.gen_range(cols.clone()) as i32,
            );
            if self.get_piece(pos) == Cell::Empty {
                return Ok(pos);
            }
        }

        warn!(
            "no free cell after {} random draws, scanning the spawn region",
            self.max_spawn_attempts
        );
        let free: Vec<Position> = rows
            .flat_map(|x| cols.clone().map(move |y| Position::new(x as i32, y as i32)))
            .filter(|&pos| self.get_piece(pos) == Cell::Empty)
            .collect();
        free.choose(rng).copied().ok_or(GameError::BoardFull)
    }

    fn index(&self, pos: Position) -> usize {
        pos.x as usize * self.width + pos.y as usize
    }
}

/// Inclusive index range left on an axis of `len` cells after cutting
/// `margin` cells from both ends
fn spawn_range(len: usize, margin: usize) -> Option<RangeInclusive<usize>> {
    let last = len.checked_sub(1 + margin)?;
    (margin <= last).then_some(margin..=last)
}
