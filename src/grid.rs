//! Coordinates, grid geometry and cell sets.
//!
//! Both players' grids live on one logical plane. A grid with offset `o`
//! covers `x` in `o+1..=o+10` and `y` in `1..=10`, so the computer's grid
//! (offset 0) and the human's grid (offset 10) never share a coordinate.

use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::config::{COMPUTER_OFFSET, GRID_SIZE, HUMAN_OFFSET};

type Bits = BitBoard<u128, { GRID_SIZE as usize }>;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const AROUND: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One cell on the shared plane. Ordered by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl From<(u8, u8)> for Coord {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single player's 10×10 grid, identified by its horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    offset: u8,
}

impl Grid {
    /// The computer's grid.
    pub const COMPUTER: Grid = Grid::new(COMPUTER_OFFSET);
    /// The human's grid.
    pub const HUMAN: Grid = Grid::new(HUMAN_OFFSET);

    /// Largest offset whose cells still fit in a `u8` x coordinate.
    pub const MAX_OFFSET: u8 = u8::MAX - GRID_SIZE;

    /// # Panics
    ///
    /// If `offset` is above [`Grid::MAX_OFFSET`].
    pub const fn new(offset: u8) -> Self {
        assert!(offset <= Self::MAX_OFFSET, "grid offset out of range");
        Self { offset }
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn min_x(&self) -> u8 {
        self.offset() + 1
    }

    pub fn max_x(&self) -> u8 {
        self.offset + GRID_SIZE
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.x > self.offset && c.x <= self.max_x() && c.y >= 1 && c.y <= GRID_SIZE
    }

    /// Bitboard `(row, col)` of a cell, `None` if it lies on another grid.
    pub fn cell_index(&self, c: Coord) -> Option<(usize, usize)> {
        if self.contains(c) {
            Some(((c.y - 1) as usize, (c.x - self.min_x()) as usize))
        } else {
            None
        }
    }

    /// Inverse of [`Grid::cell_index`].
    pub fn coord_at(&self, row: usize, col: usize) -> Coord {
        Coord::new(self.min_x() + col as u8, 1 + row as u8)
    }

    /// Every cell of the grid, row by row.
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let size = GRID_SIZE as usize;
        (0..size).flat_map(move |row| (0..size).map(move |col| self.coord_at(row, col)))
    }

    /// The cell `(dx, dy)` away from `c`, if it is still on this grid.
    pub fn step(&self, c: Coord, dx: i8, dy: i8) -> Option<Coord> {
        let x = i16::from(c.x) + i16::from(dx);
        let y = i16::from(c.y) + i16::from(dy);
        if x < 0 || y < 0 || x > i16::from(u8::MAX) || y > i16::from(u8::MAX) {
            return None;
        }
        let next = Coord::new(x as u8, y as u8);
        self.contains(next).then_some(next)
    }

    /// Up, down, left and right neighbours, clipped to the grid.
    pub fn orthogonal(self, c: Coord) -> impl Iterator<Item = Coord> {
        self.offsets(c, &ORTHOGONAL)
    }

    /// The four diagonal neighbours, clipped to the grid.
    pub fn diagonal(self, c: Coord) -> impl Iterator<Item = Coord> {
        self.offsets(c, &DIAGONAL)
    }

    /// The full 8-neighbourhood, clipped to the grid.
    pub fn around(self, c: Coord) -> impl Iterator<Item = Coord> {
        self.offsets(c, &AROUND)
    }

    fn offsets(self, c: Coord, deltas: &'static [(i8, i8)]) -> impl Iterator<Item = Coord> {
        deltas
            .iter()
            .filter_map(move |&(dx, dy)| self.step(c, dx, dy))
    }
}

/// A set of cells on one grid, backed by a bitboard.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet {
    grid: Grid,
    bits: Bits,
}

impl CellSet {
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            bits: Bits::new(),
        }
    }

    /// A set holding every cell of `grid`.
    pub fn full(grid: Grid) -> Self {
        Self {
            grid,
            bits: Bits::full(),
        }
    }

    /// Collects the cells of `iter` that lie on `grid`.
    pub fn from_coords<I>(grid: Grid, iter: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut set = Self::empty(grid);
        for c in iter {
            set.insert(c);
        }
        set
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.grid
            .cell_index(c)
            .and_then(|(r, col)| self.bits.get(r, col).ok())
            .unwrap_or(false)
    }

    /// Adds `c`. Returns `false` if it was already present or is off-grid.
    pub fn insert(&mut self, c: Coord) -> bool {
        match self.grid.cell_index(c) {
            Some((r, col)) => self.bits.set(r, col).unwrap_or(false),
            None => false,
        }
    }

    /// Removes `c`. Returns whether it was present.
    pub fn remove(&mut self, c: Coord) -> bool {
        match self.grid.cell_index(c) {
            Some((r, col)) => self.bits.clear(r, col).unwrap_or(false),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.bits.clear_all();
    }

    /// Refills the set with every cell of its grid.
    pub fn fill(&mut self) {
        self.bits.fill();
    }

    /// Removes every cell of `other`.
    pub fn subtract(&mut self, other: &CellSet) {
        debug_assert_eq!(self.grid, other.grid);
        self.bits.remove_all(&other.bits);
    }

    pub fn is_subset(&self, other: &CellSet) -> bool {
        debug_assert_eq!(self.grid, other.grid);
        self.bits.is_subset(&other.bits)
    }

    pub fn is_disjoint(&self, other: &CellSet) -> bool {
        debug_assert_eq!(self.grid, other.grid);
        (self.bits & other.bits).is_empty()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let grid = self.grid;
        self.bits
            .iter_set_bits()
            .map(move |(r, c)| grid.coord_at(r, c))
    }

    /// A uniformly random member, `None` when the set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let n = rng.random_range(0..len);
        self.bits
            .nth_set_bit(n)
            .map(|(r, c)| self.grid.coord_at(r, c))
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
