//! Ships, fleets and manual fleet drawing.

use alloc::vec::Vec;

use crate::common::PlacementError;
use crate::config::{ship_class, FLEET, MAX_SHIP_LENGTH};
use crate::grid::{CellSet, Coord, Grid};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Constant `y`, cells vary along `x`.
    Horizontal,
    /// Constant `x`, cells vary along `y`.
    Vertical,
}

/// A straight run of 1 to 4 cells. Keeps its full, sorted cell list and the
/// cells that have not been hit yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    afloat: Vec<Coord>,
}

impl Ship {
    /// Build a ship from its cells. Cells are sorted; shape is not checked,
    /// see [`Ship::is_straight`].
    pub fn new(mut cells: Vec<Coord>) -> Self {
        cells.sort_unstable();
        cells.dedup();
        let afloat = cells.clone();
        Self { cells, afloat }
    }

    /// `true` if the cells form one horizontal or vertical run with no gaps.
    pub fn is_straight(cells: &[Coord]) -> bool {
        let mut sorted = cells.to_vec();
        sorted.sort_unstable();
        let first = match sorted.first() {
            Some(c) => *c,
            None => return false,
        };
        let horizontal = sorted.iter().all(|c| c.y == first.y);
        let vertical = sorted.iter().all(|c| c.x == first.x);
        sorted.windows(2).all(|w| {
            let (a, b) = (w[0], w[1]);
            let next = |from: u8, to: u8| u16::from(from) + 1 == u16::from(to);
            (horizontal && next(a.x, b.x)) || (vertical && next(a.y, b.y))
        })
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    /// All cells, sorted.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Cells not hit yet.
    pub fn afloat(&self) -> &[Coord] {
        &self.afloat
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    pub fn is_destroyed(&self) -> bool {
        self.afloat.is_empty()
    }

    /// `None` for single-cell ships.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.cells.as_slice() {
            [a, b, ..] if a.y == b.y => Some(Orientation::Horizontal),
            [_, _, ..] => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// First and last cell of the sorted span.
    pub fn ends(&self) -> Option<(Coord, Coord)> {
        Some((*self.cells.first()?, *self.cells.last()?))
    }

    /// Removes `c` from the afloat cells. Returns `false` if it was not there.
    pub(crate) fn take_hit(&mut self, c: Coord) -> bool {
        match self.afloat.iter().position(|&a| a == c) {
            Some(i) => {
                self.afloat.remove(i);
                true
            }
            None => false,
        }
    }
}

/// One player's ships plus the set of cells still afloat.
#[derive(Debug, Clone)]
pub struct Fleet {
    grid: Grid,
    ships: Vec<Ship>,
    occupied: CellSet,
}

impl Fleet {
    pub(crate) fn from_ships(grid: Grid, ships: Vec<Ship>) -> Self {
        let occupied = CellSet::from_coords(
            grid,
            ships.iter().flat_map(|s| s.afloat().iter().copied()),
        );
        Self {
            grid,
            ships,
            occupied,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cells of the fleet that have not been hit.
    pub fn occupied(&self) -> &CellSet {
        &self.occupied
    }

    /// Ship with an unhit cell at `c`.
    pub fn ship_at(&self, c: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.afloat().contains(&c))
    }

    pub fn destroyed_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_destroyed()).count()
    }

    /// `true` once every ship is destroyed.
    pub fn is_defeated(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Registers a hit on whichever ship floats at `c` and returns its index.
    pub(crate) fn strike(&mut self, c: Coord) -> Option<usize> {
        let idx = self.ships.iter().position(|s| s.afloat().contains(&c))?;
        self.ships[idx].take_hit(c);
        self.occupied.remove(c);
        Some(idx)
    }
}

/// Checks hand-drawn ships one at a time: straight, in bounds, not touching
/// other ships and not exceeding the fleet composition.
#[derive(Debug, Clone)]
pub struct FleetBuilder {
    grid: Grid,
    ships: Vec<Ship>,
    // ship cells plus their buffer zone
    used: CellSet,
}

impl FleetBuilder {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            ships: Vec::new(),
            used: CellSet::empty(grid),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cells taken by drawn ships or their buffer zone.
    pub fn blocked(&self) -> &CellSet {
        &self.used
    }

    /// Validate and add one ship.
    pub fn add_ship(&mut self, cells: &[Coord]) -> Result<(), PlacementError> {
        let length = cells.len();
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(PlacementError::InvalidLength(length));
        }
        if let Some(&c) = cells.iter().find(|&&c| !self.grid.contains(c)) {
            return Err(PlacementError::OutOfBounds(c));
        }
        if !Ship::is_straight(cells) {
            return Err(PlacementError::NotStraight);
        }
        if self.remaining(length) == 0 {
            return Err(PlacementError::TooManyShips { length });
        }
        if cells.iter().any(|&c| self.used.contains(c)) {
            return Err(PlacementError::TouchesAnotherShip);
        }
        let ship = Ship::new(cells.to_vec());
        self.block(&ship);
        log::trace!("drew ship {:?}", ship.cells());
        self.ships.push(ship);
        Ok(())
    }

    /// Removes the most recently drawn ship.
    pub fn undo(&mut self) -> Option<Ship> {
        let ship = self.ships.pop()?;
        self.used.clear();
        let ships = core::mem::take(&mut self.ships);
        for s in &ships {
            self.block(s);
        }
        self.ships = ships;
        Some(ship)
    }

    /// Ships of `length` still to be drawn.
    pub fn remaining(&self, length: usize) -> usize {
        let placed = self.ships.iter().filter(|s| s.length() == length).count();
        ship_class(length).map_or(0, |class| class.count().saturating_sub(placed))
    }

    pub fn is_complete(&self) -> bool {
        FLEET.iter().all(|class| self.remaining(class.length()) == 0)
    }

    /// Finish a complete fleet.
    pub fn build(self) -> Result<Fleet, PlacementError> {
        if !self.is_complete() {
            return Err(PlacementError::Incomplete);
        }
        Ok(self.build_partial())
    }

    /// Finish with whatever ships have been drawn so far.
    pub fn build_partial(self) -> Fleet {
        Fleet::from_ships(self.grid, self.ships)
    }

    fn block(&mut self, ship: &Ship) {
        for &c in ship.cells() {
            self.used.insert(c);
            for n in self.grid.around(c) {
                self.used.insert(n);
            }
        }
    }
}
