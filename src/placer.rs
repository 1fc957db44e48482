//! Random fleet generation with a one-cell buffer between ships.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::PlacementError;
use crate::config::{FLEET, MAX_FILL_ATTEMPTS, MAX_SHIP_ATTEMPTS, NUM_SHIPS};
use crate::grid::{CellSet, Coord, Grid};
use crate::ship::{Fleet, FleetBuilder, Orientation, Ship};

/// Generates complete random fleets. Each call to [`ShipPlacer::generate`]
/// starts from an empty grid; only the RNG carries over between calls.
#[derive(Debug, Clone)]
pub struct ShipPlacer {
    rng: SmallRng,
}

impl ShipPlacer {
    /// Create a placer whose fleets are fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Build a full fleet on the grid at `offset`.
    ///
    /// Ships are placed longest first. A ship slot that cannot be filled
    /// within [`MAX_SHIP_ATTEMPTS`] throws the partial fleet away and starts
    /// over.
    pub fn generate(&mut self, offset: u8) -> Fleet {
        let grid = Grid::new(offset);
        loop {
            let ships = Vec::with_capacity(NUM_SHIPS);
            if let Some(ships) = self.try_fill(CellSet::full(grid), ships) {
                log::debug!("generated fleet for grid at offset {}", grid.offset());
                return Fleet::from_ships(grid, ships);
            }
        }
    }

    /// Place the ships `builder` is still missing around the ones already
    /// drawn. Drawn ships never move, so a layout with no room left fails
    /// with [`PlacementError::NoRoom`] after [`MAX_FILL_ATTEMPTS`] restarts.
    pub fn complete(&mut self, builder: &FleetBuilder) -> Result<Fleet, PlacementError> {
        let grid = builder.grid();
        let mut available = CellSet::full(grid);
        available.subtract(builder.blocked());
        for _ in 0..MAX_FILL_ATTEMPTS {
            if let Some(ships) = self.try_fill(available, builder.ships().to_vec()) {
                log::debug!("completed fleet with {} drawn ships", builder.ships().len());
                return Ok(Fleet::from_ships(grid, ships));
            }
        }
        Err(PlacementError::NoRoom)
    }

    // Tops `ships` up to the full composition using only `available` cells.
    fn try_fill(&mut self, mut available: CellSet, mut ships: Vec<Ship>) -> Option<Vec<Ship>> {
        let grid = available.grid();
        for class in FLEET.iter() {
            let placed = ships.iter().filter(|s| s.length() == class.length()).count();
            for _ in placed..class.count() {
                let cells = (0..MAX_SHIP_ATTEMPTS)
                    .find_map(|_| self.try_ship(class.length(), &available))?;
                for &c in &cells {
                    available.remove(c);
                    for n in grid.around(c) {
                        available.remove(n);
                    }
                }
                ships.push(Ship::new(cells));
            }
        }
        Some(ships)
    }

    /// One attempt at a ship of `length`: random start, orientation and
    /// direction. Growth that would leave the grid turns around and continues
    /// from the start cell. `None` unless every cell is still available.
    fn try_ship(&mut self, length: usize, available: &CellSet) -> Option<Vec<Coord>> {
        let grid = available.grid();
        let start = available.choose(&mut self.rng)?;
        let orientation = if self.rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut direction: i8 = if self.rng.random() { 1 } else { -1 };

        let mut cells = Vec::with_capacity(length);
        cells.push(start);
        let mut edge = start;
        while cells.len() < length {
            let next = match Self::grow(grid, edge, orientation, direction) {
                Some(next) => next,
                None => {
                    direction = -direction;
                    Self::grow(grid, start, orientation, direction)?
                }
            };
            cells.push(next);
            edge = next;
        }

        cells.iter().all(|&c| available.contains(c)).then_some(cells)
    }

    fn grow(grid: Grid, from: Coord, orientation: Orientation, direction: i8) -> Option<Coord> {
        match orientation {
            Orientation::Horizontal => grid.step(from, direction, 0),
            Orientation::Vertical => grid.step(from, 0, direction),
        }
    }
}
