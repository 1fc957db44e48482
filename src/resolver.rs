//! Shot resolution: hits, misses, destroyed ships and the markers around
//! them, plus the computer's hunt state.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ai::Hunter;
use crate::common::{ShotError, ShotOutcome, Shooter};
use crate::config::MAX_SHIP_LENGTH;
use crate::grid::{CellSet, Coord, Grid};
use crate::ship::{Fleet, Ship};

/// Destroyed ships counted by length, plus the running total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DestroyedTally {
    by_length: [usize; MAX_SHIP_LENGTH],
    total: usize,
}

impl DestroyedTally {
    /// Destroyed ships of `length`.
    pub fn get(&self, length: usize) -> usize {
        length
            .checked_sub(1)
            .and_then(|i| self.by_length.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    fn record(&mut self, length: usize) {
        if let Some(slot) = length.checked_sub(1).and_then(|i| self.by_length.get_mut(i)) {
            *slot += 1;
        }
        self.total += 1;
    }
}

/// What one side knows about the grid it fires at.
#[derive(Debug, Clone)]
pub struct TargetBoard {
    hits: CellSet,
    dotted: CellSet,
    tally: DestroyedTally,
}

impl TargetBoard {
    fn new(grid: Grid) -> Self {
        Self {
            hits: CellSet::empty(grid),
            dotted: CellSet::empty(grid),
            tally: DestroyedTally::default(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.hits.grid()
    }

    /// Cells confirmed hit.
    pub fn hits(&self) -> &CellSet {
        &self.hits
    }

    /// Misses and cells proven empty around hits.
    pub fn dotted(&self) -> &CellSet {
        &self.dotted
    }

    pub fn tally(&self) -> &DestroyedTally {
        &self.tally
    }

    /// `true` if `c` was hit or is dotted.
    pub fn is_resolved(&self, c: Coord) -> bool {
        self.hits.contains(c) || self.dotted.contains(c)
    }

    fn mark_hit<I: IntoIterator<Item = Coord>>(&mut self, c: Coord, around: I) {
        self.hits.insert(c);
        for n in around {
            self.dotted.insert(n);
        }
        self.dotted.subtract(&self.hits);
    }

    fn clear(&mut self) {
        self.hits.clear();
        self.dotted.clear();
        self.tally = DestroyedTally::default();
    }
}

/// Per-session combat state for one human and one computer.
#[derive(Debug, Clone)]
pub struct CombatResolver {
    rng: SmallRng,
    // shots taken by the human, on the computer's grid
    human_board: TargetBoard,
    // shots taken by the computer, on the human's grid
    computer_board: TargetBoard,
    hunter: Hunter,
    revealed: Vec<Ship>,
}

impl CombatResolver {
    /// Resolver for the standard layout: computer grid at offset 0, human
    /// grid at offset 10. `seed` drives the computer's shot selection.
    pub fn new(seed: u64) -> Self {
        Self::with_grids(seed, Grid::HUMAN, Grid::COMPUTER)
    }

    pub fn with_grids(seed: u64, human: Grid, computer: Grid) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            human_board: TargetBoard::new(computer),
            computer_board: TargetBoard::new(human),
            hunter: Hunter::new(human),
            revealed: Vec::new(),
        }
    }

    /// What `shooter` has learned about the opponent's grid.
    pub fn board(&self, shooter: Shooter) -> &TargetBoard {
        match shooter {
            Shooter::Human => &self.human_board,
            Shooter::Computer => &self.computer_board,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    /// Computer ships destroyed by the human so far.
    pub fn revealed(&self) -> &[Ship] {
        &self.revealed
    }

    /// The computer's next shot.
    pub fn computer_target(&mut self) -> Option<Coord> {
        self.hunter.select_target(&mut self.rng)
    }

    /// Resolve a shot by `shooter` at `fired` against `defender`.
    ///
    /// Cells already hit or dotted are rejected with
    /// [`ShotError::AlreadyFired`] and leave every piece of state untouched.
    pub fn resolve_shot(
        &mut self,
        fired: Coord,
        defender: &mut Fleet,
        shooter: Shooter,
    ) -> Result<ShotOutcome, ShotError> {
        let grid = defender.grid();
        let board = match shooter {
            Shooter::Human => &mut self.human_board,
            Shooter::Computer => &mut self.computer_board,
        };
        if !grid.contains(fired) || board.grid() != grid {
            return Err(ShotError::OutOfBounds(fired));
        }
        if board.is_resolved(fired) {
            return Err(ShotError::AlreadyFired(fired));
        }

        let idx = match defender.strike(fired) {
            Some(idx) => idx,
            None => {
                board.dotted.insert(fired);
                if shooter == Shooter::Computer {
                    self.hunter.record_miss(fired);
                    self.hunter.exclude(&board.hits, &board.dotted);
                }
                return Ok(ShotOutcome::Miss);
            }
        };

        let ship = &defender.ships()[idx];
        if ship.length() == 1 {
            board.mark_hit(fired, grid.around(fired));
        } else {
            board.mark_hit(fired, grid.diagonal(fired));
        }
        if shooter == Shooter::Computer {
            self.hunter.record_hit(fired);
            self.hunter.exclude(&board.hits, &board.dotted);
        }

        if !ship.is_destroyed() {
            return Ok(ShotOutcome::Hit);
        }

        // Seal both ends of the wreck.
        if let Some((first, last)) = ship.ends() {
            for end in [first, last] {
                board.mark_hit(end, grid.around(end));
            }
        }
        board.tally.record(ship.length());
        let length = ship.length();
        let revealed = match shooter {
            Shooter::Computer => {
                self.hunter.end_hunt();
                self.hunter.exclude(&board.hits, &board.dotted);
                None
            }
            Shooter::Human => {
                self.revealed.push(ship.clone());
                Some(ship.cells().to_vec())
            }
        };
        log::debug!("{:?} destroyed a ship of length {}", shooter, length);
        Ok(ShotOutcome::Destroyed { length, revealed })
    }

    /// Clear all shots, tallies and hunt state for a new game.
    pub fn reset(&mut self) {
        self.human_board.clear();
        self.computer_board.clear();
        self.hunter.reset();
        self.revealed.clear();
    }
}
