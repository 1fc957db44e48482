//! Computer targeting: random search until something is hit, then hunt
//! around the hits until the ship goes down.

use alloc::vec::Vec;
use rand::Rng;

use crate::grid::{CellSet, Coord, Grid};

/// Targeting mode, derived from the hunt state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntMode {
    /// No ship under attack, fire anywhere still eligible.
    Random,
    /// One hit on an unresolved ship; try its orthogonal neighbours.
    SingleHit,
    /// Two or more hits; only the ends of the hit line are tried.
    MultiHit,
}

/// Hunt state for the computer against one grid.
#[derive(Debug, Clone)]
pub struct Hunter {
    grid: Grid,
    fire_eligible: CellSet,
    candidates: CellSet,
    last_hits: Vec<Coord>,
}

impl Hunter {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            fire_eligible: CellSet::full(grid),
            candidates: CellSet::empty(grid),
            last_hits: Vec::new(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn mode(&self) -> HuntMode {
        if self.candidates.is_empty() {
            HuntMode::Random
        } else if self.last_hits.len() < 2 {
            HuntMode::SingleHit
        } else {
            HuntMode::MultiHit
        }
    }

    /// Cells prioritised for the next shot.
    pub fn candidates(&self) -> &CellSet {
        &self.candidates
    }

    /// Cells the random search may still pick.
    pub fn fire_eligible(&self) -> &CellSet {
        &self.fire_eligible
    }

    /// Hits on the ship currently being hunted.
    pub fn last_hits(&self) -> &[Coord] {
        &self.last_hits
    }

    /// Pick the next shot: a hunt candidate if there is one, otherwise any
    /// fire-eligible cell. An exhausted eligible set is refilled first.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        let target = if self.candidates.is_empty() {
            if self.fire_eligible.is_empty() {
                log::debug!("fire-eligible cells exhausted, refilling");
                self.fire_eligible.fill();
            }
            self.fire_eligible.choose(rng)?
        } else {
            self.candidates.choose(rng)?
        };
        self.fire_eligible.remove(target);
        Some(target)
    }

    /// A shot at `c` hit a ship that is still being hunted.
    pub(crate) fn record_hit(&mut self, c: Coord) {
        self.last_hits.push(c);
        if self.candidates.contains(c) {
            self.candidates = self.line_candidates();
            log::trace!("hunt narrowed to {:?}", self.candidates);
        } else {
            for n in self.grid.orthogonal(c) {
                self.candidates.insert(n);
            }
            log::trace!("hunt started at {}", c);
        }
    }

    /// A shot at `c` missed. Only that cell leaves the candidates.
    pub(crate) fn record_miss(&mut self, c: Coord) {
        self.candidates.remove(c);
    }

    /// The hunted ship went down.
    pub(crate) fn end_hunt(&mut self) {
        self.last_hits.clear();
        self.candidates.clear();
    }

    /// Drop cells already hit or known to be empty from both pools. Cells
    /// held as candidates leave the eligible pool too.
    pub(crate) fn exclude(&mut self, hits: &CellSet, dotted: &CellSet) {
        self.candidates.subtract(dotted);
        self.candidates.subtract(hits);
        self.fire_eligible.subtract(&self.candidates);
        self.fire_eligible.subtract(dotted);
        self.fire_eligible.subtract(hits);
    }

    /// Forget everything, as at the start of a new game.
    pub fn reset(&mut self) {
        self.fire_eligible.fill();
        self.end_hunt();
    }

    // For each adjacent pair of sorted hits on one axis, the cell before the
    // first and the cell after the second.
    fn line_candidates(&mut self) -> CellSet {
        self.last_hits.sort_unstable();
        let mut next = CellSet::empty(self.grid);
        for pair in self.last_hits.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let ends = if a.x == b.x {
                (self.grid.step(a, 0, -1), self.grid.step(b, 0, 1))
            } else if a.y == b.y {
                (self.grid.step(a, -1, 0), self.grid.step(b, 1, 0))
            } else {
                (None, None)
            };
            for c in [ends.0, ends.1].into_iter().flatten() {
                next.insert(c);
            }
        }
        next
    }
}
