//! Shared result and error types: shot outcomes, shot errors and placement
//! errors.

use alloc::vec::Vec;
use core::fmt;

use crate::grid::Coord;

/// Who pulled the trigger on a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Shooter {
    Human,
    Computer,
}

impl Shooter {
    pub fn opponent(self) -> Self {
        match self {
            Shooter::Human => Shooter::Computer,
            Shooter::Computer => Shooter::Human,
        }
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Nothing there.
    Miss,
    /// A ship was hit and is still afloat.
    Hit,
    /// The shot took out the last cell of a ship.
    Destroyed {
        /// Length of the destroyed ship.
        length: usize,
        /// Full cells of the ship when the human sank a (hidden) computer ship.
        revealed: Option<Vec<Coord>>,
    },
}

impl ShotOutcome {
    /// `true` for hits, including the one that destroys a ship.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self, ShotOutcome::Destroyed { .. })
    }

    /// Cells of a destroyed computer ship, for rendering.
    pub fn revealed(&self) -> Option<&[Coord]> {
        match self {
            ShotOutcome::Destroyed {
                revealed: Some(cells),
                ..
            } => Some(cells),
            _ => None,
        }
    }
}

/// Errors returned when a shot cannot be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// The coordinate is not on the defender's grid.
    OutOfBounds(Coord),
    /// The cell was already hit or is known to be empty.
    AlreadyFired(Coord),
    /// The other side is to move.
    NotYourTurn,
    /// One of the fleets has already been destroyed.
    GameOver,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds(c) => write!(f, "Cell {} is outside the target grid", c),
            ShotError::AlreadyFired(c) => write!(f, "Cell {} was already fired upon", c),
            ShotError::NotYourTurn => write!(f, "It is not this player's turn"),
            ShotError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}

/// Errors returned by manual fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ships are 1 to 4 cells long.
    InvalidLength(usize),
    /// A cell lies outside the player's grid.
    OutOfBounds(Coord),
    /// Cells do not form one horizontal or vertical run without gaps.
    NotStraight,
    /// Every ship of this length is already placed.
    TooManyShips { length: usize },
    /// The ship overlaps or touches an already placed ship.
    TouchesAnotherShip,
    /// Not every ship of the fleet has been placed.
    Incomplete,
    /// The fleet was built for a different grid.
    WrongGrid,
    /// The drawn ships leave no room for the rest of the fleet.
    NoRoom,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidLength(len) => {
                write!(f, "Ships must be 1 to 4 cells long, got {}", len)
            }
            PlacementError::OutOfBounds(c) => write!(f, "Cell {} is outside the grid", c),
            PlacementError::NotStraight => {
                write!(f, "Ship cells must form a straight line without gaps")
            }
            PlacementError::TooManyShips { length } => {
                write!(f, "All ships of length {} are already placed", length)
            }
            PlacementError::TouchesAnotherShip => {
                write!(f, "Ship overlaps or touches another ship")
            }
            PlacementError::Incomplete => write!(f, "Fleet is not complete"),
            PlacementError::WrongGrid => write!(f, "Fleet belongs to another grid"),
            PlacementError::NoRoom => write!(f, "No room left for the remaining ships"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
