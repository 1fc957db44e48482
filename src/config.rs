//! Fixed rules of the game: grid geometry and fleet composition.

/// Side length of one player's grid.
pub const GRID_SIZE: u8 = 10;

/// Horizontal offset of the computer's grid on the shared plane.
pub const COMPUTER_OFFSET: u8 = 0;

/// Horizontal offset of the human's grid on the shared plane.
pub const HUMAN_OFFSET: u8 = GRID_SIZE;

/// Longest ship in a fleet.
pub const MAX_SHIP_LENGTH: usize = 4;

/// Attempts spent on one ship slot before the placer starts the fleet over.
pub const MAX_SHIP_ATTEMPTS: usize = 1_000;

/// Restarts spent filling the rest of a hand-drawn fleet before giving up.
pub const MAX_FILL_ATTEMPTS: usize = 100;

/// One class of ship in the fleet: its name, length and how many of them
/// each player gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this class in one fleet.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Fleet composition, longest ships first. Quantity is `5 - length`.
pub const FLEET: [ShipClass; MAX_SHIP_LENGTH] = [
    ShipClass::new("Battleship", 4, 1),
    ShipClass::new("Cruiser", 3, 2),
    ShipClass::new("Destroyer", 2, 3),
    ShipClass::new("Boat", 1, 4),
];

/// Ships in a complete fleet.
pub const NUM_SHIPS: usize = 1 + 2 + 3 + 4;

/// Cells occupied by a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Look up the ship class for a given length.
pub fn ship_class(length: usize) -> Option<ShipClass> {
    FLEET.iter().copied().find(|class| class.length() == length)
}
