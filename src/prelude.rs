//! Commonly used types and utilities for ease of import.

pub use crate::{
    CellSet, CombatResolver, Coord, Fleet, FleetBuilder, Game, GameStatus, Grid, Hunter,
    ShipPlacer, Shooter, ShotError, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::cli::{format_coord, parse_coord, render_game};
#[cfg(feature = "std")]
pub use crate::init_logging;
