//! Terminal front-end helpers
//!
//! - Coordinate parsing and formatting (`B7` style: column letter, row number)
//! - Text rendering of both grids, see [`interface`]

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use crate::config::GRID_SIZE;
use crate::grid::{Coord, Grid};

/// Column labels, left to right.
pub const COLUMNS: &str = "ABCDEFGHIJ";

/// Format a cell of `grid` as `A1`..`J10`.
pub fn format_coord(grid: Grid, c: Coord) -> String {
    match grid.cell_index(c) {
        Some((row, col)) => {
            let letter = COLUMNS.as_bytes()[col] as char;
            format!("{}{}", letter, row + 1)
        }
        None => c.to_string(),
    }
}

/// Parse `B7` style input into a cell of `grid`.
pub fn parse_coord(grid: Grid, input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    let col = COLUMNS
        .find(col_ch)
        .ok_or_else(|| format!("Invalid column '{}' - must be a letter A-J", col_ch))?;
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > GRID_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(grid.coord_at(row - 1, col))
}

/// Parse a whitespace separated list of cells, e.g. `A1 A2 A3`.
pub fn parse_ship(grid: Grid, input: &str) -> Result<Vec<Coord>, String> {
    input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|part| !part.is_empty())
        .map(|part| parse_coord(grid, part))
        .collect()
}
