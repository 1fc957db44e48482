//! Text rendering of the two grids side by side.

use crate::cli::COLUMNS;
use crate::config::GRID_SIZE;
use crate::game::Game;
use crate::grid::{Coord, Grid};
use crate::config::FLEET;
use crate::resolver::{DestroyedTally, TargetBoard};
use crate::ship::Fleet;
use crate::common::Shooter;

const GAP: &str = "      ";

fn cell_char(c: Coord, board: &TargetBoard, fleet: &Fleet, show_ships: bool, revealed: &[Coord]) -> char {
    if board.hits().contains(c) {
        'X'
    } else if board.dotted().contains(c) {
        '·'
    } else if revealed.contains(&c) || (show_ships && fleet.occupied().contains(c)) {
        '■'
    } else {
        '.'
    }
}

fn header() -> String {
    let mut line = String::from("    ");
    for ch in COLUMNS.chars() {
        line.push(ch);
        line.push(' ');
    }
    line
}

fn row(grid: Grid, r: usize, board: &TargetBoard, fleet: &Fleet, show_ships: bool, revealed: &[Coord]) -> String {
    let mut line = format!("{:>2}  ", r + 1);
    for col in 0..GRID_SIZE as usize {
        line.push(cell_char(grid.coord_at(r, col), board, fleet, show_ships, revealed));
        line.push(' ');
    }
    line
}

// `Sunk 4:0 3:1 2:0 1:2`, destroyed ships by length, longest first.
fn tally_line(tally: &DestroyedTally) -> String {
    let mut line = String::from("    Sunk");
    for class in FLEET.iter() {
        line.push_str(&format!(" {}:{}", class.length(), tally.get(class.length())));
    }
    line
}

/// Render the computer's grid (hidden ships, left) next to the human's grid
/// (ships shown, right), like the two boards on screen.
pub fn render_game(game: &Game) -> String {
    let resolver = game.resolver();
    let enemy = game.computer_fleet();
    let own = game.human_fleet();
    let revealed: Vec<Coord> = resolver
        .revealed()
        .iter()
        .flat_map(|s| s.cells().iter().copied())
        .collect();

    let mut out = String::new();
    out.push_str(&format!("{:<24}{}{}\n", "    COMPUTER", GAP, "    YOU"));
    out.push_str(&format!("{}{}{}\n", header(), GAP, header()));
    for r in 0..GRID_SIZE as usize {
        out.push_str(&row(
            enemy.grid(),
            r,
            resolver.board(Shooter::Human),
            enemy,
            false,
            &revealed,
        ));
        out.push_str(GAP);
        out.push_str(&row(
            own.grid(),
            r,
            resolver.board(Shooter::Computer),
            own,
            true,
            &[],
        ));
        out.push('\n');
    }
    out.push_str(&format!(
        "{:<24}{}{}\n",
        tally_line(resolver.board(Shooter::Human).tally()),
        GAP,
        tally_line(resolver.board(Shooter::Computer).tally())
    ));
    out
}

/// Render a single fleet with its ships visible, used while drawing ships.
pub fn render_fleet(fleet: &Fleet) -> String {
    let mut out = header();
    out.push('\n');
    for r in 0..GRID_SIZE as usize {
        let mut line = format!("{:>2}  ", r + 1);
        for col in 0..GRID_SIZE as usize {
            let c = fleet.grid().coord_at(r, col);
            line.push(if fleet.ships().iter().any(|s| s.contains(c)) { '■' } else { '.' });
            line.push(' ');
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
