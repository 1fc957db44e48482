#![cfg(feature = "std")]

use seabattle::cli::{format_coord, parse_coord, parse_ship, render_game};
use seabattle::{Coord, Game, Grid, Shooter};

#[test]
fn parse_maps_to_each_grid() {
    assert_eq!(parse_coord(Grid::COMPUTER, "A1"), Ok(Coord::new(1, 1)));
    assert_eq!(parse_coord(Grid::COMPUTER, "j10"), Ok(Coord::new(10, 10)));
    assert_eq!(parse_coord(Grid::HUMAN, "A1"), Ok(Coord::new(11, 1)));
    assert_eq!(parse_coord(Grid::HUMAN, " c7 "), Ok(Coord::new(13, 7)));
}

#[test]
fn parse_rejects_garbage() {
    for input in ["", "A", "K1", "A0", "A11", "AB", "11"] {
        assert!(parse_coord(Grid::COMPUTER, input).is_err(), "{:?}", input);
    }
}

#[test]
fn format_roundtrip() {
    for grid in [Grid::COMPUTER, Grid::HUMAN] {
        for c in grid.cells() {
            assert_eq!(parse_coord(grid, &format_coord(grid, c)), Ok(c));
        }
    }
}

#[test]
fn parse_ship_lists() {
    let cells = parse_ship(Grid::HUMAN, "A1 A2, A3").unwrap();
    assert_eq!(
        cells,
        vec![Coord::new(11, 1), Coord::new(11, 2), Coord::new(11, 3)]
    );
    assert!(parse_ship(Grid::HUMAN, "A1 Z2").is_err());
}

#[test]
fn render_hides_computer_ships() {
    let mut game = Game::new(21);
    let out = render_game(&game);
    assert!(out.contains("COMPUTER"));
    assert_eq!(out.lines().count(), 13);
    // 20 own ship cells visible, no enemy ones yet
    assert_eq!(out.matches('■').count(), 20);

    let target = game.computer_fleet().occupied().iter().next().unwrap();
    game.human_fires(target).unwrap();
    assert_eq!(game.turn(), Shooter::Human);
    assert!(render_game(&game).contains('X'));
}

#[test]
fn render_shows_sunk_tally_under_each_grid() {
    let mut game = Game::new(21);
    let last = render_game(&game).lines().last().unwrap().to_string();
    assert_eq!(last.matches("Sunk 4:0 3:0 2:0 1:0").count(), 2);

    // sink one computer ship; hits keep the turn with the human
    let ship = game.computer_fleet().ships()[0].clone();
    for &cell in ship.cells() {
        game.human_fires(cell).unwrap();
    }
    let last = render_game(&game).lines().last().unwrap().to_string();
    let (left, right) = last.split_at(24);
    assert!(left.contains(&format!("{}:1", ship.length())));
    assert!(right.contains("Sunk 4:0 3:0 2:0 1:0"));
}
