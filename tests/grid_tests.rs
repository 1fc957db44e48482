use seabattle::{CellSet, Coord, Grid, GRID_SIZE};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn grids_share_one_plane() {
    assert_eq!(Grid::COMPUTER.min_x(), 1);
    assert_eq!(Grid::COMPUTER.max_x(), 10);
    assert_eq!(Grid::HUMAN.min_x(), 11);
    assert_eq!(Grid::HUMAN.max_x(), 20);
    assert_eq!(Grid::COMPUTER.offset(), 0);
    assert_eq!(Grid::HUMAN.offset(), 10);

    let c = Coord::new(11, 5);
    assert!(Grid::HUMAN.contains(c));
    assert!(!Grid::COMPUTER.contains(c));
    assert!(!Grid::COMPUTER.contains(Coord::new(0, 5)));
    assert!(!Grid::COMPUTER.contains(Coord::new(5, 0)));
    assert!(!Grid::COMPUTER.contains(Coord::new(5, 11)));
}

#[test]
fn cell_index_roundtrip() {
    let grid = Grid::HUMAN;
    for c in grid.cells() {
        let (row, col) = grid.cell_index(c).unwrap();
        assert_eq!(grid.coord_at(row, col), c);
    }
    assert_eq!(grid.cells().count(), (GRID_SIZE as usize).pow(2));
    assert_eq!(grid.cell_index(Coord::new(10, 1)), None);
}

#[test]
fn neighbours_are_clipped() {
    let grid = Grid::COMPUTER;
    let corner = Coord::new(1, 1);
    assert_eq!(grid.orthogonal(corner).count(), 2);
    assert_eq!(grid.diagonal(corner).count(), 1);
    assert_eq!(grid.around(corner).count(), 3);

    let middle = Coord::new(5, 5);
    assert_eq!(grid.orthogonal(middle).count(), 4);
    assert_eq!(grid.diagonal(middle).count(), 4);
    assert_eq!(grid.around(middle).count(), 8);

    // x = 10 borders the other grid, which is not a neighbour
    let edge = Coord::new(10, 5);
    assert!(grid.around(edge).all(|c| grid.contains(c)));
    assert_eq!(grid.step(edge, 1, 0), None);
}

#[test]
fn cell_set_basics() {
    let grid = Grid::COMPUTER;
    let mut set = CellSet::empty(grid);
    assert!(set.is_empty());
    assert!(set.insert(Coord::new(3, 4)));
    assert!(!set.insert(Coord::new(3, 4)));
    assert!(!set.insert(Coord::new(13, 4)));
    assert_eq!(set.len(), 1);
    assert!(set.contains(Coord::new(3, 4)));
    assert!(set.remove(Coord::new(3, 4)));
    assert!(!set.remove(Coord::new(3, 4)));

    let full = CellSet::full(grid);
    assert_eq!(full.len(), 100);
    let some = CellSet::from_coords(grid, [Coord::new(1, 1), Coord::new(2, 1)]);
    assert!(some.is_subset(&full));

    let mut rest = full;
    rest.subtract(&some);
    assert_eq!(rest.len(), 98);
    assert!(rest.is_disjoint(&some));
}

#[test]
fn cell_set_choose() {
    let grid = Grid::HUMAN;
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(CellSet::empty(grid).choose(&mut rng), None);

    let set = CellSet::from_coords(grid, [Coord::new(12, 3), Coord::new(19, 9)]);
    for _ in 0..20 {
        let c = set.choose(&mut rng).unwrap();
        assert!(set.contains(c));
    }
}

#[test]
fn highest_offset_fits_in_u8() {
    let grid = Grid::new(Grid::MAX_OFFSET);
    assert_eq!(grid.max_x(), u8::MAX);
    assert_eq!(grid.coord_at(9, 9), Coord::new(u8::MAX, 10));
}

#[test]
#[should_panic(expected = "grid offset out of range")]
fn offset_past_the_plane_is_rejected() {
    let _ = Grid::new(250);
}
