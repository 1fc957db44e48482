use seabattle::{
    Coord, FleetBuilder, Grid, Orientation, PlacementError, Ship, ShipPlacer, HUMAN_OFFSET,
};

fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y)
}

#[test]
fn ship_shape() {
    let ship = Ship::new(vec![c(3, 2), c(2, 2), c(4, 2)]);
    assert_eq!(ship.cells(), &[c(2, 2), c(3, 2), c(4, 2)]);
    assert_eq!(ship.orientation(), Some(Orientation::Horizontal));
    assert_eq!(ship.ends(), Some((c(2, 2), c(4, 2))));
    assert!(!ship.is_destroyed());

    let boat = Ship::new(vec![c(5, 5)]);
    assert_eq!(boat.orientation(), None);
    assert_eq!(boat.ends(), Some((c(5, 5), c(5, 5))));

    assert!(Ship::is_straight(&[c(1, 1), c(1, 2), c(1, 3)]));
    assert!(!Ship::is_straight(&[c(1, 1), c(1, 3)]));
    assert!(!Ship::is_straight(&[c(1, 1), c(2, 2)]));
    assert!(!Ship::is_straight(&[]));
}

#[test]
fn builder_rejects_bad_ships() {
    let mut builder = FleetBuilder::new(Grid::HUMAN);
    assert_eq!(builder.add_ship(&[]), Err(PlacementError::InvalidLength(0)));
    let five: Vec<_> = (11..16).map(|x| c(x, 1)).collect();
    assert_eq!(builder.add_ship(&five), Err(PlacementError::InvalidLength(5)));
    assert_eq!(
        builder.add_ship(&[c(5, 1)]),
        Err(PlacementError::OutOfBounds(c(5, 1)))
    );
    assert_eq!(
        builder.add_ship(&[c(11, 1), c(13, 1)]),
        Err(PlacementError::NotStraight)
    );

    builder.add_ship(&[c(11, 1), c(12, 1), c(13, 1), c(14, 1)]).unwrap();
    assert_eq!(
        builder.add_ship(&[c(11, 5), c(12, 5), c(13, 5), c(14, 5)]),
        Err(PlacementError::TooManyShips { length: 4 })
    );
    // diagonal contact counts as touching
    assert_eq!(
        builder.add_ship(&[c(15, 2)]),
        Err(PlacementError::TouchesAnotherShip)
    );
    assert_eq!(builder.ships().len(), 1);
}

#[test]
fn builder_undo_frees_cells() {
    let mut builder = FleetBuilder::new(Grid::HUMAN);
    builder.add_ship(&[c(11, 1), c(12, 1)]).unwrap();
    builder.add_ship(&[c(20, 10)]).unwrap();
    assert_eq!(builder.remaining(1), 3);

    let undone = builder.undo().unwrap();
    assert_eq!(undone.cells(), &[c(20, 10)]);
    assert_eq!(builder.remaining(1), 4);
    builder.add_ship(&[c(20, 9)]).unwrap();

    builder.undo();
    builder.undo();
    assert!(builder.undo().is_none());
    builder.add_ship(&[c(12, 2)]).unwrap();
}

#[test]
fn builder_completes_a_fleet() {
    let grid = Grid::HUMAN;
    let mut builder = FleetBuilder::new(grid);
    assert!(!builder.is_complete());
    assert!(matches!(
        builder.clone().build(),
        Err(PlacementError::Incomplete)
    ));

    // redraw a generated layout by hand
    let generated = ShipPlacer::new(3).generate(HUMAN_OFFSET);
    for ship in generated.ships() {
        builder.add_ship(ship.cells()).unwrap();
    }
    assert!(builder.is_complete());
    let fleet = builder.build().unwrap();
    assert_eq!(fleet.ships(), generated.ships());
    assert_eq!(fleet.occupied().len(), 20);

    let first = &generated.ships()[0];
    let cell = first.cells()[0];
    assert_eq!(fleet.ship_at(cell), Some(first));
    let empty = grid.cells().find(|&c| !fleet.occupied().contains(c)).unwrap();
    assert_eq!(fleet.ship_at(empty), None);
}

#[test]
fn random_fill_keeps_drawn_ships() {
    let grid = Grid::HUMAN;
    let mut builder = FleetBuilder::new(grid);
    builder.add_ship(&[c(20, 10)]).unwrap();
    builder.add_ship(&[c(11, 1), c(12, 1), c(13, 1)]).unwrap();

    let fleet = ShipPlacer::new(1).complete(&builder).unwrap();
    assert_eq!(fleet.ships().len(), 10);
    assert_eq!(fleet.occupied().len(), 20);
    assert_eq!(&fleet.ships()[..2], builder.ships());

    // the filled fleet redraws cleanly, so nothing touches or overflows
    let mut redraw = FleetBuilder::new(grid);
    for ship in fleet.ships() {
        redraw.add_ship(ship.cells()).unwrap();
    }
    assert!(redraw.is_complete());
}

#[test]
fn random_fill_of_a_complete_fleet_changes_nothing() {
    let generated = ShipPlacer::new(2).generate(HUMAN_OFFSET);
    let mut builder = FleetBuilder::new(Grid::HUMAN);
    for ship in generated.ships() {
        builder.add_ship(ship.cells()).unwrap();
    }
    let fleet = ShipPlacer::new(99).complete(&builder).unwrap();
    assert_eq!(fleet.ships(), generated.ships());
}
