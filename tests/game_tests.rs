use seabattle::{
    Coord, FleetBuilder, Game, GameStatus, Grid, PlacementError, ShipPlacer, Shooter, ShotError,
    COMPUTER_OFFSET, HUMAN_OFFSET,
};

// Next cell on the computer's grid the human has not fired at.
fn fresh_target(game: &Game) -> Coord {
    let board = game.resolver().board(Shooter::Human);
    Grid::COMPUTER
        .cells()
        .find(|&c| !board.is_resolved(c))
        .unwrap()
}

fn play_out(game: &mut Game) {
    while game.status() == GameStatus::InProgress {
        match game.turn() {
            Shooter::Human => {
                let target = fresh_target(game);
                game.human_fires(target).unwrap();
            }
            Shooter::Computer => {
                game.computer_fires().unwrap();
            }
        }
    }
}

#[test]
fn human_moves_first() {
    let mut game = Game::new(42);
    assert_eq!(game.turn(), Shooter::Human);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.computer_fires(), Err(ShotError::NotYourTurn));
}

#[test]
fn miss_passes_the_turn_and_hit_keeps_it() {
    let mut game = Game::new(42);
    let occupied = *game.computer_fleet().occupied();

    let miss = Grid::COMPUTER.cells().find(|&c| !occupied.contains(c)).unwrap();
    assert!(!game.human_fires(miss).unwrap().is_hit());
    assert_eq!(game.turn(), Shooter::Computer);
    assert_eq!(game.human_fires(miss), Err(ShotError::NotYourTurn));

    // let the computer play until the human is up again
    while game.turn() == Shooter::Computer && game.status() == GameStatus::InProgress {
        game.computer_fires().unwrap();
    }
    if game.status() != GameStatus::InProgress {
        return;
    }

    let hit = occupied.iter().next().unwrap();
    assert!(game.human_fires(hit).unwrap().is_hit());
    assert_eq!(game.turn(), Shooter::Human);
}

#[test]
fn rejected_shots_keep_the_turn() {
    let mut game = Game::new(3);
    assert_eq!(
        game.human_fires(Coord::new(15, 5)),
        Err(ShotError::OutOfBounds(Coord::new(15, 5)))
    );
    assert_eq!(game.turn(), Shooter::Human);
}

#[test]
fn game_runs_to_completion() {
    let mut game = Game::new(7);
    play_out(&mut game);
    let status = game.status();
    assert_ne!(status, GameStatus::InProgress);
    match status {
        GameStatus::Won => assert!(game.computer_fleet().is_defeated()),
        GameStatus::Lost => assert!(game.human_fleet().is_defeated()),
        GameStatus::InProgress => unreachable!(),
    }
    assert_eq!(game.computer_fires(), Err(ShotError::GameOver));
    assert_eq!(
        game.human_fires(Coord::new(1, 1)),
        Err(ShotError::GameOver)
    );
}

#[test]
fn play_again_starts_fresh() {
    let mut game = Game::new(11);
    play_out(&mut game);
    game.play_again();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), Shooter::Human);
    assert_eq!(game.human_fleet().occupied().len(), 20);
    assert_eq!(game.computer_fleet().occupied().len(), 20);
    let resolver = game.resolver();
    assert!(resolver.revealed().is_empty());
    assert!(resolver.board(Shooter::Human).hits().is_empty());
    assert!(resolver.board(Shooter::Computer).dotted().is_empty());
    assert_eq!(resolver.hunter().fire_eligible().len(), 100);

    play_out(&mut game);
    assert_ne!(game.status(), GameStatus::InProgress);
}

#[test]
fn hand_drawn_fleet() {
    let generated = ShipPlacer::new(8).generate(HUMAN_OFFSET);
    let mut builder = FleetBuilder::new(Grid::HUMAN);
    for ship in generated.ships() {
        builder.add_ship(ship.cells()).unwrap();
    }
    let fleet = builder.build().unwrap();
    let game = Game::with_human_fleet(1, fleet).unwrap();
    assert_eq!(game.human_fleet().ships(), generated.ships());

    let wrong = ShipPlacer::new(8).generate(COMPUTER_OFFSET);
    assert!(matches!(
        Game::with_human_fleet(1, wrong),
        Err(PlacementError::WrongGrid)
    ));

    let partial = FleetBuilder::new(Grid::HUMAN).build_partial();
    assert!(matches!(
        Game::with_human_fleet(1, partial),
        Err(PlacementError::Incomplete)
    ));
}

#[test]
fn play_again_with_a_drawn_fleet() {
    let mut game = Game::new(13);
    play_out(&mut game);

    let drawn = ShipPlacer::new(77).generate(HUMAN_OFFSET);
    let wrong = ShipPlacer::new(77).generate(COMPUTER_OFFSET);
    let before = game.status();
    assert!(matches!(
        game.play_again_with_human_fleet(wrong),
        Err(PlacementError::WrongGrid)
    ));
    assert_eq!(game.status(), before);

    game.play_again_with_human_fleet(drawn.clone()).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), Shooter::Human);
    assert_eq!(game.human_fleet().ships(), drawn.ships());
    assert_eq!(game.human_fleet().occupied().len(), 20);
    assert_eq!(game.resolver().hunter().fire_eligible().len(), 100);
}
