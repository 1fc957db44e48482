//! A human-versus-computer session: fleets, turns and status.

use crate::{
    common::{PlacementError, ShotError, ShotOutcome, Shooter},
    config::{COMPUTER_OFFSET, HUMAN_OFFSET, NUM_SHIPS},
    grid::{Coord, Grid},
    placer::ShipPlacer,
    resolver::CombatResolver,
    ship::Fleet,
};

/// Current status of a game, from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One human-versus-computer session: both fleets, the combat state and
/// whose turn it is. A hit earns the shooter another shot.
pub struct Game {
    placer: ShipPlacer,
    resolver: CombatResolver,
    human: Fleet,
    computer: Fleet,
    turn: Shooter,
}

impl Game {
    /// Start a game with randomly placed fleets for both sides.
    pub fn new(seed: u64) -> Self {
        let mut placer = ShipPlacer::new(seed);
        let human = placer.generate(HUMAN_OFFSET);
        let computer = placer.generate(COMPUTER_OFFSET);
        Self {
            placer,
            resolver: CombatResolver::new(seed.wrapping_add(1)),
            human,
            computer,
            turn: Shooter::Human,
        }
    }

    /// Start a game with a fleet the human drew by hand.
    pub fn with_human_fleet(seed: u64, fleet: Fleet) -> Result<Self, PlacementError> {
        Self::check_human_fleet(&fleet)?;
        let mut game = Self::new(seed);
        game.human = fleet;
        Ok(game)
    }

    pub fn turn(&self) -> Shooter {
        self.turn
    }

    pub fn human_fleet(&self) -> &Fleet {
        &self.human
    }

    pub fn computer_fleet(&self) -> &Fleet {
        &self.computer
    }

    pub fn resolver(&self) -> &CombatResolver {
        &self.resolver
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.computer.is_defeated() {
            GameStatus::Won
        } else if self.human.is_defeated() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The human fires at `target` on the computer's grid.
    pub fn human_fires(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        self.fire(Shooter::Human, target)
    }

    /// The computer picks a target on the human's grid and fires at it.
    pub fn computer_fires(&mut self) -> Result<(Coord, ShotOutcome), ShotError> {
        self.check_turn(Shooter::Computer)?;
        let target = self
            .resolver
            .computer_target()
            .ok_or(ShotError::GameOver)?;
        let outcome = self.fire(Shooter::Computer, target)?;
        Ok((target, outcome))
    }

    /// New fleets for both sides and a clean slate for the resolver.
    pub fn play_again(&mut self) {
        self.human = self.placer.generate(HUMAN_OFFSET);
        self.computer = self.placer.generate(COMPUTER_OFFSET);
        self.resolver.reset();
        self.turn = Shooter::Human;
        log::info!("new game started");
    }

    /// Like [`Game::play_again`], but the human brings a fleet drawn by hand.
    /// On error the finished game is left as it was.
    pub fn play_again_with_human_fleet(&mut self, fleet: Fleet) -> Result<(), PlacementError> {
        Self::check_human_fleet(&fleet)?;
        self.play_again();
        self.human = fleet;
        Ok(())
    }

    fn check_human_fleet(fleet: &Fleet) -> Result<(), PlacementError> {
        if fleet.grid() != Grid::HUMAN {
            return Err(PlacementError::WrongGrid);
        }
        if fleet.ships().len() != NUM_SHIPS {
            return Err(PlacementError::Incomplete);
        }
        Ok(())
    }

    fn check_turn(&self, shooter: Shooter) -> Result<(), ShotError> {
        if self.status() != GameStatus::InProgress {
            return Err(ShotError::GameOver);
        }
        if self.turn != shooter {
            return Err(ShotError::NotYourTurn);
        }
        Ok(())
    }

    fn fire(&mut self, shooter: Shooter, target: Coord) -> Result<ShotOutcome, ShotError> {
        self.check_turn(shooter)?;
        let defender = match shooter {
            Shooter::Human => &mut self.computer,
            Shooter::Computer => &mut self.human,
        };
        let outcome = self.resolver.resolve_shot(target, defender, shooter)?;
        log::debug!("{:?} fired at {}: {:?}", shooter, target, outcome);
        if !outcome.is_hit() {
            self.turn = shooter.opponent();
        }
        match self.status() {
            GameStatus::Won => log::info!("human won"),
            GameStatus::Lost => log::info!("computer won"),
            GameStatus::InProgress => {}
        }
        Ok(outcome)
    }
}
