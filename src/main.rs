#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use seabattle::{
    cli::{format_coord, parse_coord, parse_ship, render_fleet, render_game},
    init_logging, FleetBuilder, Game, GameStatus, Grid, ShipPlacer, Shooter, ShotOutcome, FLEET,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Draw your own ships instead of a random layout")]
    manual: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            s
        }
        None => rand::random(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    let mut game = if cli.manual {
        let fleet = match draw_fleet(seed, &mut input)? {
            Some(fleet) => fleet,
            None => return Ok(()),
        };
        Game::with_human_fleet(seed, fleet).map_err(|e| anyhow::anyhow!(e))?
    } else {
        Game::new(seed)
    };

    for round in 1u64.. {
        if !play(&mut game, &mut input)? {
            return Ok(());
        }
        match prompt(&mut input, "Play again? [y/N]: ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
            _ => return Ok(()),
        }
        if cli.manual {
            let fleet = match draw_fleet(seed.wrapping_add(round), &mut input)? {
                Some(fleet) => fleet,
                None => return Ok(()),
            };
            game.play_again_with_human_fleet(fleet)
                .map_err(|e| anyhow::anyhow!(e))?;
        } else {
            game.play_again();
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt<I>(input: &mut I, text: &str) -> anyhow::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{}", text);
    io::stdout().flush()?;
    input.next().transpose().map_err(Into::into)
}

/// Let the human draw ships one by one. `None` if input ends first.
#[cfg(feature = "std")]
fn draw_fleet<I>(seed: u64, input: &mut I) -> anyhow::Result<Option<seabattle::Fleet>>
where
    I: Iterator<Item = io::Result<String>>,
{
    let grid = Grid::HUMAN;
    let mut builder = FleetBuilder::new(grid);
    println!("Draw your ships as cell lists, e.g. `A1 A2 A3`.");
    println!("`undo` removes the last ship, `random` places the rest of the fleet for you.");
    while !builder.is_complete() {
        println!("\n{}", render_fleet(&builder.clone().build_partial()));
        let next = FLEET
            .iter()
            .find(|class| builder.remaining(class.length()) > 0)
            .map_or("ship", |class| class.name());
        let text = format!("{} ({} ships left): ", next, remaining_total(&builder));
        let line = match prompt(input, &text)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.trim() {
            "undo" => {
                if builder.undo().is_none() {
                    println!("Nothing to undo.");
                }
            }
            "random" => match ShipPlacer::new(seed).complete(&builder) {
                Ok(fleet) => return Ok(Some(fleet)),
                Err(e) => println!("{}", e),
            },
            text => match parse_ship(grid, text) {
                Ok(cells) => {
                    if let Err(e) = builder.add_ship(&cells) {
                        println!("{}", e);
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
    }
    builder.build().map(Some).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn remaining_total(builder: &FleetBuilder) -> usize {
    FLEET.iter().map(|class| builder.remaining(class.length())).sum()
}

/// Run one game to the end. Returns `false` if input ran out.
#[cfg(feature = "std")]
fn play<I>(game: &mut Game, input: &mut I) -> anyhow::Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    let enemy = Grid::COMPUTER;
    let own = Grid::HUMAN;
    while game.status() == GameStatus::InProgress {
        match game.turn() {
            Shooter::Human => {
                println!("\n{}", render_game(game));
                let line = match prompt(input, "Your shot: ")? {
                    Some(line) => line,
                    None => return Ok(false),
                };
                let target = match parse_coord(enemy, &line) {
                    Ok(c) => c,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                match game.human_fires(target) {
                    Ok(outcome) => report("You", &format_coord(enemy, target), &outcome),
                    Err(e) => println!("{}", e),
                }
            }
            Shooter::Computer => {
                let (target, outcome) = game.computer_fires().map_err(|e| anyhow::anyhow!(e))?;
                report("Computer", &format_coord(own, target), &outcome);
            }
        }
    }

    println!("\n{}", render_game(game));
    match game.status() {
        GameStatus::Won => println!("VICTORY! You have sunk all enemy ships!"),
        GameStatus::Lost => println!("DEFEAT. The computer sank your fleet."),
        GameStatus::InProgress => {}
    }
    Ok(true)
}

#[cfg(feature = "std")]
fn report(who: &str, cell: &str, outcome: &ShotOutcome) {
    match outcome {
        ShotOutcome::Miss => println!("{} fired at {}: miss", who, cell),
        ShotOutcome::Hit => println!("{} fired at {}: hit!", who, cell),
        ShotOutcome::Destroyed { length, .. } => {
            println!("{} fired at {}: destroyed a ship of length {}!", who, cell, length)
        }
    }
}
