use seabattle::{CombatResolver, ShipPlacer, Shooter, HUMAN_OFFSET};
use serde_json::json;

/// Let the computer clear `games` random fleets and report how many shots
/// each one took.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };
    if games == 0 {
        anyhow::bail!("games must be at least 1");
    }

    let mut placer = ShipPlacer::new(seed);
    let mut resolver = CombatResolver::new(seed.wrapping_add(1));
    let mut shots = Vec::with_capacity(games);
    for _ in 0..games {
        let mut fleet = placer.generate(HUMAN_OFFSET);
        resolver.reset();
        let mut count = 0usize;
        while !fleet.is_defeated() {
            let target = resolver
                .computer_target()
                .ok_or_else(|| anyhow::anyhow!("no target left on an undefeated grid"))?;
            resolver
                .resolve_shot(target, &mut fleet, Shooter::Computer)
                .map_err(|e| anyhow::anyhow!(e))?;
            count += 1;
        }
        shots.push(count);
    }

    let total: usize = shots.iter().sum();
    let result = json!({
        "seed": seed,
        "games": games,
        "mean_shots": total as f64 / games as f64,
        "min_shots": shots.iter().min(),
        "max_shots": shots.iter().max(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
