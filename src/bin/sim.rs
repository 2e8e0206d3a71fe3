use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, Game, RandomPlayer, Side, BOARD_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut wins = [0u64; 2];
    let mut total_turns = 0u64;
    for game_no in 0..games {
        let game_seed = seed.wrapping_add(game_no);
        let mut game = Game::new(
            Box::new(RandomPlayer::new(BOARD_SIZE)),
            Box::new(RandomPlayer::new(BOARD_SIZE)),
            SmallRng::seed_from_u64(game_seed),
        )?;
        let winner = game.run();
        let label = match winner {
            Side::One => {
                wins[0] += 1;
                "one"
            }
            Side::Two => {
                wins[1] += 1;
                "two"
            }
        };
        total_turns += u64::from(game.turns());

        let line = json!({
            "game": game_no,
            "seed": game_seed,
            "winner": label,
            "turns": game.turns(),
        });
        println!("{}", serde_json::to_string(&line)?);
    }

    let mean_turns = if games > 0 {
        total_turns as f64 / games as f64
    } else {
        0.0
    };
    let summary = json!({
        "games": games,
        "wins": {"one": wins[0], "two": wins[1]},
        "mean_turns": mean_turns,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
