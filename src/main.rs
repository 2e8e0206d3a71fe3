use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, render_board, CliPlayer, Game, GameState, RandomPlayer, Side, BOARD_SIZE,
    GREETING,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => play(make_rng(seed)),
        Commands::Auto { seed } => auto(make_rng(seed)),
    }
}

fn play(rng: SmallRng) -> anyhow::Result<()> {
    println!("{}", GREETING);
    let mut game = Game::new(
        Box::new(CliPlayer::new()),
        Box::new(RandomPlayer::new(BOARD_SIZE)),
        rng,
    )?;

    loop {
        match game.state() {
            GameState::Turn(side) => {
                println!("{}", "-".repeat(27));
                println!("Your board:");
                println!("{}", render_board(game.board(Side::One), true));
                println!("Computer board:");
                println!("{}", render_board(game.board(Side::Two), false));
                println!("{}", "-".repeat(27));
                match side {
                    Side::One => println!("Your move!"),
                    Side::Two => println!("Computer moves."),
                }
                game.step();
            }
            GameState::Won(side) => {
                println!("{}", "-".repeat(27));
                println!("Computer board:");
                println!("{}", render_board(game.board(Side::Two), true));
                match side {
                    Side::One => println!("You win!"),
                    Side::Two => println!("Computer wins!"),
                }
                return Ok(());
            }
        }
    }
}

fn auto(rng: SmallRng) -> anyhow::Result<()> {
    let mut game = Game::new(
        Box::new(RandomPlayer::new(BOARD_SIZE)),
        Box::new(RandomPlayer::new(BOARD_SIZE)),
        rng,
    )?;
    let winner = game.run();

    println!("Side one board:");
    println!("{}", render_board(game.board(Side::One), true));
    println!("Side two board:");
    println!("{}", render_board(game.board(Side::Two), true));
    let label = match winner {
        Side::One => "one",
        Side::Two => "two",
    };
    println!("Side {} wins after {} shots.", label, game.turns());
    Ok(())
}
