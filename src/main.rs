#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use chomp::{
    init_logging, print_board, Action, AiPlayer, CliPlayer, GameEngine, Player, PlayerId,
    DEFAULT_COLS, DEFAULT_ROWS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum FirstMover {
    Human,
    Computer,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = FirstMover::Human)]
        first: FirstMover,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            rows,
            cols,
            seed,
            first,
        } => play(rows, cols, seed, first),
    }
}

#[cfg(feature = "std")]
fn play(rows: usize, cols: usize, seed: Option<u64>, first: FirstMover) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = GameEngine::new(rows, cols).map_err(|e| anyhow::anyhow!(e))?;
    println!(
        "Chomp on a {} x {} board. The poison square is (0, 0); whoever is left with it loses.",
        rows, cols
    );

    let human_seat = match first {
        FirstMover::Human => PlayerId::One,
        FirstMover::Computer => PlayerId::Two,
    };
    let mut human = CliPlayer::new();
    let mut computer = AiPlayer::new();

    loop {
        if let Some(winner) = engine.winner() {
            print_board(&engine);
            if winner == human_seat {
                println!("You win! The computer is left with the poison square.");
            } else {
                println!("The computer wins. Only the poison square is left for you.");
            }
            break;
        }

        let seat = engine.current_player();
        let action = if seat == human_seat {
            human.next_action(&mut rng, &engine)
        } else {
            computer.next_action(&mut rng, &engine)
        };

        match action {
            Action::Chomp(x, y) => match engine.remove(x, y) {
                Ok(()) => {
                    log::debug!("applied move ({}, {})", x, y);
                    if seat != human_seat {
                        human.notify_move(seat, (x, y));
                    }
                }
                Err(e) => println!("{}", e),
            },
            Action::Undo => match engine.undo() {
                Ok(()) => {
                    // take the opponent's reply back as well so the turn
                    // returns to the player who asked
                    if engine.current_player() != seat {
                        let _ = engine.undo();
                    }
                    println!("Move undone.");
                }
                Err(e) => println!("{}", e),
            },
            Action::Quit => {
                if seat == human_seat {
                    println!("Thanks for playing Chomp!");
                } else {
                    // the computer only concedes when no removable square is left
                    println!("The computer has only the poison square left. You win!");
                }
                break;
            }
        }
    }
    Ok(())
}
