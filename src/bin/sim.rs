#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use chomp::{GameEngine, PlayerId, DEFAULT_COLS, DEFAULT_ROWS};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    chomp::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 5 {
        eprintln!("Usage: {} <seed1> <seed2> [rows cols]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let (rows, cols) = if args.len() == 5 {
        (args[3].parse()?, args[4].parse()?)
    } else {
        (DEFAULT_ROWS, DEFAULT_COLS)
    };

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut engine = GameEngine::new(rows, cols).map_err(|e| anyhow::anyhow!(e))?;

    let winner = loop {
        if let Some(w) = engine.winner() {
            break w;
        }
        if engine.is_lost() {
            // the mover has no removable square and must take the poison
            break engine.current_player().other();
        }
        let rng = if engine.current_player() == PlayerId::One {
            &mut rng1
        } else {
            &mut rng2
        };
        engine.computer_move(rng).map_err(|e| anyhow::anyhow!(e))?;
    };

    let result = json!({
        "rows": rows,
        "cols": cols,
        "moves": engine.moves_played(),
        "winner": match winner {
            PlayerId::One => "player1",
            PlayerId::Two => "player2",
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
