use crate::game::{GameEngine, PlayerId};
use rand::rngs::SmallRng;

/// What a participant wants to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Remove the square at column `x`, row `y`.
    Chomp(usize, usize),
    /// Take back the previous move.
    Undo,
    /// Concede or leave the game.
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Decide what to do with the current turn.
    fn next_action(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Action;

    /// Inform the player of a move applied to the board.
    fn notify_move(&mut self, _mover: PlayerId, _coord: (usize, usize)) {}
}
