use crate::ai;
use crate::game::GameEngine;
use crate::player::{Action, Player};
use rand::rngs::SmallRng;

/// Computer opponent backed by the heuristic selector.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn next_action(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Action {
        match ai::select_move(engine.board(), rng) {
            Some((x, y)) => Action::Chomp(x, y),
            // no removable square left: concede the poison square
            None => Action::Quit,
        }
    }
}
