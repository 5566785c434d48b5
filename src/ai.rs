// Heuristic move selection for the computer opponent. Candidate moves are
// simulated on cloned boards; live game state is never touched.

use crate::board::Board;
use alloc::vec::Vec;
use log::debug;
use rand::Rng;

/// A position is a bad shape when more than one square survives in a single
/// row or a single column: whoever receives it can force the mover onto the
/// poison square. The terminal poison-only position is not bad.
pub fn is_bad_shape(board: &Board) -> bool {
    if board.remaining() <= 1 {
        return false;
    }
    board.active_rows() == 1 || board.active_cols() == 1
}

/// Choose a move for the side to act, or `None` when only the poison square
/// is left.
///
/// Moves that leave an odd number of squares in a shape that is not
/// degenerate are preferred; everything else lands in the fallback pool.
/// The pick within a pool is uniform under `rng`, so a seeded generator
/// makes the selection reproducible.
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let moves = board.valid_moves();
    if moves.is_empty() {
        return None;
    }
    let mut preferred = Vec::new();
    let mut fallback = Vec::new();
    for &(x, y) in &moves {
        let mut sim = board.clone();
        let good = match sim.chomp(x, y) {
            Ok(_) => sim.remaining() % 2 == 1 && !is_bad_shape(&sim),
            Err(_) => false,
        };
        if good {
            preferred.push((x, y));
        } else {
            fallback.push((x, y));
        }
    }
    debug!("{} candidates, {} preferred", moves.len(), preferred.len());
    let pool = if preferred.is_empty() {
        &fallback
    } else {
        &preferred
    };
    Some(pool[rng.random_range(0..pool.len())])
}
