use crate::ai;
use crate::board::Board;
use crate::common::GameError;
use alloc::vec::Vec;
use rand::Rng;

/// One of the two participants in a game. `One` moves first after a start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Serializable read-only snapshot of everything a presentation layer may
/// render. The board is a row-major two-dimensional array of booleans.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Vec<Vec<bool>>,
    pub rows: usize,
    pub cols: usize,
    pub rem: usize,
    pub current_player: PlayerId,
    pub winner: Option<PlayerId>,
}

/// Board copy plus the player whose turn it was before the move that
/// produced it.
#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    player: PlayerId,
}

/// Core game logic: board, turn order, winner detection, undo history.
///
/// An engine is an ordinary owned value with no global instance; a session
/// constructs one and serializes its own access to it.
pub struct GameEngine {
    board: Board,
    current: PlayerId,
    winner: Option<PlayerId>,
    history: Vec<Snapshot>,
}

impl GameEngine {
    /// Create an engine with a fresh `rows x cols` board, every square
    /// present.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            current: PlayerId::One,
            winner: None,
            history: Vec::new(),
        })
    }

    /// Replace the whole game with a fresh board. On failure the previous
    /// game is kept untouched.
    pub fn restart(&mut self, rows: usize, cols: usize) -> Result<(), GameError> {
        self.board = Board::new(rows, cols)?;
        self.current = PlayerId::One;
        self.winner = None;
        self.history.clear();
        Ok(())
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Squares still on the board.
    pub fn remaining(&self) -> usize {
        self.board.remaining()
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Set once a move has ended the game.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Moves applied since the last start; each one can be undone.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Take the square at column `x`, row `y` together with everything
    /// below-right of it. The mover who leaves only the poison square wins
    /// and keeps the turn; otherwise the turn passes to the opponent.
    pub fn remove(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        let snapshot = Snapshot {
            board: self.board.clone(),
            player: self.current,
        };
        self.board.chomp(x, y)?;
        self.history.push(snapshot);
        if self.board.only_poison_left() {
            self.winner = Some(self.current);
        } else {
            self.current = self.current.other();
        }
        Ok(())
    }

    /// Revert the most recent move. Always lands on a live position, so any
    /// winner is cleared.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board = snapshot.board;
        self.board.recount();
        self.current = snapshot.player;
        self.winner = None;
        Ok(())
    }

    /// `true` when only the poison square remains. Convenience predicate;
    /// `winner` is the authoritative terminal signal once a move has set it.
    pub fn is_lost(&self) -> bool {
        self.board.only_poison_left()
    }

    /// All removable squares, freshly computed.
    pub fn valid_moves(&self) -> Vec<(usize, usize)> {
        self.board.valid_moves()
    }

    /// Let the heuristic pick a move for the player to act and apply it
    /// through [`remove`](Self::remove). Fails with `NoMoveAvailable` when
    /// only the poison square is left; the caller decides what that means
    /// for the match.
    pub fn computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(usize, usize), GameError> {
        let (x, y) = ai::select_move(&self.board, rng).ok_or(GameError::NoMoveAvailable)?;
        self.remove(x, y)?;
        Ok((x, y))
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.cells().to_vec(),
            rows: self.board.rows(),
            cols: self.board.cols(),
            rem: self.board.remaining(),
            current_player: self.current,
            winner: self.winner,
        }
    }
}
