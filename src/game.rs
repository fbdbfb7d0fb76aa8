use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::movegen;
use crate::moves::MovePath;
use crate::piece::Color;
use crate::square::Square;

/// How a game stands. One piece left on each side counts as a tie; a side
/// with nothing left has lost.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Outcome {
    InProgress,
    Tie,
    Winner(Color),
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Tie => write!(f, "tie"),
            Outcome::Winner(color) => write!(f, "{color} wins"),
        }
    }
}

/// One game of checkers: the board, whose turn it is, and the destination
/// paths currently offered for a selected piece. Play advances in two
/// steps, `select_origin` then `apply_destination`, matching the two clicks
/// a front end turns into a move.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    offered: Vec<MovePath>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game from the standard setup. Dark moves first.
    pub fn new() -> GameState {
        GameState {
            board: Board::new(),
            turn: Color::Dark,
            offered: Vec::new(),
        }
    }

    /// A game from an arbitrary position with `turn` to move. Useful for
    /// problems and test positions.
    pub fn with_board(board: Board, turn: Color) -> GameState {
        GameState {
            board,
            turn,
            offered: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// The destination paths offered for the last selected origin. Empty
    /// until a legal origin is selected.
    pub fn destinations(&self) -> &[MovePath] {
        &self.offered
    }

    /// The offered path ending on `dest`, if any. When two offered paths
    /// share a destination, the first generated one wins.
    pub fn path_to(&self, dest: Square) -> Option<&MovePath> {
        self.offered.iter().find(|p| p.destination() == dest)
    }

    /// The squares the side to move may move from, under the mandatory-
    /// capture rule: if any piece of that color can capture, only capturing
    /// pieces are listed.
    pub fn legal_origins(&self) -> Vec<Square> {
        movegen::legal_origins(&self.board, self.turn)
    }

    /// Offer the legal destinations of the piece on `origin`. Selecting a
    /// square that is not a legal origin (empty, the wrong color, off the
    /// board, or barred because a capture exists elsewhere) leaves nothing
    /// offered.
    pub fn select_origin(&mut self, origin: Square) {
        self.offered.clear();
        if !movegen::legal_origins(&self.board, self.turn).contains(&origin) {
            return;
        }
        self.offered = movegen::moves_from(&self.board, origin).into_paths();
    }

    /// Play the offered path ending on `dest`: vacate the origin, remove
    /// every captured piece, land the mover, crown it on the far row, and
    /// pass the turn. Choosing a square that is not offered changes nothing,
    /// the standing offer included.
    pub fn apply_destination(&mut self, dest: Square) {
        let path = match self.path_to(dest) {
            Some(p) => p.clone(),
            None => return,
        };
        let piece = self
            .board
            .get(path.origin())
            .expect("an offered path starts on an occupied square");

        self.board.set(path.origin(), None);
        for &captured in path.captures() {
            self.board.set(captured, None);
        }
        self.board.set(dest, Some(piece));

        if dest.y == piece.color.king_row() {
            self.board.promote(dest);
        }

        self.turn = self.turn.opposite();
        self.offered.clear();
    }

    /// The game's standing, judged from piece counts alone and recomputed
    /// on every call. Counts only ever fall, so a finished game stays
    /// finished; callers driving a session stop when this leaves
    /// `InProgress`.
    pub fn outcome(&self) -> Outcome {
        let dark = self.board.count(Color::Dark);
        let light = self.board.count(Color::Light);
        if dark == 1 && light == 1 {
            Outcome::Tie
        } else if dark == 0 {
            Outcome::Winner(Color::Light)
        } else if light == 0 {
            Outcome::Winner(Color::Dark)
        } else {
            Outcome::InProgress
        }
    }

    /// Start over: standard setup, Dark to move, nothing offered.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Color::Dark;
        self.offered.clear();
    }
}
