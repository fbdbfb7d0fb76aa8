use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece::{Color, Piece, Rank};
use crate::square::Square;

/// The 8×8 playing grid. Indexed `[y][x]` through `get`/`set` so every
/// access goes through one bounds contract.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test and
    /// problem positions.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting position: twelve Dark men on rows 0-2 and
    /// twelve Light men on rows 5-7, on the cells where `x + y` is odd.
    pub fn new() -> Self {
        let mut cells = [[None; 8]; 8];

        // Dark home rows (advancing toward y = 7)
        for y in 0..3 {
            for x in 0..8 {
                if (x + y) % 2 == 1 {
                    cells[y][x] = Some(Piece::man(Color::Dark));
                }
            }
        }

        // Light home rows (advancing toward y = 0)
        for y in 5..8 {
            for x in 0..8 {
                if (x + y) % 2 == 1 {
                    cells[y][x] = Some(Piece::man(Color::Light));
                }
            }
        }

        Board { cells }
    }

    /// Restore the starting position in place.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// The piece on `sq`, if any. Panics when `sq` is off the board; move
    /// generation bounds-checks every candidate square before reading it.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.y as usize][sq.x as usize]
    }

    /// Overwrite the cell at `sq`. Panics when `sq` is off the board.
    pub fn set(&mut self, sq: Square, cell: Option<Piece>) {
        self.cells[sq.y as usize][sq.x as usize] = cell;
    }

    /// Crown the piece on `sq`, if any.
    pub fn promote(&mut self, sq: Square) {
        if let Some(piece) = self.get(sq) {
            self.set(sq, Some(Piece::king(piece.color)));
        }
    }

    pub fn count(&self, color: Color) -> usize {
        let mut n = 0;
        for y in 0..8 {
            for x in 0..8 {
                if self.cells[y][x].map(|p| p.color == color).unwrap_or(false) {
                    n += 1;
                }
            }
        }
        n
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for y in (0..8).rev() {
            write!(f, "{}", y + 1)?;
            for x in 0..8 {
                let ch = match self.cells[y][x] {
                    None => '.',
                    Some(p) => match (p.color, p.rank) {
                        (Color::Dark, Rank::Man) => 'd',
                        (Color::Dark, Rank::King) => 'D',
                        (Color::Light, Rank::Man) => 'l',
                        (Color::Light, Rank::King) => 'L',
                    },
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
