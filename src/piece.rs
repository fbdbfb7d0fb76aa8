use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    /// The row on which this color's men are crowned: the far row seen from
    /// its home rows.
    pub fn king_row(self) -> i32 {
        match self {
            Color::Dark => 7,
            Color::Light => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Dark => write!(f, "Dark"),
            Color::Light => write!(f, "Light"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Rank {
    Man,
    King,
}

/// One checker. Board cells hold `Option<Piece>`; an empty cell is `None`.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub fn man(color: Color) -> Piece {
        Piece {
            color,
            rank: Rank::Man,
        }
    }

    pub fn king(color: Color) -> Piece {
        Piece {
            color,
            rank: Rank::King,
        }
    }
}
