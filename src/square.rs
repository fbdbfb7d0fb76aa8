use std::fmt;

use serde::{Deserialize, Serialize};

/// A board coordinate: `x` is the column (file a..h), `y` is the row. The
/// fields are `i32` so that squares produced by offset arithmetic may lie
/// off the board; callers check `in_bounds` before touching the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Debug)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub fn new(x: i32, y: i32) -> Square {
        Square { x, y }
    }

    /// The square offset from this one by `(dx, dy)`. May leave the board.
    pub fn shift(self, dx: i32, dy: i32) -> Square {
        Square {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The square halfway between this one and `other`: the cell jumped
    /// over when `other` is a two-step diagonal away.
    pub fn midpoint(self, other: Square) -> Square {
        Square {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }

    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let file = (b'a' + self.x as u8) as char;
            let rank = (b'1' + self.y as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}
