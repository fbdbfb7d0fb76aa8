use std::fmt;

use serde::{Deserialize, Serialize};

use crate::square::Square;

/// How one piece travels on its turn: the squares visited from origin to
/// destination, plus the opponent squares captured along the way. Built once
/// by move generation and never modified afterwards; playing a different
/// move means picking a different path value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct MovePath {
    /// Origin first, destination last. For jumps the squares jumped over
    /// appear between the landings, in travel order.
    steps: Vec<Square>,
    /// The squares captured by this path, which are exactly the midpoints
    /// of each jump segment. Empty for a plain step.
    captures: Vec<Square>,
}

impl MovePath {
    /// A plain one-square diagonal move.
    pub fn step(origin: Square, dest: Square) -> MovePath {
        MovePath {
            steps: vec![origin, dest],
            captures: Vec::new(),
        }
    }

    /// A single jump from `origin` over `over`, landing on `landing`.
    pub fn jump(origin: Square, over: Square, landing: Square) -> MovePath {
        MovePath {
            steps: vec![origin, over, landing],
            captures: vec![over],
        }
    }

    /// Extend a jump with a further jump from its current destination.
    pub fn then_jump(mut self, over: Square, landing: Square) -> MovePath {
        self.steps.push(over);
        self.steps.push(landing);
        self.captures.push(over);
        self
    }

    pub fn origin(&self) -> Square {
        self.steps[0]
    }

    /// Where the piece ends up.
    pub fn destination(&self) -> Square {
        *self.steps.last().expect("a move path is never empty")
    }

    pub fn steps(&self) -> &[Square] {
        &self.steps
    }

    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Display for MovePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capture() {
            // landings joined by 'x' (e.g. "c3xe5xg7"), skipping the jumped squares
            let mut sep = "";
            for sq in self.steps.iter().step_by(2) {
                write!(f, "{sep}{sq}")?;
                sep = "x";
            }
            Ok(())
        } else {
            write!(f, "{}-{}", self.origin(), self.destination())
        }
    }
}
