use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::game::GameState;
use crate::moves::MovePath;
use crate::opponent;
use crate::piece::{Color, Rank};
use crate::square::Square;

#[derive(Serialize)]
struct CellJson {
    color: String,
    rank: String,
}

#[derive(Serialize)]
struct PathJson {
    origin: [i32; 2],
    destination: [i32; 2],
    steps: Vec<[i32; 2]>,
    captures: Vec<[i32; 2]>,
    notation: String,
}

#[derive(Serialize)]
struct SnapshotJson {
    cells: Vec<Vec<Option<CellJson>>>,
    turn: String,
    outcome: String,
    game_over: bool,
    legal_origins: Vec<[i32; 2]>,
    offered: Vec<PathJson>,
}

fn color_to_string(color: Color) -> String {
    match color {
        Color::Dark => "Dark".to_string(),
        Color::Light => "Light".to_string(),
    }
}

fn rank_to_string(rank: Rank) -> String {
    match rank {
        Rank::Man => "Man".to_string(),
        Rank::King => "King".to_string(),
    }
}

fn square_to_json(sq: Square) -> [i32; 2] {
    [sq.x, sq.y]
}

fn path_to_json(path: &MovePath) -> PathJson {
    PathJson {
        origin: square_to_json(path.origin()),
        destination: square_to_json(path.destination()),
        steps: path.steps().iter().map(|&s| square_to_json(s)).collect(),
        captures: path.captures().iter().map(|&s| square_to_json(s)).collect(),
        notation: path.to_string(),
    }
}

fn build_snapshot(state: &GameState) -> SnapshotJson {
    let cells: Vec<Vec<Option<CellJson>>> = (0..8)
        .map(|y| {
            (0..8)
                .map(|x| {
                    state.board().get(Square::new(x, y)).map(|p| CellJson {
                        color: color_to_string(p.color),
                        rank: rank_to_string(p.rank),
                    })
                })
                .collect()
        })
        .collect();

    let outcome = state.outcome();

    SnapshotJson {
        cells,
        turn: color_to_string(state.current_turn()),
        outcome: outcome.to_string(),
        game_over: outcome.is_over(),
        legal_origins: state
            .legal_origins()
            .into_iter()
            .map(square_to_json)
            .collect(),
        offered: state.destinations().iter().map(path_to_json).collect(),
    }
}

#[wasm_bindgen]
pub struct Game {
    state: GameState,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            state: GameState::new(),
        }
    }

    pub fn get_state(&self) -> JsValue {
        let snapshot = build_snapshot(&self.state);
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }

    /// Select the piece on (x, y); the returned snapshot carries the offered
    /// destinations (empty if the square is not a legal origin).
    pub fn select_origin(&mut self, x: i32, y: i32) -> JsValue {
        self.state.select_origin(Square::new(x, y));
        self.get_state()
    }

    /// Apply the offered path ending on (x, y). An unoffered square leaves
    /// the game unchanged.
    pub fn apply_destination(&mut self, x: i32, y: i32) -> JsValue {
        self.state.apply_destination(Square::new(x, y));
        self.get_state()
    }

    /// Let the computer play one uniformly random legal move for the side
    /// to move.
    pub fn play_random_turn(&mut self) -> JsValue {
        opponent::play_random_turn(&mut self.state);
        self.get_state()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}
