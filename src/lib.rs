pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod opponent;
pub mod piece;
pub mod square;

#[cfg(target_arch = "wasm32")]
mod wasm_api;
