use checkers::game::{GameState, Outcome};
use checkers::opponent::play_random_turn;
use checkers::piece::Color;

const GAMES: usize = 1000;
const MAX_TURNS: usize = 300;

#[derive(Debug, Default)]
struct Tally {
    dark_wins: u32,
    light_wins: u32,
    ties: u32,
    unfinished: u32,
    total_turns: usize,
}

/// One random-vs-random game from the standard setup: the final outcome
/// (InProgress when blocked or at the turn cap) and the number of turns
/// played.
fn play_game() -> (Outcome, usize) {
    let mut game = GameState::new();
    let mut turns = 0;
    while turns < MAX_TURNS && !game.outcome().is_over() {
        if play_random_turn(&mut game).is_none() {
            break;
        }
        turns += 1;
    }
    (game.outcome(), turns)
}

fn main() {
    let mut tally = Tally::default();
    for _ in 0..GAMES {
        let (outcome, turns) = play_game();
        tally.total_turns += turns;
        match outcome {
            Outcome::Winner(Color::Dark) => tally.dark_wins += 1,
            Outcome::Winner(Color::Light) => tally.light_wins += 1,
            Outcome::Tie => tally.ties += 1,
            Outcome::InProgress => tally.unfinished += 1,
        }
    }

    println!("=== Random self-play, {GAMES} games ===");
    println!("  Dark wins:  {}", tally.dark_wins);
    println!("  Light wins: {}", tally.light_wins);
    println!("  Ties:       {}", tally.ties);
    println!("  Unfinished: {}", tally.unfinished);
    println!(
        "  Average length: {:.1} turns",
        tally.total_turns as f64 / GAMES as f64
    );
}
