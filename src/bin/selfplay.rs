use checkers::game::GameState;
use checkers::moves::MovePath;
use checkers::opponent::play_random_turn;

/// Random play can shuffle kings around forever; stop watching after this.
const MAX_TURNS: usize = 300;

fn main() {
    let mut game = GameState::new();
    let mut record: Vec<MovePath> = Vec::new();

    while !game.outcome().is_over() && record.len() < MAX_TURNS {
        let mover = game.current_turn();
        match play_random_turn(&mut game) {
            Some(path) => {
                eprintln!("{:>3}. {mover} {path}", record.len() + 1);
                record.push(path);
            }
            None => {
                eprintln!("     {mover} has no legal move");
                break;
            }
        }
    }

    eprintln!("\n{}", game.board());
    eprintln!("Result after {} turns: {}", record.len(), game.outcome());

    // machine-readable game record on stdout
    match serde_json::to_string(&record) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to encode game record: {err}"),
    }
}
