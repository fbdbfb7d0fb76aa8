use crate::game::GameState;
use crate::moves::MovePath;

/// Platform-appropriate random number in [0, 1).
/// Uses js_sys::Math::random() in WASM builds, rand crate natively.
fn random_f64() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }
}

/// A uniform index into `len` choices. `len` must be nonzero.
fn pick(len: usize) -> usize {
    ((random_f64() * len as f64) as usize).min(len - 1)
}

/// Play one turn for the side to move: a uniformly random legal origin,
/// then a uniformly random destination among that piece's offered paths.
/// The origin list already honors the mandatory-capture rule, so a capture
/// is taken whenever one exists. Returns the path played, or `None` when
/// the game is over or the side to move has no legal move.
pub fn play_random_turn(state: &mut GameState) -> Option<MovePath> {
    if state.outcome().is_over() {
        return None;
    }

    let origins = state.legal_origins();
    if origins.is_empty() {
        return None;
    }
    state.select_origin(origins[pick(origins.len())]);

    let paths = state.destinations();
    if paths.is_empty() {
        return None;
    }
    let path = paths[pick(paths.len())].clone();
    state.apply_destination(path.destination());
    Some(path)
}
