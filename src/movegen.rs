// =============================================================================
// Move generation
//
// Pure functions over a Board: nothing here mutates state or remembers
// anything between calls. For one origin square, `simple_moves` lists the
// plain diagonal steps and `captures` lists the jump paths, chaining a
// mandatory second jump where one exists. `moves_from` combines the two
// under the capture-precedence rule, and the board-wide scans
// `has_any_capture` / `legal_origins` decide which pieces may move at all.
//
// Coordinate system: x = column (file a..h), y = row. Dark men advance
// toward y = 7, Light men toward y = 0, kings both ways.
// =============================================================================

use crate::board::Board;
use crate::moves::MovePath;
use crate::piece::{Color, Piece, Rank};
use crate::square::Square;

/// The diagonal directions a piece may travel: both forward diagonals for a
/// man, all four diagonals for a king.
fn directions(piece: Piece) -> &'static [(i32, i32)] {
    const DARK_MAN: [(i32, i32); 2] = [(-1, 1), (1, 1)];
    const LIGHT_MAN: [(i32, i32); 2] = [(-1, -1), (1, -1)];
    const KING: [(i32, i32); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

    match piece.rank {
        Rank::King => &KING,
        Rank::Man => match piece.color {
            Color::Dark => &DARK_MAN,
            Color::Light => &LIGHT_MAN,
        },
    }
}

/// The legal non-capturing moves from `origin`: one diagonal step onto an
/// empty in-bounds square. Empty when the origin holds no piece.
pub fn simple_moves(board: &Board, origin: Square) -> Vec<MovePath> {
    let mut moves = Vec::new();
    let piece = match board.get(origin) {
        Some(p) => p,
        None => return moves,
    };

    for &(dx, dy) in directions(piece) {
        let dest = origin.shift(dx, dy);
        if dest.in_bounds() && board.get(dest).is_none() {
            moves.push(MovePath::step(origin, dest));
        }
    }

    moves
}

/// Probe a single jump from `from` in direction `(dx, dy)`: legal when the
/// landing two steps away is an empty in-bounds square and the cell jumped
/// over holds an opponent of `mover`. Returns (jumped square, landing).
fn probe_jump(
    board: &Board,
    from: Square,
    mover: Color,
    dx: i32,
    dy: i32,
) -> Option<(Square, Square)> {
    let landing = from.shift(2 * dx, 2 * dy);
    if !landing.in_bounds() || board.get(landing).is_some() {
        return None;
    }
    let over = from.midpoint(landing);
    match board.get(over) {
        Some(p) if p.color != mover => Some((over, landing)),
        _ => None,
    }
}

/// The legal capture paths from `origin`. A jump that can be extended by a
/// second jump must be: such a branch offers only its extended paths, while
/// a branch with no continuation still offers its single jump.
pub fn captures(board: &Board, origin: Square) -> Vec<MovePath> {
    let mut paths = Vec::new();
    let piece = match board.get(origin) {
        Some(p) => p,
        None => return paths,
    };

    for &(dx, dy) in directions(piece) {
        let (over, landing) = match probe_jump(board, origin, piece.color, dx, dy) {
            Some(jump) => jump,
            None => continue,
        };
        let first = MovePath::jump(origin, over, landing);
        let extended = continuations(board, piece, &first);
        if extended.is_empty() {
            paths.push(first);
        } else {
            paths.extend(extended);
        }
    }

    paths
}

/// Every two-jump extension of a single-jump path. The probe runs against
/// the unmodified board: pieces captured by the first jump stay on their
/// squares until the whole path is applied.
fn continuations(board: &Board, piece: Piece, first: &MovePath) -> Vec<MovePath> {
    let mut extended = Vec::new();
    let landing = first.destination();
    for &(dx, dy) in directions(piece) {
        if let Some((over, next)) = probe_jump(board, landing, piece.color, dx, dy) {
            extended.push(first.clone().then_jump(over, next));
        }
    }
    extended
}

/// Everything one piece may legally do, after capture precedence: when the
/// origin has any capture, its plain steps are not offered at all.
#[derive(Clone, Debug)]
pub enum OriginMoves {
    Captures(Vec<MovePath>),
    Simple(Vec<MovePath>),
}

impl OriginMoves {
    pub fn paths(&self) -> &[MovePath] {
        match self {
            OriginMoves::Captures(paths) | OriginMoves::Simple(paths) => paths,
        }
    }

    pub fn into_paths(self) -> Vec<MovePath> {
        match self {
            OriginMoves::Captures(paths) | OriginMoves::Simple(paths) => paths,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, OriginMoves::Captures(_))
    }
}

pub fn moves_from(board: &Board, origin: Square) -> OriginMoves {
    let capture_paths = captures(board, origin);
    if capture_paths.is_empty() {
        OriginMoves::Simple(simple_moves(board, origin))
    } else {
        OriginMoves::Captures(capture_paths)
    }
}

/// Whether any piece of `color` has a capture available. When true, the
/// mandatory-capture rule is in force for the whole side.
pub fn has_any_capture(board: &Board, color: Color) -> bool {
    for y in 0..8 {
        for x in 0..8 {
            let sq = Square::new(x, y);
            if board.get(sq).map(|p| p.color == color).unwrap_or(false)
                && !captures(board, sq).is_empty()
            {
                return true;
            }
        }
    }
    false
}

/// The squares from which `color` may legally move: when the side has any
/// capture anywhere, exactly the squares with a capture; otherwise the
/// squares with at least one plain step.
pub fn legal_origins(board: &Board, color: Color) -> Vec<Square> {
    let capture_only = has_any_capture(board, color);
    let mut origins = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            let sq = Square::new(x, y);
            if !board.get(sq).map(|p| p.color == color).unwrap_or(false) {
                continue;
            }
            let movable = if capture_only {
                !captures(board, sq).is_empty()
            } else {
                !simple_moves(board, sq).is_empty()
            };
            if movable {
                origins.push(sq);
            }
        }
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: i32, y: i32) -> Square {
        Square::new(x, y)
    }

    /// Helper: a board holding just the given pieces.
    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            board.set(square, Some(piece));
        }
        board
    }

    fn destinations(paths: &[MovePath]) -> Vec<Square> {
        let mut dests: Vec<Square> = paths.iter().map(|p| p.destination()).collect();
        dests.sort();
        dests
    }

    /// From the standard setup, the Dark man on b3 steps to a4 or c4.
    #[test]
    fn opening_man_has_two_forward_steps() {
        let board = Board::new();
        let paths = simple_moves(&board, sq(1, 2));
        assert_eq!(destinations(&paths), vec![sq(0, 3), sq(2, 3)]);
        assert!(paths.iter().all(|p| !p.is_capture()));
        assert!(captures(&board, sq(1, 2)).is_empty());
    }

    /// Men only advance: a Light man moves toward y = 0 and never back.
    #[test]
    fn men_cannot_step_backward() {
        let board = board_with(&[(sq(3, 3), Piece::man(Color::Light))]);
        let paths = simple_moves(&board, sq(3, 3));
        assert_eq!(destinations(&paths), vec![sq(2, 2), sq(4, 2)]);
    }

    #[test]
    fn kings_step_in_all_four_directions() {
        let board = board_with(&[(sq(3, 3), Piece::king(Color::Dark))]);
        let paths = simple_moves(&board, sq(3, 3));
        assert_eq!(
            destinations(&paths),
            vec![sq(2, 2), sq(2, 4), sq(4, 2), sq(4, 4)]
        );
    }

    /// Occupied destinations are not steps, and edge origins never generate
    /// off-board destinations.
    #[test]
    fn steps_respect_occupancy_and_edges() {
        let board = board_with(&[
            (sq(0, 0), Piece::man(Color::Dark)),
            (sq(1, 1), Piece::man(Color::Dark)),
        ]);
        // a1's only diagonal is blocked by its own man
        assert!(simple_moves(&board, sq(0, 0)).is_empty());
        assert_eq!(
            destinations(&simple_moves(&board, sq(1, 1))),
            vec![sq(0, 2), sq(2, 2)]
        );

        for paths in [simple_moves(&board, sq(1, 1)), captures(&board, sq(1, 1))] {
            assert!(paths.iter().all(|p| p.destination().in_bounds()));
        }
    }

    /// A lone Dark man on c3 facing a Light man on d4 must jump to e5,
    /// capturing d4; the plain steps disappear.
    #[test]
    fn single_jump_over_an_opponent() {
        let board = board_with(&[
            (sq(2, 2), Piece::man(Color::Dark)),
            (sq(3, 3), Piece::man(Color::Light)),
        ]);
        let result = moves_from(&board, sq(2, 2));
        assert!(result.is_capture());
        let paths = result.paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].destination(), sq(4, 4));
        assert_eq!(paths[0].captures(), &[sq(3, 3)]);
    }

    #[test]
    fn jumps_need_an_empty_landing_and_an_opponent_between() {
        let blocked = board_with(&[
            (sq(2, 2), Piece::man(Color::Dark)),
            (sq(3, 3), Piece::man(Color::Light)),
            (sq(4, 4), Piece::man(Color::Light)),
        ]);
        assert!(captures(&blocked, sq(2, 2)).is_empty());

        let own = board_with(&[
            (sq(2, 2), Piece::man(Color::Dark)),
            (sq(3, 3), Piece::man(Color::Dark)),
        ]);
        assert!(captures(&own, sq(2, 2)).is_empty());
    }

    /// A man never jumps backward, even when an opponent sits there; a king
    /// jumps along any diagonal.
    #[test]
    fn only_kings_capture_backward() {
        let pieces = [
            (sq(4, 4), Piece::man(Color::Dark)),
            (sq(3, 3), Piece::man(Color::Light)),
        ];
        let board = board_with(&pieces);
        assert!(captures(&board, sq(4, 4)).is_empty());

        let mut board = board_with(&pieces);
        board.set(sq(4, 4), Some(Piece::king(Color::Dark)));
        let paths = captures(&board, sq(4, 4));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].destination(), sq(2, 2));
        assert_eq!(paths[0].captures(), &[sq(3, 3)]);
    }

    /// After a first jump, any further jump must be taken; the single-jump
    /// path is no longer offered on that branch.
    #[test]
    fn jump_chains_are_forced() {
        let board = board_with(&[
            (sq(2, 2), Piece::man(Color::Dark)),
            (sq(3, 3), Piece::man(Color::Light)),
            (sq(5, 5), Piece::man(Color::Light)),
        ]);
        let paths = captures(&board, sq(2, 2));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].destination(), sq(6, 6));
        assert_eq!(paths[0].captures(), &[sq(3, 3), sq(5, 5)]);
    }

    /// The keep-jumping rule is per branch: one branch chaining never hides
    /// another branch's single jump.
    #[test]
    fn chaining_branch_does_not_hide_the_other_branch() {
        let board = board_with(&[
            (sq(2, 2), Piece::man(Color::Dark)),
            (sq(1, 3), Piece::man(Color::Light)), // left branch, chains via b6
            (sq(1, 5), Piece::man(Color::Light)),
            (sq(3, 3), Piece::man(Color::Light)), // right branch, no continuation
        ]);
        let paths = captures(&board, sq(2, 2));
        assert_eq!(destinations(&paths), vec![sq(2, 6), sq(4, 4)]);

        let chain = paths.iter().find(|p| p.destination() == sq(2, 6)).unwrap();
        assert_eq!(chain.captures(), &[sq(1, 3), sq(1, 5)]);
        let single = paths.iter().find(|p| p.destination() == sq(4, 4)).unwrap();
        assert_eq!(single.captures(), &[sq(3, 3)]);
    }

    /// Chains stop after the second jump even when a third is available.
    #[test]
    fn chains_stop_after_two_jumps() {
        let board = board_with(&[
            (sq(1, 1), Piece::man(Color::Dark)),
            (sq(2, 2), Piece::man(Color::Light)),
            (sq(4, 4), Piece::man(Color::Light)),
            (sq(6, 6), Piece::man(Color::Light)),
        ]);
        let paths = captures(&board, sq(1, 1));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].destination(), sq(5, 5));
        assert_eq!(paths[0].captures(), &[sq(2, 2), sq(4, 4)]);
    }

    /// A Dark king jumps backward through a chain a man could never start.
    /// The second probe must not wrap around over the already-jumped piece
    /// onto the still-occupied origin.
    #[test]
    fn king_chains_backward() {
        let board = board_with(&[
            (sq(2, 4), Piece::king(Color::Dark)),
            (sq(3, 3), Piece::man(Color::Light)),
            (sq(3, 1), Piece::man(Color::Light)),
        ]);
        let paths = captures(&board, sq(2, 4));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].destination(), sq(2, 0));
        assert_eq!(paths[0].captures(), &[sq(3, 3), sq(3, 1)]);
    }

    #[test]
    fn fresh_board_has_no_captures_and_four_movable_men() {
        let board = Board::new();
        assert!(!has_any_capture(&board, Color::Dark));
        assert!(!has_any_capture(&board, Color::Light));

        // Only the front row can move at the start
        assert_eq!(
            legal_origins(&board, Color::Dark),
            vec![sq(1, 2), sq(3, 2), sq(5, 2), sq(7, 2)]
        );
        assert_eq!(
            legal_origins(&board, Color::Light),
            vec![sq(0, 5), sq(2, 5), sq(4, 5), sq(6, 5)]
        );
    }

    /// When any piece can capture, pieces with only plain steps drop out of
    /// the legal origins.
    #[test]
    fn capture_anywhere_restricts_origins_to_capturers() {
        let board = board_with(&[
            (sq(2, 2), Piece::man(Color::Dark)), // has a capture
            (sq(3, 3), Piece::man(Color::Light)),
            (sq(6, 2), Piece::man(Color::Dark)), // only plain steps
        ]);
        assert!(has_any_capture(&board, Color::Dark));
        assert_eq!(legal_origins(&board, Color::Dark), vec![sq(2, 2)]);

        // The Light man can capture back the other way
        assert_eq!(legal_origins(&board, Color::Light), vec![sq(3, 3)]);
    }

    #[test]
    fn captures_take_precedence_over_steps() {
        let board = board_with(&[
            (sq(2, 2), Piece::man(Color::Dark)),
            (sq(3, 3), Piece::man(Color::Light)),
        ]);
        let result = moves_from(&board, sq(2, 2));
        assert!(result.is_capture());
        assert!(result.paths().iter().all(|p| p.is_capture()));

        let nothing = moves_from(&board, sq(5, 5));
        assert!(!nothing.is_capture());
        assert!(nothing.paths().is_empty());
    }
}
