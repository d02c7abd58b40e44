//! Win and tie detection.
//!
//! A win is a run of at least four same-colored collapsed cells through
//! the newly collapsed cell, along any of the four line directions.
//! Comparison is by assigned color only; placement tags play no part.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{CellPos, Direction, Player, WIN_SEQ_LENGTH};

/// Longest possible run through one cell (a full row).
type Run = SmallVec<[CellPos; 7]>;

/// Check whether `origin` sits in a winning run of `color`.
///
/// Directions are tried in order and the check stops at the first one
/// that reaches four; every cell of that run gets its win flag set.
/// Cells collected into `winning` are reported back to the caller.
pub(crate) fn check_win(
    board: &mut Board,
    color: Player,
    origin: CellPos,
    winning: &mut Vec<CellPos>,
) -> bool {
    for direction in Direction::ALL {
        let run = collect_run(board, color, origin, direction);
        if run.len() >= WIN_SEQ_LENGTH {
            for &pos in &run {
                board.mark_win(pos);
            }
            winning.extend(run);
            return true;
        }
    }
    false
}

/// The contiguous run of `color` through `origin` along `direction`:
/// walk backward, then forward, collecting while the color matches.
fn collect_run(board: &Board, color: Player, origin: CellPos, direction: Direction) -> Run {
    let mut run = Run::new();
    run.push(origin);

    for sign in [-1, 1] {
        let mut pos = origin;
        while let Some(next) = pos.step(direction, sign) {
            if board.color(next) != Some(color) {
                break;
            }
            run.push(next);
            pos = next;
        }
    }

    run
}

/// True iff every cell on the board carries a color.
pub(crate) fn check_tie(board: &Board) -> bool {
    board.is_board_full()
}
