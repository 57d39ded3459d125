//! Three-in-a-row detection shared by sub-boards and the meta-board.

use crate::types::{Claim, Mark, Square};
use tracing::instrument;

/// Winning triples in evaluation order: rows, columns, diagonals.
#[rustfmt::skip]
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Finds a completed line in any 9-slot grid.
///
/// Returns the value held by the first triple (in [`LINES`] order) whose
/// three slots are filled and equal. A legal game never has two winners
/// on one grid, but the scan order is fixed so the answer is reproducible
/// for any input.
pub fn evaluate<T, E, F>(line: &[T; 9], equal: E, is_filled: F) -> Option<T>
where
    T: Copy,
    E: Fn(&T, &T) -> bool,
    F: Fn(&T) -> bool,
{
    LINES.iter().find_map(|&[a, b, c]| {
        let (x, y, z) = (&line[a], &line[b], &line[c]);
        (is_filled(x) && is_filled(y) && is_filled(z) && equal(x, y) && equal(x, z)).then_some(*x)
    })
}

/// Checks if a sub-board has a winner.
///
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(squares: &[Square; 9]) -> Option<Mark> {
    evaluate(squares, |a, b| a == b, |s| !s.is_empty()).and_then(Square::mark)
}

/// Checks if the meta-board has a winner.
///
/// Only sub-boards claimed by a player count toward a line; drawn and
/// open sub-boards never do.
#[instrument(level = "trace")]
pub fn meta_winner(claims: &[Claim; 9]) -> Option<Mark> {
    let owners = claims.map(|claim| match claim {
        Claim::ClaimedBy(mark) => Some(mark),
        Claim::Unclaimed | Claim::Drawn => None,
    });
    evaluate(&owners, |a, b| a == b, Option::is_some).flatten()
}
