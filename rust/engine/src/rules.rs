use crate::board::{Coord, BOARD_SIZE};
use crate::errors::MoveError;

/// Checks the shape of a stack move from `start` to `end` carrying `count`
/// pieces, without looking at the board contents.
///
/// Both cells must be on the board and distinct. Each axis may move at most
/// `count` cells, and a move that travels exactly `count` cells along both
/// axes (a full diagonal) is refused.
///
/// # Errors
///
/// Returns [`MoveError::InvalidLocation`] for any geometry that breaks the
/// rules above.
///
/// # Examples
///
/// ```
/// use focus_engine::board::Coord;
/// use focus_engine::errors::MoveError;
/// use focus_engine::rules::validate_geometry;
///
/// // one piece, one cell down
/// assert!(validate_geometry(Coord::new(0, 0), Coord::new(0, 1), 1).is_ok());
///
/// // two cells away with only one piece
/// assert_eq!(
///     validate_geometry(Coord::new(0, 0), Coord::new(0, 2), 1),
///     Err(MoveError::InvalidLocation)
/// );
///
/// // full diagonal
/// assert_eq!(
///     validate_geometry(Coord::new(1, 1), Coord::new(2, 2), 1),
///     Err(MoveError::InvalidLocation)
/// );
/// ```
pub fn validate_geometry(start: Coord, end: Coord, count: usize) -> Result<(), MoveError> {
    if !on_board(start) || !on_board(end) {
        return Err(MoveError::InvalidLocation);
    }
    if start == end {
        return Err(MoveError::InvalidLocation);
    }

    let dx = start.col.abs_diff(end.col);
    let dy = start.row.abs_diff(end.row);
    if dx > count || dy > count {
        return Err(MoveError::InvalidLocation);
    }
    if dx == count && dy == count {
        return Err(MoveError::InvalidLocation);
    }
    Ok(())
}

fn on_board(at: Coord) -> bool {
    at.col < BOARD_SIZE && at.row < BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(start: (usize, usize), end: (usize, usize), count: usize) -> Result<(), MoveError> {
        validate_geometry(start.into(), end.into(), count)
    }

    #[test]
    fn straight_moves_within_reach_pass() {
        assert_eq!(check((0, 0), (0, 1), 1), Ok(()));
        assert_eq!(check((0, 0), (3, 0), 3), Ok(()));
        assert_eq!(check((5, 5), (5, 1), 4), Ok(()));
    }

    #[test]
    fn shorter_than_count_passes() {
        // a two-piece stack may slide a single cell
        assert_eq!(check((1, 0), (2, 0), 2), Ok(()));
    }

    #[test]
    fn same_cell_is_rejected() {
        assert_eq!(check((2, 2), (2, 2), 1), Err(MoveError::InvalidLocation));
    }

    #[test]
    fn beyond_reach_is_rejected() {
        assert_eq!(check((0, 0), (2, 0), 1), Err(MoveError::InvalidLocation));
        assert_eq!(check((0, 5), (0, 1), 3), Err(MoveError::InvalidLocation));
    }

    #[test]
    fn full_diagonals_are_rejected_in_every_direction() {
        for end in [(3, 3), (1, 1), (3, 1), (1, 3)] {
            assert_eq!(check((2, 2), end, 1), Err(MoveError::InvalidLocation));
        }
        assert_eq!(check((0, 0), (2, 2), 2), Err(MoveError::InvalidLocation));
    }

    #[test]
    fn partial_diagonal_within_reach_passes() {
        assert_eq!(check((0, 0), (1, 1), 2), Ok(()));
    }

    #[test]
    fn zero_count_never_moves() {
        assert_eq!(check((0, 0), (0, 1), 0), Err(MoveError::InvalidLocation));
    }

    #[test]
    fn huge_counts_pass_geometry() {
        // the stack height check rejects these later
        assert_eq!(check((0, 0), (0, 1), usize::MAX), Ok(()));
        assert_eq!(check((0, 0), (0, 1), 1 << 63), Ok(()));
        assert_eq!(check((0, 0), (5, 5), usize::MAX), Ok(()));
    }

    #[test]
    fn off_board_cells_are_rejected() {
        assert_eq!(check((5, 0), (6, 0), 1), Err(MoveError::InvalidLocation));
        assert_eq!(check((0, 6), (0, 5), 1), Err(MoveError::InvalidLocation));
    }
}
