use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Color;

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 6;

/// Tallest stack allowed once a move has been resolved.
pub const MAX_STACK_HEIGHT: usize = 5;

/// Pieces on the board when a game starts (one per cell).
pub const TOTAL_PIECES: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell's pieces, bottom (oldest) first and top last.
pub type Stack = Vec<Color>;

/// A board cell addressed as `(column, row)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// The 6x6 grid of piece stacks.
///
/// Stored row-major so the board dump reads top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Stack>>,
}

impl Board {
    /// Builds the starting layout: even rows read `A A B B A A`, odd rows
    /// read `B B A A B B`, one piece per cell.
    ///
    /// ```
    /// use focus_engine::board::{Board, Coord};
    /// use focus_engine::player::Color;
    ///
    /// let board = Board::new(&Color::new("R"), &Color::new("W"));
    /// assert_eq!(board.stack(Coord::new(0, 0)), [Color::new("R")]);
    /// assert_eq!(board.stack(Coord::new(2, 0)), [Color::new("W")]);
    /// assert_eq!(board.stack(Coord::new(2, 1)), [Color::new("R")]);
    /// ```
    pub fn new(a: &Color, b: &Color) -> Self {
        let even = [a, a, b, b, a, a];
        let odd = [b, b, a, a, b, b];
        let cells = (0..BOARD_SIZE)
            .map(|row| {
                let pattern = if row % 2 == 0 { &even } else { &odd };
                pattern
                    .iter()
                    .map(|c| vec![(*c).clone()])
                    .collect::<Vec<Stack>>()
            })
            .collect();
        Self { cells }
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.col < BOARD_SIZE && at.row < BOARD_SIZE
    }

    /// Pieces at `at`, bottom to top. Off-board coordinates read as empty.
    pub fn stack(&self, at: Coord) -> &[Color] {
        self.cells
            .get(at.row)
            .and_then(|row| row.get(at.col))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn height(&self, at: Coord) -> usize {
        self.stack(at).len()
    }

    pub fn top(&self, at: Coord) -> Option<&Color> {
        self.stack(at).last()
    }

    /// Number of pieces currently on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    fn cell_mut(&mut self, at: Coord) -> &mut Stack {
        &mut self.cells[at.row][at.col]
    }

    /// Lifts the top `count` pieces off `from` and drops them, order kept,
    /// onto `to`. Both cells must be on the board and `from` must hold at
    /// least `count` pieces.
    pub(crate) fn transfer(&mut self, from: Coord, to: Coord, count: usize) {
        let source = self.cell_mut(from);
        let split = source.len() - count;
        let moving = source.split_off(split);
        self.cell_mut(to).extend(moving);
    }

    pub(crate) fn push(&mut self, at: Coord, piece: Color) {
        self.cell_mut(at).push(piece);
    }

    /// Removes pieces from the bottom of the stack at `at` until it is no
    /// taller than [`MAX_STACK_HEIGHT`], returning them oldest first.
    pub(crate) fn trim_overflow(&mut self, at: Coord) -> Vec<Color> {
        let stack = self.cell_mut(at);
        let excess = stack.len().saturating_sub(MAX_STACK_HEIGHT);
        stack.drain(..excess).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let cells: Vec<String> = row
                .iter()
                .map(|stack| {
                    let pieces: Vec<&str> = stack.iter().map(Color::as_str).collect();
                    format!("[{}]", pieces.join(","))
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(&Color::new("R"), &Color::new("W"))
    }

    #[test]
    fn every_cell_starts_with_one_piece() {
        let b = board();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(b.height(Coord::new(col, row)), 1);
            }
        }
        assert_eq!(b.piece_count(), TOTAL_PIECES);
    }

    #[test]
    fn adjacent_rows_use_swapped_patterns() {
        let b = board();
        for col in 0..BOARD_SIZE {
            for row in 0..BOARD_SIZE - 1 {
                assert_ne!(
                    b.top(Coord::new(col, row)),
                    b.top(Coord::new(col, row + 1)),
                    "column {} rows {} and {}",
                    col,
                    row,
                    row + 1
                );
            }
        }
    }

    #[test]
    fn off_board_reads_as_empty() {
        let b = board();
        assert!(b.stack(Coord::new(6, 0)).is_empty());
        assert!(b.stack(Coord::new(0, 9)).is_empty());
        assert!(!b.contains(Coord::new(6, 0)));
        assert!(b.contains(Coord::new(5, 5)));
    }

    #[test]
    fn transfer_keeps_order_of_lifted_pieces() {
        let mut b = board();
        let r = Color::new("R");
        let w = Color::new("W");
        // (0,0)=R onto (0,1)=W, then the pair onto (1,1)=W
        b.transfer(Coord::new(0, 0), Coord::new(0, 1), 1);
        assert_eq!(b.stack(Coord::new(0, 1)), [w.clone(), r.clone()]);
        b.transfer(Coord::new(0, 1), Coord::new(1, 1), 2);
        assert_eq!(b.stack(Coord::new(1, 1)), [w.clone(), w, r]);
        assert!(b.stack(Coord::new(0, 1)).is_empty());
    }

    #[test]
    fn trim_removes_from_bottom_oldest_first() {
        let mut b = board();
        let at = Coord::new(0, 0);
        for token in ["W", "W", "R", "W", "R"] {
            b.push(at, Color::new(token));
        }
        // R W W R W R
        let removed = b.trim_overflow(at);
        assert_eq!(removed, [Color::new("R")]);
        assert_eq!(b.height(at), MAX_STACK_HEIGHT);
        assert_eq!(b.stack(at)[0], Color::new("W"));
        assert!(b.trim_overflow(at).is_empty());
    }

    #[test]
    fn dump_has_one_line_per_row() {
        let dump = board().to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE);
        assert_eq!(lines[0], "[R] [R] [W] [W] [R] [R]");
        assert_eq!(lines[1], "[W] [W] [R] [R] [W] [W]");
    }
}
