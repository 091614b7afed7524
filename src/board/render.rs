//! Plain-text board drawing.
//!
//! ```text
//!  0  -  1     2
//!  |  A  |
//!  3  -  4     5
//!
//! Player A: 1 Player B: 0
//! ```
//!
//! Dot indices are centred in a three-character field. Drawn horizontal
//! edges show as `-`, drawn vertical edges as `|`, and completed boxes
//! show their owner's letter.

use std::fmt::{self, Write};

use super::edge::Edge;
use super::state::BoardState;
use crate::core::PlayerId;

impl BoardState {
    fn drawn(&self, a: usize, b: usize) -> bool {
        self.edge_status(Edge::new(a, b)).unwrap_or(false)
    }

    fn write_dot_row(&self, f: &mut impl Write, row: usize) -> fmt::Result {
        let columns = self.columns();
        let first = row * columns;

        for dot in first..first + columns - 1 {
            if self.drawn(dot, dot + 1) {
                write!(f, "{dot:^3} - ")?;
            } else {
                write!(f, "{dot:^3}   ")?;
            }
        }
        writeln!(f, "{:^3}", first + columns - 1)
    }

    fn write_box_row(&self, f: &mut impl Write, row: usize) -> fmt::Result {
        let columns = self.columns();

        for column in 0..columns {
            let upper = row * columns + column;
            let bar = if self.drawn(upper, upper + columns) { '|' } else { ' ' };
            write!(f, " {bar} ")?;

            if column + 1 < columns {
                let fill = self.owner_at(row, column).map_or(' ', PlayerId::letter);
                write!(f, " {fill} ")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows() > 0 && self.columns() > 0 {
            for row in 0..self.rows() - 1 {
                self.write_dot_row(f, row)?;
                self.write_box_row(f, row)?;
            }
            self.write_dot_row(f, self.rows() - 1)?;
        }

        write!(
            f,
            "\nPlayer A: {} Player B: {}",
            self.score(PlayerId::A),
            self.score(PlayerId::B)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = BoardState::new(2, 2);

        let expected = " 0     1 \n         \n 2     3 \n\nPlayer A: 0 Player B: 0";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_completed_box_shows_owner() {
        let mut board = BoardState::new(2, 3);
        for (a, b) in [(0, 1), (0, 3), (1, 4), (3, 4)] {
            board.apply_dots(a, b, PlayerId::A).unwrap();
        }

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], " 0  -  1     2 ");
        assert_eq!(lines[1], " |  A  |       ");
        assert_eq!(lines[2], " 3  -  4     5 ");
        assert_eq!(lines[4], "Player A: 1 Player B: 0");
    }

    #[test]
    fn test_wide_indices_are_centred() {
        let board = BoardState::new(4, 4);
        let rendered = board.to_string();

        assert!(rendered.contains("12    13    14    15 "));
    }
}
