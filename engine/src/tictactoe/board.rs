use std::fmt;
use std::str::FromStr;

use super::types::{Mark, Position};
use crate::error::{Error, Result};

/// Square grid of marks. Placing returns a new board; cells are never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(Error::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Mark> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn place(&self, row: usize, col: usize, mark: Mark) -> Result<Board> {
        if mark == Mark::Empty {
            return Err(Error::EmptyMark);
        }
        let index = self.index(row, col)?;
        if self.cells[index] != Mark::Empty {
            return Err(Error::IllegalMove { row, col });
        }

        let mut next = self.clone();
        next.cells[index] = mark;
        Ok(next)
    }

    /// Open cells in row-major order.
    pub fn available_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                positions.push(Position::new(index / self.size, index % self.size));
            }
        }
        positions
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    /// Middle cell, only defined for odd sizes.
    pub fn center(&self) -> Option<Position> {
        if self.size % 2 == 1 {
            Some(Position::new(self.size / 2, self.size / 2))
        } else {
            None
        }
    }

    pub(crate) fn mark_at(&self, position: Position) -> Mark {
        self.cells[position.row * self.size + position.col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = cells.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses `X.O/.X./..O` style layouts. Newlines also separate rows.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidBoard {
            reason,
            context: s.to_string(),
        };

        let rows: Vec<Vec<char>> = s
            .split(['/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<char>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(invalid("no rows".to_string()));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != size {
                return Err(invalid(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    size
                )));
            }
            for &symbol in symbols {
                let mark = Mark::from_symbol(symbol)
                    .ok_or_else(|| invalid(format!("unknown cell '{}' in row {}", symbol, row)))?;
                cells.push(mark);
            }
        }

        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3).unwrap();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.available_positions().len(), 9);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(Board::new(0), Err(Error::InvalidBoardSize { size: 0 }));
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            board.cell(3, 0),
            Err(Error::OutOfRange { row: 3, col: 0, size: 3 })
        );
        assert_eq!(
            board.place(0, 5, Mark::X),
            Err(Error::OutOfRange { row: 0, col: 5, size: 3 })
        );
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new(3).unwrap();
        let next = board.place(1, 2, Mark::O).unwrap();

        assert_eq!(next.cell(1, 2), Ok(Mark::O));
        assert_eq!(board.cell(1, 2), Ok(Mark::Empty));
        assert!(board.is_empty());
    }

    #[test]
    fn test_place_on_occupied_cell_fails_without_mutation() {
        let board = Board::new(3).unwrap().place(0, 0, Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(0, 0, Mark::O),
            Err(Error::IllegalMove { row: 0, col: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_empty_mark_fails() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.place(0, 0, Mark::Empty), Err(Error::EmptyMark));
    }

    #[test]
    fn test_available_positions_row_major_and_counted() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let positions = board.available_positions();

        assert_eq!(positions.len(), 9 - board.occupied_count());
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        for position in positions {
            assert_eq!(board.cell(position.row, position.col), Ok(Mark::Empty));
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3).unwrap();
        for col in 0..3 {
            for row in 0..3 {
                board = board.place(row, col, Mark::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.available_positions().is_empty());
    }

    #[test]
    fn test_center_only_for_odd_sizes() {
        assert_eq!(Board::new(3).unwrap().center(), Some(Position::new(1, 1)));
        assert_eq!(Board::new(1).unwrap().center(), Some(Position::new(0, 0)));
        assert_eq!(Board::new(4).unwrap().center(), None);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "x0_\n.X.\n--O".parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cell(0, 1), Ok(Mark::O));
        assert_eq!(board.to_string(), "X O _\n_ X _\n_ _ O");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let result: Result<Board> = "X../..".parse();
        assert!(matches!(result, Err(Error::InvalidBoard { .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let result: Result<Board> = "X?./.../...".parse();
        assert!(matches!(result, Err(Error::InvalidBoard { .. })));
    }

    #[test]
    fn test_count_by_mark() {
        let board: Board = "XO./.X./...".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.count(Mark::Empty), 6);
    }
}
