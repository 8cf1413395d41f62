//! Tic-tac-toe on a 3×3 board.

use crate::adversarial::Game;
use crate::error::SearchError;
use std::fmt;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Tic-tac-toe position.
///
/// Scores are reported from the point of view of `max_player`: +1 when
/// it has three in a row, -1 when its opponent has, 0 otherwise. The
/// maximizing player defaults to the side to move when the position is
/// built, matching the strategies' convention that the root mover
/// maximizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    board: [[Option<Mark>; 3]; 3],
    to_move: Mark,
    max_player: Mark,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move and maximizing.
    pub fn new() -> Self {
        Self {
            board: [[None; 3]; 3],
            to_move: Mark::X,
            max_player: Mark::X,
        }
    }

    /// Builds a position from rows of `"X"`, `"O"` and `" "` cells.
    pub fn from_rows(rows: [[&str; 3]; 3], to_move: Mark) -> Result<Self, SearchError> {
        let mut board = [[None; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                board[r][c] = match cell.trim() {
                    "X" | "x" => Some(Mark::X),
                    "O" | "o" => Some(Mark::O),
                    "" => None,
                    other => {
                        return Err(SearchError::InvalidParameter(format!(
                            "unknown tic-tac-toe cell {other:?} at ({r}, {c})"
                        )))
                    }
                };
            }
        }
        Ok(Self {
            board,
            to_move,
            max_player: to_move,
        })
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn max_player(&self) -> Mark {
        self.max_player
    }

    /// Sets whose wins count as positive.
    pub fn set_max_player(&mut self, mark: Mark) {
        self.max_player = mark;
    }

    pub fn cell(&self, pos: Position) -> Option<Mark> {
        self.board.get(pos.row)?.get(pos.col).copied().flatten()
    }

    /// The player with three in a row, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.into_iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.board[row][col]);
            match (a, b, c) {
                (Some(x), Some(y), Some(z)) if x == y && y == z => Some(x),
                _ => None,
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.board.iter().flatten().all(Option::is_some)
    }
}

impl Game for TicTacToe {
    type Move = Position;

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn legal_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..3)
            .flat_map(|row| (0..3).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.board[pos.row][pos.col].is_none())
            .collect()
    }

    fn make_move(&mut self, pos: &Position) -> Result<(), SearchError> {
        if pos.row >= 3 || pos.col >= 3 {
            return Err(SearchError::IllegalMove(format!(
                "({}, {}) is off the board",
                pos.row, pos.col
            )));
        }
        if self.winner().is_some() {
            return Err(SearchError::IllegalMove("the game is already won".into()));
        }
        if let Some(mark) = self.board[pos.row][pos.col] {
            return Err(SearchError::IllegalMove(format!(
                "({}, {}) is taken by {}",
                pos.row,
                pos.col,
                mark.symbol()
            )));
        }
        self.board[pos.row][pos.col] = Some(self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn evaluate(&self) -> i32 {
        match self.winner() {
            Some(mark) if mark == self.max_player => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.board.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or(' ', Mark::symbol).to_string())
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
            if r < 2 {
                writeln!(f, "---------")?;
            }
        }
        Ok(())
    }
}
