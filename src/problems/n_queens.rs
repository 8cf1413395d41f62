//! N-Queens as a local-search problem.

use crate::error::SearchError;
use crate::local::{SearchState, StateGenerator};
use rand::Rng;
use std::fmt;

/// One queen per column; `rows()[col]` is that queen's row.
///
/// The value is the number of attacking pairs (same row or same
/// diagonal). A board with value 0 is a solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NQueens {
    rows: Vec<usize>,
    conflicts: i64,
}

impl NQueens {
    /// Builds a board, rejecting empty boards and rows outside `0..n`.
    pub fn new(rows: Vec<usize>) -> Result<Self, SearchError> {
        let n = rows.len();
        if n == 0 {
            return Err(SearchError::InvalidParameter(
                "an N-Queens board needs at least one column".into(),
            ));
        }
        if let Some((col, &row)) = rows.iter().enumerate().find(|&(_, &row)| row >= n) {
            return Err(SearchError::InvalidParameter(format!(
                "queen in column {col} is on row {row}, board has {n} rows"
            )));
        }
        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: Vec<usize>) -> Self {
        let conflicts = count_conflicts(&rows);
        Self { rows, conflicts }
    }

    pub fn n(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }
}

fn count_conflicts(rows: &[usize]) -> i64 {
    let mut pairs = 0;
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if rows[i] == rows[j] || rows[i].abs_diff(rows[j]) == j - i {
                pairs += 1;
            }
        }
    }
    pairs
}

impl SearchState for NQueens {
    fn value(&self) -> i64 {
        self.conflicts
    }

    /// Moves one queen to another row of its column, column by column.
    fn neighbors(&self) -> Vec<Self> {
        let n = self.n();
        let mut neighbors = Vec::with_capacity(n * n.saturating_sub(1));
        for col in 0..n {
            for row in 0..n {
                if row != self.rows[col] {
                    let mut rows = self.rows.clone();
                    rows[col] = row;
                    neighbors.push(Self::from_rows(rows));
                }
            }
        }
        neighbors
    }
}

impl fmt::Display for NQueens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n();
        for row in 0..n {
            let line: Vec<&str> = (0..n)
                .map(|col| if self.rows[col] == row { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        write!(f, "conflicts: {}", self.conflicts)
    }
}

/// Random N-Queens boards of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueensProblem {
    n: usize,
}

impl NQueensProblem {
    pub fn new(n: usize) -> Result<Self, SearchError> {
        if n == 0 {
            return Err(SearchError::InvalidParameter(
                "N-Queens size must be positive".into(),
            ));
        }
        Ok(Self { n })
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

impl StateGenerator for NQueensProblem {
    type State = NQueens;

    /// Each queen is placed on a uniformly random row.
    fn random_state<R: Rng>(&self, rng: &mut R) -> NQueens {
        let rows = (0..self.n).map(|_| rng.random_range(0..self.n)).collect();
        NQueens::from_rows(rows)
    }
}
