//! The maze entity: a grid bundled with validated start and finish cells.

use crate::grid::{Cell, Coord, Grid};
use crate::solver::{Path, Solver};

/// Which endpoint of the maze a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Finish => write!(f, "finish"),
        }
    }
}

/// Validation failure raised at construction or mutation time.
///
/// Solvers never produce these: an unsolvable maze is a normal `None`
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A raw grid entry was neither 0 nor 1.
    InvalidCell { row: usize, col: usize, value: u8 },
    /// An unrecognized character in a textual grid.
    Parse { line: usize, ch: char },
    /// An endpoint outside the bounds of the grid.
    OutOfBounds { endpoint: Endpoint, coord: Coord },
    /// An endpoint placed on a blocked cell.
    BlockedEndpoint { endpoint: Endpoint, coord: Coord },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::InvalidCell { row, col, value } => {
                write!(f, "grid entry at ({}, {}) must be 0 or 1, got {}", row, col, value)
            }
            MazeError::Parse { line, ch } => {
                write!(f, "unrecognized grid character {:?} on line {}", ch, line)
            }
            MazeError::OutOfBounds { endpoint, coord } => {
                write!(f, "{} {} lies outside the grid", endpoint, coord)
            }
            MazeError::BlockedEndpoint { endpoint, coord } => {
                write!(f, "{} {} is a blocked cell", endpoint, coord)
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// A rectangular-or-jagged binary maze with a designated start and finish.
///
/// Invariant: `start` and `finish` are always in bounds of the current grid
/// and reference open cells. Every constructor and mutator re-runs full
/// validation; no method hands out mutable access to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    finish: Coord,
}

impl Maze {
    pub fn new(grid: Grid, start: Coord, finish: Coord) -> Result<Self, MazeError> {
        validate_endpoint(&grid, start, Endpoint::Start)?;
        validate_endpoint(&grid, finish, Endpoint::Finish)?;
        Ok(Self { grid, start, finish })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Replace the grid. The stored start and finish are re-validated
    /// against the replacement first; on failure the maze is unchanged, so
    /// a stale, now-invalid endpoint can never persist.
    pub fn set_grid(&mut self, grid: Grid) -> Result<(), MazeError> {
        validate_endpoint(&grid, self.start, Endpoint::Start)?;
        validate_endpoint(&grid, self.finish, Endpoint::Finish)?;
        self.grid = grid;
        Ok(())
    }

    pub fn set_start(&mut self, start: Coord) -> Result<(), MazeError> {
        validate_endpoint(&self.grid, start, Endpoint::Start)?;
        self.start = start;
        Ok(())
    }

    pub fn set_finish(&mut self, finish: Coord) -> Result<(), MazeError> {
        validate_endpoint(&self.grid, finish, Endpoint::Finish)?;
        self.finish = finish;
        Ok(())
    }

    /// Depth-first route from start to finish; `None` when unsolvable.
    /// Not necessarily the shortest route.
    pub fn solve_backtracking(&self) -> Option<Path> {
        Solver::new().solve_backtracking(self)
    }

    /// Shortest route (in step count) from start to finish; `None` when
    /// unsolvable.
    pub fn solve_bfs(&self) -> Option<Path> {
        Solver::new().solve_bfs(self)
    }
}

fn validate_endpoint(grid: &Grid, coord: Coord, endpoint: Endpoint) -> Result<(), MazeError> {
    match grid.get(coord) {
        None => Err(MazeError::OutOfBounds { endpoint, coord }),
        Some(Cell::Blocked) => Err(MazeError::BlockedEndpoint { endpoint, coord }),
        Some(Cell::Open) => Ok(()),
    }
}
