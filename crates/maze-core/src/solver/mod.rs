//! Maze solving engines.
//!
//! Two engines behind one stateless orchestrator: depth-first backtracking
//! returns *some* route, breadth-first search returns a shortest route in
//! step count. Each call allocates its own visited state and never touches
//! the maze's owned grid, so repeated solves of an unmodified maze return
//! identical paths.

mod backtrack;
mod bfs;

use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Grid};
use crate::maze::Maze;

/// An ordered coordinate sequence from start to finish, both inclusive.
pub type Path = Vec<Coord>;

/// Which engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Backtracking,
    BreadthFirst,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Backtracking => write!(f, "backtracking"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Run the chosen engine. `None` means no path exists.
    pub fn solve(&self, maze: &Maze, strategy: Strategy) -> Option<Path> {
        match strategy {
            Strategy::Backtracking => self.solve_backtracking(maze),
            Strategy::BreadthFirst => self.solve_bfs(maze),
        }
    }

    /// Depth-first route, order-of-discovery dependent, not necessarily
    /// shortest.
    pub fn solve_backtracking(&self, maze: &Maze) -> Option<Path> {
        backtrack::search(maze)
    }

    /// Shortest route in step count.
    pub fn solve_bfs(&self, maze: &Maze) -> Option<Path> {
        bfs::search(maze)
    }
}

/// Fresh visited matrix shaped exactly like the grid, jagged rows included.
pub(crate) fn visited_matrix(grid: &Grid) -> Vec<Vec<bool>> {
    (0..grid.rows()).map(|r| vec![false; grid.row_len(r)]).collect()
}
