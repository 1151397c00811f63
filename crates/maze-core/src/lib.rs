//! Core maze engine: validated binary grids with a start and a finish,
//! two pathfinding engines, and seedable maze generation.
//!
//! A [`Maze`] owns its [`Grid`] and keeps the start/finish invariants
//! (in bounds, open cells) through every constructor and mutator. Solving
//! never mutates the maze: each call works on private per-call state and
//! reports "no path" as `None` rather than an error.
//!
//! ```
//! use maze_core::{Coord, Grid, Maze};
//!
//! let grid = Grid::from_bits(&[vec![0, 0], vec![1, 0]])?;
//! let maze = Maze::new(grid, Coord::new(0, 0), Coord::new(1, 1))?;
//!
//! let path = maze.solve_bfs().expect("a route exists");
//! assert_eq!(path, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]);
//! # Ok::<(), maze_core::MazeError>(())
//! ```

mod generator;
mod grid;
mod maze;
pub mod solver;

pub use generator::{Generator, GeneratorConfig};
pub use grid::{Cell, Coord, Direction, Grid};
pub use maze::{Endpoint, Maze, MazeError};
pub use solver::{Path, Solver, Strategy};
