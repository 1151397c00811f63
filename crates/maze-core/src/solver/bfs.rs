//! Breadth-first engine over a queue of partial paths.
//!
//! The queue holds whole paths rather than bare coordinates; the frontier
//! is each path's last element. Because expansion goes level by level and
//! a cell is enqueued at most once, the first dequeued path ending at the
//! finish has the minimum step count.

use std::collections::VecDeque;

use crate::grid::{Cell, Direction};
use crate::maze::Maze;

use super::{visited_matrix, Path};

pub(super) fn search(maze: &Maze) -> Option<Path> {
    let grid = maze.grid();
    let start = maze.start();

    let mut visited = visited_matrix(grid);
    visited[start.row][start.col] = true;

    let mut queue: VecDeque<Path> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let current = *path.last().expect("queued paths are never empty");

        // The finish check happens at dequeue time, so a maze whose start
        // equals its finish yields the single-element path.
        if current == maze.finish() {
            return Some(path);
        }

        for dir in Direction::PRIORITY {
            if let Some(next) = current.step(dir) {
                if grid.get(next) == Some(Cell::Open) && !visited[next.row][next.col] {
                    visited[next.row][next.col] = true;
                    let mut extended = path.clone();
                    extended.push(next);
                    queue.push_back(extended);
                }
            }
        }
    }

    // Frontier exhausted before the finish was dequeued: no connecting
    // path exists.
    None
}
