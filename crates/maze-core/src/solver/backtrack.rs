//! Depth-first engine with monotonic visited marking.
//!
//! Visited marks are never cleared: a cell claimed by one branch stays
//! claimed when the search unwinds, so this is single-pass reachability
//! DFS with backtracking through the call stack, not chronological
//! backtracking that frees cells for other branches. Allowing revisits
//! would change which path is discovered.

use crate::grid::{Cell, Coord, Direction};
use crate::maze::Maze;

use super::{visited_matrix, Path};

pub(super) fn search(maze: &Maze) -> Option<Path> {
    let mut visited = visited_matrix(maze.grid());
    let mut path = Path::new();
    if explore(maze, maze.start(), &mut visited, &mut path) {
        // Assembled back-to-front as the calls unwind.
        path.reverse();
        Some(path)
    } else {
        None
    }
}

/// Try to reach the finish from `current`. On success the coordinates of
/// the route are pushed finish-first while unwinding.
fn explore(maze: &Maze, current: Coord, visited: &mut [Vec<bool>], path: &mut Path) -> bool {
    match maze.grid().get(current) {
        None | Some(Cell::Blocked) => return false,
        Some(Cell::Open) => {}
    }
    if visited[current.row][current.col] {
        return false;
    }
    visited[current.row][current.col] = true;

    if current == maze.finish() {
        path.push(current);
        return true;
    }

    for dir in Direction::PRIORITY {
        if let Some(next) = current.step(dir) {
            if explore(maze, next, visited, path) {
                path.push(current);
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn maze(bits: &[Vec<u8>], start: (usize, usize), finish: (usize, usize)) -> Maze {
        let grid = Grid::from_bits(bits).unwrap();
        Maze::new(
            grid,
            Coord::new(start.0, start.1),
            Coord::new(finish.0, finish.1),
        )
        .unwrap()
    }

    #[test]
    fn finds_the_discovery_order_path() {
        let m = maze(&[vec![0, 0], vec![1, 0]], (0, 0), (1, 1));
        let path = search(&m).unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn reports_unsolvable_as_none() {
        let m = maze(&[vec![0, 1], vec![1, 0]], (0, 0), (1, 1));
        assert_eq!(search(&m), None);
    }

    #[test]
    fn start_equal_to_finish_is_a_single_cell_path() {
        let m = maze(&[vec![0]], (0, 0), (0, 0));
        assert_eq!(search(&m), Some(vec![Coord::new(0, 0)]));
    }

    #[test]
    fn terminates_on_fully_open_grids() {
        // Every cell reachable from every other; without permanent visited
        // marks this would recurse forever.
        let m = maze(
            &[
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ],
            (0, 0),
            (3, 3),
        );
        let path = search(&m).unwrap();
        assert_eq!(*path.first().unwrap(), Coord::new(0, 0));
        assert_eq!(*path.last().unwrap(), Coord::new(3, 3));
    }

    #[test]
    fn up_then_left_are_preferred() {
        // From the middle of an open column, the engine goes up first even
        // though the finish lies below.
        let m = maze(&[vec![0], vec![0], vec![0]], (1, 0), (2, 0));
        let path = search(&m).unwrap();
        // Up to (0,0) dead-ends against the wall, the branch fails without
        // unmarking, then down reaches the finish directly.
        assert_eq!(path, vec![Coord::new(1, 0), Coord::new(2, 0)]);
    }

    #[test]
    fn repeated_searches_return_identical_paths() {
        let m = maze(
            &[vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]],
            (0, 0),
            (2, 2),
        );
        assert_eq!(search(&m), search(&m));
    }
}
