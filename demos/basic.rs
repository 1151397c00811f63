//! Basic example of using the maze engine

use maze_core::{Coord, Generator, Grid, Maze, Solver, Strategy};

fn main() {
    // Generate a maze
    println!("Generating a 15x15 maze...\n");
    let mut generator = Generator::with_seed(7);
    let maze = generator.generate();
    println!("{}", maze.grid());

    // Solve it both ways
    let solver = Solver::new();
    match solver.solve(&maze, Strategy::BreadthFirst) {
        Some(path) => println!("Shortest route: {} steps", path.len() - 1),
        None => println!("No route found (this shouldn't happen for a generated maze!)"),
    }
    if let Some(path) = solver.solve(&maze, Strategy::Backtracking) {
        println!("Backtracking route: {} steps", path.len() - 1);
    }

    // Parse a maze from a string
    println!("\n--- Parsing a maze from string ---\n");
    let text = "000\n110\n000";
    match Grid::from_string(text) {
        Ok(grid) => {
            let maze = match Maze::new(grid, Coord::new(0, 0), Coord::new(2, 0)) {
                Ok(maze) => maze,
                Err(err) => {
                    println!("Invalid maze: {}", err);
                    return;
                }
            };
            println!("Parsed maze:");
            println!("{}", maze.grid());
            match maze.solve_bfs() {
                Some(path) => {
                    println!("Route:");
                    for coord in path {
                        println!("  {}", coord);
                    }
                }
                None => println!("Unsolvable."),
            }
        }
        Err(err) => println!("Parse failed: {}", err),
    }
}
