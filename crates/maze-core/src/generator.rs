//! Random maze generation.
//!
//! Carves a perfect maze (every open cell reachable, no loops) out of a
//! fully blocked grid with a randomized recursive backtracker, walking the
//! lattice of even-indexed cells in two-cell steps and opening the wall
//! between. Generated mazes always pass [`Maze`] validation and are always
//! solvable by both engines.

use crate::grid::{Cell, Coord, Direction, Grid};
use crate::maze::Maze;

/// Configuration for maze generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Grid height. Rounded up to an odd count so passages and walls
    /// alternate cleanly.
    pub rows: usize,
    /// Grid width, rounded up the same way.
    pub cols: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { rows: 15, cols: 15 }
    }
}

impl GeneratorConfig {
    pub fn small() -> Self {
        Self { rows: 9, cols: 9 }
    }

    pub fn large() -> Self {
        Self { rows: 31, cols: 31 }
    }
}

/// Maze generator.
pub struct Generator {
    config: GeneratorConfig,
    rng: SeedRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with default configuration and entropy seeding.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SeedRng::new(),
        }
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SeedRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SeedRng::with_seed(seed),
        }
    }

    pub fn seeded_with_config(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SeedRng::with_seed(seed),
        }
    }

    /// Generate a maze with the current configuration. Start is the top-left
    /// cell, finish the bottom-right lattice cell; both are always carved.
    pub fn generate(&mut self) -> Maze {
        let rows = (self.config.rows.max(3)) | 1;
        let cols = (self.config.cols.max(3)) | 1;

        let mut cells = vec![vec![Cell::Blocked; cols]; rows];
        cells[0][0] = Cell::Open;

        // Iterative carve: the stack top is the cell being extended.
        let mut stack = vec![Coord::new(0, 0)];
        while let Some(current) = stack.last().copied() {
            let mut candidates: Vec<(Coord, Coord)> = Vec::with_capacity(4);
            for dir in Direction::PRIORITY {
                if let Some((wall, next)) = two_step(current, dir, rows, cols) {
                    if cells[next.row][next.col] == Cell::Blocked {
                        candidates.push((wall, next));
                    }
                }
            }

            if candidates.is_empty() {
                stack.pop();
            } else {
                let (wall, next) = candidates[self.rng.next_usize(candidates.len())];
                cells[wall.row][wall.col] = Cell::Open;
                cells[next.row][next.col] = Cell::Open;
                stack.push(next);
            }
        }

        let start = Coord::new(0, 0);
        let finish = Coord::new(rows - 1, cols - 1);
        Maze::new(Grid::from_cells(cells), start, finish)
            .expect("carving visits every lattice cell, both corners are open")
    }
}

/// Wall cell one step and lattice cell two steps from `from`, when both
/// stay inside the rows × cols rectangle.
fn two_step(from: Coord, dir: Direction, rows: usize, cols: usize) -> Option<(Coord, Coord)> {
    let wall = from.step(dir)?;
    let next = wall.step(dir)?;
    if next.row < rows && next.col < cols {
        Some((wall, next))
    } else {
        None
    }
}

/// Simple PRNG, PCG-like, so generation stays reproducible per seed and
/// dependency-free.
struct SeedRng {
    state: u64,
}

impl SeedRng {
    fn new() -> Self {
        // getrandom keeps seeding portable to WASM hosts.
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Solver, Strategy};

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = Generator::with_seed(42).generate();
        let b = Generator::with_seed(42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_mazes_are_solvable_by_both_engines() {
        let solver = Solver::new();
        for seed in [1, 7, 42, 99] {
            let maze = Generator::with_seed(seed).generate();
            for strategy in [Strategy::Backtracking, Strategy::BreadthFirst] {
                let path = solver.solve(&maze, strategy).unwrap();
                assert_eq!(*path.first().unwrap(), maze.start());
                assert_eq!(*path.last().unwrap(), maze.finish());
            }
        }
    }

    #[test]
    fn dimensions_are_rounded_up_to_odd() {
        let maze = Generator::seeded_with_config(3, GeneratorConfig { rows: 10, cols: 12 }).generate();
        assert_eq!(maze.grid().rows(), 11);
        assert_eq!(maze.grid().row_len(0), 13);
    }

    #[test]
    fn endpoints_sit_in_opposite_corners() {
        let maze = Generator::seeded_with_config(5, GeneratorConfig::small()).generate();
        assert_eq!(maze.start(), Coord::new(0, 0));
        assert_eq!(maze.finish(), Coord::new(8, 8));
    }
}
