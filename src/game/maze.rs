use std::collections::VecDeque;

use log::debug;
use rand::Rng;
use thiserror::Error;

use super::action::Direction;
use super::cell::Cell;

/// Errors that can occur when building a maze grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be at least 2x2, got {x_size}x{y_size}")]
    InvalidDimensions { x_size: usize, y_size: usize },
}

/// Wall state for an `x_size` by `y_size` grid of cells.
///
/// Edges between adjacent cells are stored in two parallel boolean matrices:
/// an entry is true iff the two cells it joins are connected (no wall). The
/// open-edge graph is kept connected at all times, so every cell is reachable
/// from every other cell both on a fully open grid and after wall carving.
///
/// The grid is immutable once constructed; it is `Clone` so the same maze can
/// be reused across rounds or shared by several engines.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    x_size: usize,
    y_size: usize,
    /// open_x[x][y] is true iff (x, y) and (x + 1, y) are connected
    open_x: Vec<Vec<bool>>,
    /// open_y[x][y] is true iff (x, y) and (x, y + 1) are connected
    open_y: Vec<Vec<bool>>,
}

impl MazeGrid {
    /// Create a new grid.
    ///
    /// With `carve_walls` set, walls are inserted at random while keeping the
    /// grid fully connected; otherwise every edge stays open.
    pub fn new(x_size: usize, y_size: usize, carve_walls: bool) -> Result<Self, MazeError> {
        if x_size < 2 || y_size < 2 {
            return Err(MazeError::InvalidDimensions { x_size, y_size });
        }

        let mut grid = Self {
            x_size,
            y_size,
            open_x: vec![vec![true; y_size]; x_size - 1],
            open_y: vec![vec![true; y_size - 1]; x_size],
        };

        if carve_walls {
            grid.carve();
        }

        Ok(grid)
    }

    /// Insert walls at random edges, rejecting any wall that would cut the
    /// grid into two components.
    ///
    /// Runs `(x_size - 1) * (y_size - 1)` insertion trials. Each trial
    /// resamples random open edges until one can be closed without breaking
    /// reachability. Once only `x_size * y_size - 1` edges remain open, the
    /// open graph is a spanning tree and every remaining edge is a bridge, so
    /// carving stops.
    fn carve(&mut self) {
        let mut rng = rand::thread_rng();

        let trials = (self.x_size - 1) * (self.y_size - 1);
        let spanning_tree_edges = self.x_size * self.y_size - 1;
        let mut open_edges = (self.x_size - 1) * self.y_size + self.x_size * (self.y_size - 1);
        let mut walls_placed = 0;

        for _ in 0..trials {
            if open_edges == spanning_tree_edges {
                debug!(
                    "carving stopped after {walls_placed} walls: remaining open edges form a spanning tree"
                );
                return;
            }

            loop {
                let horizontal = rng.gen_bool(0.5);
                let (x, y) = if horizontal {
                    (
                        rng.gen_range(0..self.x_size - 1),
                        rng.gen_range(0..self.y_size),
                    )
                } else {
                    (
                        rng.gen_range(0..self.x_size),
                        rng.gen_range(0..self.y_size - 1),
                    )
                };

                // Only currently-open edges are candidates
                let open = if horizontal {
                    &mut self.open_x[x][y]
                } else {
                    &mut self.open_y[x][y]
                };
                if !*open {
                    continue;
                }

                // Tentatively close the edge; keep it closed only if every
                // cell is still reachable
                *open = false;
                if self.all_cells_reachable() {
                    open_edges -= 1;
                    walls_placed += 1;
                    break;
                }

                if horizontal {
                    self.open_x[x][y] = true;
                } else {
                    self.open_y[x][y] = true;
                }
            }
        }

        debug!("carving placed {walls_placed} walls in {trials} trials");
    }

    /// Check whether the cell adjacent to `cell` in `direction` is connected
    /// to it. Returns false whenever the neighbor would fall outside the grid.
    pub fn is_connected(&self, cell: Cell, direction: Direction) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }

        let (x, y) = (cell.x as usize, cell.y as usize);
        match direction {
            Direction::Right => x + 1 < self.x_size && self.open_x[x][y],
            Direction::Left => x > 0 && self.open_x[x - 1][y],
            Direction::Down => y + 1 < self.y_size && self.open_y[x][y],
            Direction::Up => y > 0 && self.open_y[x][y - 1],
        }
    }

    /// Check if a cell lies within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && (cell.x as usize) < self.x_size
            && cell.y >= 0
            && (cell.y as usize) < self.y_size
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    /// Breadth-first reachability over open edges, starting from (0, 0).
    /// Iterative with an explicit queue so deep mazes cannot overflow the
    /// stack.
    fn all_cells_reachable(&self) -> bool {
        let mut visited = vec![vec![false; self.y_size]; self.x_size];
        let mut queue = VecDeque::new();

        visited[0][0] = true;
        queue.push_back(Cell::new(0, 0));
        let mut seen = 1;

        while let Some(cell) = queue.pop_front() {
            for direction in Direction::ALL {
                if !self.is_connected(cell, direction) {
                    continue;
                }
                let next = cell.moved_in_direction(direction);
                let (nx, ny) = (next.x as usize, next.y as usize);
                if visited[nx][ny] {
                    continue;
                }
                visited[nx][ny] = true;
                seen += 1;
                queue.push_back(next);
            }
        }

        seen == self.x_size * self.y_size
    }
}
