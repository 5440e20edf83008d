use std::collections::{HashSet, VecDeque};

use rand::Rng;

use super::action::Direction;
use super::cell::Cell;
use super::config::GameConfig;
use super::maze::MazeGrid;

/// Outcome of a single [`SnakeEngine::advance`] step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// No directional input this tick
    Idle,
    /// The move ran into a wall or the grid border
    Blocked,
    /// The head moved and the tail followed
    Moved,
    /// The snake ate the food and grew by one segment
    Grew,
    /// The snake reached the target length; the game is over
    Won,
    /// The game was already over
    Ended,
}

/// Snake state machine constrained by the walls of a [`MazeGrid`].
///
/// The engine never mutates the grid; every move is validated against
/// [`MazeGrid::is_connected`], which covers grid borders and carved walls
/// uniformly. There is no self-collision rule: the snake may re-enter its own
/// body whenever the edge leading there is open.
pub struct SnakeEngine {
    grid: MazeGrid,
    /// Body cells, head first
    body: VecDeque<Cell>,
    food: Cell,
    ended: bool,
    target_length: usize,
    rng: rand::rngs::ThreadRng,
}

impl SnakeEngine {
    /// Create an engine from an explicit initial body (head first).
    ///
    /// The initial cells must be non-empty and lie within the grid; cells may
    /// coincide, so a freshly started snake can be several segments stacked on
    /// one cell.
    pub fn new(grid: MazeGrid, initial_cells: Vec<Cell>, target_length: usize) -> Self {
        assert!(!initial_cells.is_empty(), "initial body must not be empty");
        assert!(
            initial_cells.iter().all(|&cell| grid.in_bounds(cell)),
            "initial body must lie within the grid"
        );

        let body: VecDeque<Cell> = initial_cells.into();
        let mut rng = rand::thread_rng();
        let food = Self::spawn_food(&mut rng, &grid, &body);

        Self {
            grid,
            body,
            food,
            ended: false,
            target_length,
            rng,
        }
    }

    /// Create an engine from a configuration: the body starts stacked on the
    /// center cell and the target length comes from the configured policy.
    pub fn from_config(grid: MazeGrid, config: &GameConfig) -> Self {
        let center = Cell::new((grid.x_size() / 2) as i32, (grid.y_size() / 2) as i32);
        let initial = vec![center; config.initial_snake_length.max(1)];
        let target = config
            .target_length
            .resolve(grid.x_size(), grid.y_size())
            .max(initial.len() + 1);

        Self::new(grid, initial, target)
    }

    /// Execute one step of the game.
    ///
    /// `None` means no directional input arrived this tick. A move through a
    /// closed edge is rejected without touching any state. Eating the food
    /// grows the snake by one and either wins the game or relocates the food
    /// to a random unoccupied cell.
    pub fn advance(&mut self, direction: Option<Direction>) -> AdvanceResult {
        if self.ended {
            return AdvanceResult::Ended;
        }

        let Some(direction) = direction else {
            return AdvanceResult::Idle;
        };

        let head = self.head();
        if !self.grid.is_connected(head, direction) {
            return AdvanceResult::Blocked;
        }

        let new_head = head.moved_in_direction(direction);
        self.body.push_front(new_head);

        if new_head == self.food {
            if self.body.len() >= self.target_length {
                self.ended = true;
                return AdvanceResult::Won;
            }
            self.food = Self::spawn_food(&mut self.rng, &self.grid, &self.body);
            AdvanceResult::Grew
        } else {
            self.body.pop_back();
            AdvanceResult::Moved
        }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        *self.body.front().expect("body is never empty")
    }

    /// Body cells in traversal order, head first
    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// The maze the snake is moving through
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Spawn food at a random cell not occupied by the snake
    fn spawn_food(rng: &mut impl Rng, grid: &MazeGrid, body: &VecDeque<Cell>) -> Cell {
        let occupied: HashSet<Cell> = body.iter().copied().collect();
        assert!(
            occupied.len() < grid.x_size() * grid.y_size(),
            "no free cell left for food"
        );

        loop {
            let cell = Cell::new(
                rng.gen_range(0..grid.x_size()) as i32,
                rng.gen_range(0..grid.y_size()) as i32,
            );
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }
}
