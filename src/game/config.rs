use serde::{Deserialize, Serialize};

/// Policy deriving the winning snake length from the grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLength {
    /// min(2 * width, width * height / 2)
    Capped,
    /// width * height / 2
    HalfBoard,
    /// A fixed length, independent of the grid
    Fixed(usize),
}

impl TargetLength {
    /// Resolve the policy against concrete grid dimensions.
    ///
    /// The result is clamped to `[2, area]` so the win stays reachable and a
    /// free cell for food always exists while the game is running.
    pub fn resolve(&self, x_size: usize, y_size: usize) -> usize {
        let area = x_size * y_size;
        let raw = match self {
            TargetLength::Capped => (x_size * 2).min(area / 2),
            TargetLength::HalfBoard => area / 2,
            TargetLength::Fixed(length) => *length,
        };
        raw.clamp(2, area)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the maze grid in cells
    pub grid_width: usize,
    /// Height of the maze grid in cells
    pub grid_height: usize,
    /// Whether to carve maze walls (false plays on a fully open grid)
    pub carve_walls: bool,
    /// Initial length of the snake; segments start stacked on the center cell
    pub initial_snake_length: usize,
    /// Win-condition policy
    pub target_length: TargetLength,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 8,
            grid_height: 8,
            carve_walls: true,
            initial_snake_length: 2,
            target_length: TargetLength::Capped,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small open grid for testing
    pub fn small() -> Self {
        Self {
            carve_walls: false,
            ..Self::new(5, 5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 8);
        assert_eq!(config.grid_height, 8);
        assert!(config.carve_walls);
        assert_eq!(config.initial_snake_length, 2);
        assert_eq!(config.target_length, TargetLength::Capped);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);

        let small = GameConfig::small();
        assert_eq!(small.grid_width, 5);
        assert!(!small.carve_walls);
    }

    #[test]
    fn test_target_length_policies() {
        assert_eq!(TargetLength::Capped.resolve(8, 8), 16);
        assert_eq!(TargetLength::Capped.resolve(4, 4), 8);
        assert_eq!(TargetLength::HalfBoard.resolve(8, 8), 32);
        assert_eq!(TargetLength::Fixed(5).resolve(8, 8), 5);
    }

    #[test]
    fn test_target_length_clamping() {
        // Too small to be winnable by growth
        assert_eq!(TargetLength::Fixed(0).resolve(8, 8), 2);
        // Larger than the board
        assert_eq!(TargetLength::Fixed(1000).resolve(5, 5), 25);
        // 2x2 board: area / 2 = 2 is already the lower clamp
        assert_eq!(TargetLength::HalfBoard.resolve(2, 2), 2);
    }
}
