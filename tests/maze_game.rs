use maze_snake::game::{AdvanceResult, Cell, Direction, GameConfig, MazeGrid, SnakeEngine};

fn open_grid(x_size: usize, y_size: usize) -> MazeGrid {
    MazeGrid::new(x_size, y_size, false).unwrap()
}

/// Greedy step toward the food; on an open grid this never hits a border
fn toward(head: Cell, food: Cell) -> Direction {
    if food.x > head.x {
        Direction::Right
    } else if food.x < head.x {
        Direction::Left
    } else if food.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[test]
fn scripted_walk_on_open_grid() {
    let mut engine = SnakeEngine::new(open_grid(5, 5), vec![Cell::new(2, 2); 2], 20);

    assert_eq!(engine.advance(None), AdvanceResult::Idle);
    assert_eq!(engine.head(), Cell::new(2, 2));

    // Walk to the left edge; steps may eat the randomly placed food, so both
    // plain moves and growth are acceptable
    for expected_x in [1, 0] {
        let result = engine.advance(Some(Direction::Left));
        assert!(matches!(result, AdvanceResult::Moved | AdvanceResult::Grew));
        assert_eq!(engine.head(), Cell::new(expected_x, 2));
    }

    // The border blocks further movement and leaves the state untouched
    let len_before = engine.len();
    assert_eq!(engine.advance(Some(Direction::Left)), AdvanceResult::Blocked);
    assert_eq!(engine.head(), Cell::new(0, 2));
    assert_eq!(engine.len(), len_before);

    for expected_y in [1, 0] {
        let result = engine.advance(Some(Direction::Up));
        assert!(matches!(result, AdvanceResult::Moved | AdvanceResult::Grew));
        assert_eq!(engine.head(), Cell::new(0, expected_y));
    }

    assert_eq!(engine.advance(Some(Direction::Up)), AdvanceResult::Blocked);
    assert_eq!(engine.advance(Some(Direction::Left)), AdvanceResult::Blocked);
    assert_eq!(engine.head(), Cell::new(0, 0));
}

#[test]
fn wander_preserves_invariants_in_carved_maze() {
    let config = GameConfig::new(6, 6);
    let grid = MazeGrid::new(config.grid_width, config.grid_height, config.carve_walls).unwrap();
    let mut engine = SnakeEngine::from_config(grid, &config);

    let seed = 20260806usize;
    let mut previous_len = engine.len();

    for i in 0..400 {
        let direction = Direction::ALL[seed.wrapping_add(i * 31) % 4];
        let result = engine.advance(Some(direction));

        if result == AdvanceResult::Ended {
            break;
        }

        // Length never shrinks, and the food is never under the body while
        // the game is running
        assert!(engine.len() >= previous_len);
        previous_len = engine.len();

        if !engine.is_ended() {
            assert!(engine.body().all(|cell| cell != engine.food()));
        }

        // Every body cell stays inside the grid
        assert!(engine.body().all(|cell| engine.grid().in_bounds(cell)));
    }
}

#[test]
fn play_open_grid_to_win() {
    let mut engine = SnakeEngine::new(open_grid(6, 6), vec![Cell::new(3, 3); 2], 4);

    let mut wins = 0;
    for _ in 0..500 {
        if engine.is_ended() {
            break;
        }
        let direction = toward(engine.head(), engine.food());
        let result = engine.advance(Some(direction));
        assert_ne!(result, AdvanceResult::Blocked);
        if result == AdvanceResult::Won {
            wins += 1;
        }
    }

    assert_eq!(wins, 1);
    assert!(engine.is_ended());
    assert_eq!(engine.len(), 4);

    // A finished game ignores every further input
    for direction in Direction::ALL {
        assert_eq!(engine.advance(Some(direction)), AdvanceResult::Ended);
    }
    assert_eq!(engine.len(), 4);
}
