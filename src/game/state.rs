use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one cell away in the given direction
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake, head at index 0, tail at the last index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// Create a snake of `length` segments, head at `head`, body trailing
    /// away opposite to `direction`. Length is clamped to at least 1.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| Position::new(head.x - dx * i, head.y - dy * i))
            .collect();
        Self { body }
    }

    /// Build a snake from explicit cells, head first. `cells` must be
    /// non-empty.
    pub fn from_cells(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { body: cells }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    /// True if any segment, head included, occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head; keeps the tail when `grow` is true, drops it otherwise
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }
}

/// Lifecycle of one game, Running until a single terminal transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Wall or self collision
    GameOver,
    /// The snake fills the grid and no food cell remains
    Won,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Everything the engine owns about one game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Position>,
    pub tile_count: i32,
    pub score: u32,
    pub status: GameStatus,
}

impl GameState {
    /// True iff `pos` lies within [0, tile_count) on both axes
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.tile_count && pos.y >= 0 && pos.y < self.tile_count
    }
}

/// Read-only copy of the state handed to rendering collaborators.
/// Owned data only, so the renderer can never alias engine internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
}

impl Snapshot {
    pub fn head(&self) -> Position {
        self.snake[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_stepped() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.stepped(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.stepped(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.stepped(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.stepped(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_trails_behind_head() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.cells(),
            &[
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );
    }

    #[test]
    fn test_snake_length_clamped_to_one() {
        let snake = Snake::new(Position::new(2, 2), Direction::Up, 0);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert!(!snake.occupies(Position::new(3, 5))); // old tail gone
    }

    #[test]
    fn test_advance_with_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Position::new(6, 5), true);
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position::new(3, 5))); // old tail kept
    }

    #[test]
    fn test_occupies_includes_head() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 2);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState {
            snake: Snake::new(Position::new(5, 5), Direction::Right, 1),
            food: Some(Position::new(10, 10)),
            tile_count: 20,
            score: 0,
            status: GameStatus::Running,
        };

        assert!(state.in_bounds(Position::new(0, 0)));
        assert!(state.in_bounds(Position::new(19, 19)));
        assert!(!state.in_bounds(Position::new(-1, 0)));
        assert!(!state.in_bounds(Position::new(20, 0)));
        assert!(!state.in_bounds(Position::new(0, 20)));
    }
}
