use super::action::Direction;
use super::power::{Activation, PowerUp, PowerUpKind};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Wrap both coordinates onto a toroidal board of the given size.
    /// `rem_euclid` keeps negative values in range, so stepping off the
    /// left edge re-enters on the right.
    pub fn wrapped(&self, width: i32, height: i32) -> Self {
        Self {
            x: self.x.rem_euclid(width),
            y: self.y.rem_euclid(height),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Committed direction of travel; None until the first key press
    pub heading: Option<Direction>,
}

impl Snake {
    /// Create a single-segment, idle snake at the given cell
    pub fn new(head: Position) -> Self {
        Self {
            body: vec![head],
            heading: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Commit a new heading, unless it would reverse travel 180 degrees.
    /// Any direction is accepted while idle.
    pub fn steer(&mut self, direction: Direction) {
        match self.heading {
            Some(current) if current.is_opposite(direction) => {}
            _ => self.heading = Some(direction),
        }
    }

    /// The per-tick movement delta; zero while idle
    pub fn delta(&self) -> (i32, i32) {
        self.heading.map(|d| d.delta()).unwrap_or((0, 0))
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Position,
    /// At most one uncollected power-up on the board
    pub power_up: Option<PowerUp>,
    /// The collected power-up currently in force, if any
    pub activation: Option<Activation>,
    pub score: u32,
    /// Current tick interval in milliseconds
    pub speed: u64,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Position, speed: u64, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            apple,
            power_up: None,
            activation: None,
            score: 0,
            speed,
            grid_width,
            grid_height,
        }
    }

    /// The cell at the center of the board, where each run begins
    pub fn center(&self) -> Position {
        Position::new((self.grid_width / 2) as i32, (self.grid_height / 2) as i32)
    }

    /// Whether a power-up of the given kind is currently in force
    pub fn has_active(&self, kind: PowerUpKind) -> bool {
        matches!(self.activation, Some(act) if act.kind == kind)
    }

    /// Status-display string: the active kind uppercased, or "None"
    pub fn power_status(&self) -> String {
        match self.activation {
            Some(act) => act.kind.name().to_uppercase(),
            None => "None".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_wrapping_all_edges() {
        // Off every edge of a 20x20 board, back into [0, 20)
        assert_eq!(Position::new(-1, 5).wrapped(20, 20), Position::new(19, 5));
        assert_eq!(Position::new(20, 5).wrapped(20, 20), Position::new(0, 5));
        assert_eq!(Position::new(5, -1).wrapped(20, 20), Position::new(5, 19));
        assert_eq!(Position::new(5, 20).wrapped(20, 20), Position::new(5, 0));
        assert_eq!(Position::new(0, 0).wrapped(20, 20), Position::new(0, 0));
        assert_eq!(Position::new(-1, -1).wrapped(20, 20), Position::new(19, 19));
    }

    #[test]
    fn test_new_snake_is_idle() {
        let snake = Snake::new(Position::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(10, 10));
        assert_eq!(snake.heading, None);
        assert_eq!(snake.delta(), (0, 0));
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.heading = Some(Direction::Right);

        snake.steer(Direction::Left);
        assert_eq!(snake.heading, Some(Direction::Right));

        snake.steer(Direction::Up);
        assert_eq!(snake.heading, Some(Direction::Up));

        snake.steer(Direction::Down);
        assert_eq!(snake.heading, Some(Direction::Up));
    }

    #[test]
    fn test_steer_from_idle_accepts_anything() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::new(Position::new(5, 5));
            snake.steer(direction);
            assert_eq!(snake.heading, Some(direction));
        }
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ],
            heading: Some(Direction::Right),
        };
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
    }

    #[test]
    fn test_power_status_display() {
        let mut state = GameState::new(
            Snake::new(Position::new(10, 10)),
            Position::new(3, 3),
            150,
            20,
            20,
        );
        assert_eq!(state.power_status(), "None");

        state.activation = Some(Activation::new(PowerUpKind::Invincible, 60));
        assert_eq!(state.power_status(), "INVINCIBLE");

        state.activation = Some(Activation::new(PowerUpKind::Slow, 60));
        assert_eq!(state.power_status(), "SLOW");

        state.activation = None;
        assert_eq!(state.power_status(), "None");
    }

    #[test]
    fn test_has_active_matches_kind_exactly() {
        let mut state = GameState::new(
            Snake::new(Position::new(10, 10)),
            Position::new(3, 3),
            150,
            20,
            20,
        );
        assert!(!state.has_active(PowerUpKind::Double));

        state.activation = Some(Activation::new(PowerUpKind::Double, 10));
        assert!(state.has_active(PowerUpKind::Double));
        assert!(!state.has_active(PowerUpKind::Invincible));
    }
}
