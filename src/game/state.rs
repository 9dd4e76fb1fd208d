use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    action::Direction,
    config::{FoodPlacement, GameConfig},
    food::spawn_food,
};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake's body, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Lay out a straight snake of `length` segments trailing behind `head`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.opposite().delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(dx, dy));
        }

        Self { body }
    }

    /// Build a snake from explicit segments. Callers guarantee at least one.
    pub fn from_segments(body: Vec<Position>) -> Self {
        debug_assert!(!body.is_empty(), "snake needs a head");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment, head and tail included, occupies `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head, dropping the tail unless the snake grows
    fn slither(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a snake built through `new` or `from_segments`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

impl CollisionType {
    pub fn reason(&self) -> &'static str {
        match self {
            CollisionType::Wall => "game over: wall collision",
            CollisionType::SelfCollision => "game over: self collision",
        }
    }
}

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred this step
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game is over after this step
    pub terminated: bool,
    pub info: StepInfo,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub grid_size: usize,
    pub food_placement: FoodPlacement,
    pub score: u32,
    /// Ticks survived since the last reset
    pub steps: u32,
    pub game_over: bool,
    /// Why the game ended, once it has
    pub ending: Option<CollisionType>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, direction: Direction, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            direction,
            grid_size,
            food_placement: FoodPlacement::Anywhere,
            score: 0,
            steps: 0,
            game_over: false,
            ending: None,
        }
    }

    /// Build the initial state described by `config`
    pub fn from_config(config: &GameConfig) -> Self {
        let mut state = Self::new(
            Snake::from_segments(config.initial_snake.clone()),
            config.initial_food,
            config.initial_direction,
            config.grid_size,
        );
        state.food_placement = config.food_placement;
        state
    }

    /// Replace everything with the initial configuration
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::from_config(config);
    }

    /// Overwrite the direction read on the next tick. Reversing is allowed and
    /// runs the head into the neck.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance the game by one tick
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepResult {
        if self.game_over {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: None,
                },
            };
        }

        let new_head = self.snake.head().moved_in_direction(self.direction);

        if let Some(collision_type) = self.check_collision(new_head) {
            self.game_over = true;
            self.ending = Some(collision_type);

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        let ate_food = new_head == self.food;
        self.snake.slither(new_head, ate_food);

        if ate_food {
            self.score += 1;
            self.food = spawn_food(rng, self.grid_size, self.food_placement, &self.snake);
        }

        self.steps = self.steps.saturating_add(1);

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    /// Check the candidate head against the walls, then the pre-move body
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.snake.contains(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_size as i32
            && pos.y >= 0
            && pos.y < self.grid_size as i32
    }
}
