use rand::Rng;

use super::{
    config::FoodPlacement,
    state::{Position, Snake},
};

/// Pick the next food position on a `grid_size` square board
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid_size: usize,
    placement: FoodPlacement,
    snake: &Snake,
) -> Position {
    match placement {
        FoodPlacement::Anywhere => random_cell(rng, grid_size),
        // A full board has no free cell left to find.
        FoodPlacement::AvoidSnake if snake.len() >= grid_size * grid_size => {
            random_cell(rng, grid_size)
        }
        FoodPlacement::AvoidSnake => loop {
            let pos = random_cell(rng, grid_size);

            if !snake.contains(pos) {
                return pos;
            }
        },
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid_size: usize) -> Position {
    let x = rng.gen_range(0..grid_size) as i32;
    let y = rng.gen_range(0..grid_size) as i32;
    Position::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_anywhere_stays_on_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = Snake::new(Position::new(7, 7), Direction::Right, 3);

        for _ in 0..500 {
            let pos = spawn_food(&mut rng, 15, FoodPlacement::Anywhere, &snake);
            assert!((0..15).contains(&pos.x));
            assert!((0..15).contains(&pos.y));
        }
    }

    #[test]
    fn test_anywhere_can_land_on_snake() {
        let mut rng = StdRng::seed_from_u64(3);
        // Covers three of the four cells
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);

        let hits = (0..100)
            .map(|_| spawn_food(&mut rng, 2, FoodPlacement::Anywhere, &snake))
            .filter(|pos| snake.contains(*pos))
            .count();

        assert!(hits > 0);
    }

    #[test]
    fn test_avoid_snake_never_overlaps() {
        let mut rng = StdRng::seed_from_u64(5);
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);

        for _ in 0..100 {
            let pos = spawn_food(&mut rng, 2, FoodPlacement::AvoidSnake, &snake);
            assert_eq!(pos, Position::new(0, 1));
        }
    }

    #[test]
    fn test_avoid_snake_on_full_board_still_returns() {
        let mut rng = StdRng::seed_from_u64(9);
        let snake = Snake::from_segments(vec![Position::new(0, 0)]);

        let pos = spawn_food(&mut rng, 1, FoodPlacement::AvoidSnake, &snake);

        assert_eq!(pos, Position::new(0, 0));
    }
}
