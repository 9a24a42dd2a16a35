use rand::Rng;
use tracing::trace;

use crate::geometry::{Point, Rect};
use crate::snake::Snake;

/// Cells a food box extends past its origin, on both axes.
pub const FOOD_SIZE_EXTRA: i32 = 2;
pub const FOOD_SIZE: i32 = FOOD_SIZE_EXTRA + 1;

pub type Food = Rect;

/// Picks a random spot for a new food box inside a `width` x `height` area.
///
/// Candidates overlapping a body segment or an existing food are thrown
/// away and drawn again, with no limit on attempts: a board with no free
/// 3x3 spot left spins forever. The head is not checked, food may appear
/// right under it.
///
/// `width` and `height` must both be at least `FOOD_SIZE`, see
/// [`GameConfig::validate`](crate::config::GameConfig::validate).
pub fn spawn<R: Rng + ?Sized>(
    rng: &mut R,
    width: i32,
    height: i32,
    snake: &Snake,
    foods: &[Food],
) -> Food {
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let origin = Point::new(
            rng.random_range(0..width - FOOD_SIZE_EXTRA),
            rng.random_range(0..height - FOOD_SIZE_EXTRA),
        );
        let food = Food::square(origin, FOOD_SIZE_EXTRA);

        if snake.body().iter().any(|p| food.contains_point(*p)) {
            trace!(?origin, attempts, "food candidate hits the snake");
            continue;
        }
        if foods.iter().any(|other| other.overlaps(&food)) {
            trace!(?origin, attempts, "food candidate hits another food");
            continue;
        }
        return food;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn always_fits_inside_the_area() {
        let mut rng = SmallRng::seed_from_u64(7);
        let snake = Snake::new();
        for _ in 0..1000 {
            let food = spawn(&mut rng, 12, 5, &snake, &[]);
            assert!(food.x1() >= 0 && food.y1() >= 0);
            assert!(food.x2() < 12 && food.y2() < 5);
            assert_eq!(food.cells().count(), 9);
        }
    }

    #[test]
    fn never_lands_on_body_or_other_food() {
        let mut rng = SmallRng::seed_from_u64(0xF00D);
        let mut snake = Snake::new();
        let body: Vec<Point> = (0..10).map(|x| Point::new(x, 4)).collect();
        snake.place(Point::new(10, 4), &body);
        let foods = [
            Food::square(Point::new(2, 0), FOOD_SIZE_EXTRA),
            Food::square(Point::new(12, 6), FOOD_SIZE_EXTRA),
        ];

        for _ in 0..1000 {
            let food = spawn(&mut rng, 20, 12, &snake, &foods);
            for p in snake.body() {
                assert!(!food.contains_point(*p), "{food:?} covers {p:?}");
            }
            for other in &foods {
                assert!(!food.overlaps(other), "{food:?} overlaps {other:?}");
            }
        }
    }

    #[test]
    fn exact_fit_area_has_one_spot() {
        let mut rng = SmallRng::seed_from_u64(3);
        let food = spawn(&mut rng, FOOD_SIZE, FOOD_SIZE, &Snake::new(), &[]);
        assert_eq!(food, Food::square(Point::new(0, 0), FOOD_SIZE_EXTRA));
    }

    #[test]
    fn head_is_not_avoided() {
        // 3x3 board: the only spot covers the head at (0,0)
        let mut rng = SmallRng::seed_from_u64(11);
        let snake = Snake::new();
        let food = spawn(&mut rng, 3, 3, &snake, &[]);
        assert!(food.contains_point(snake.head()));
    }
}
