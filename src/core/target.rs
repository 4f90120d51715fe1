use macroquad::rand::RandGenerator;
use serde::Serialize;

use crate::core::ballistics::Point;

pub const TARGET_X_RANGE_M: (f64, f64) = (25.0, 55.0);
pub const TARGET_WIDTH_RANGE_M: (f64, f64) = (5.0, 10.0);
pub const TARGET_HEIGHT_RANGE_M: (f64, f64) = (6.0, 12.0);

/// Ground-standing block spanning `[x, x + width]` horizontally and `[0, height]` vertically.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Target {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Target {
    pub const fn new(x: f64, width: f64, height: f64) -> Self {
        Self { x, width, height }
    }

    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn draw(rng: &RandGenerator, (low, high): (f64, f64)) -> f64 {
    round_to_tenth(rng.gen_range(low, high))
}

/// Draws a fresh target. All state lives in `rng`, so calls are independent draws.
pub fn generate_target(rng: &RandGenerator) -> Target {
    Target {
        x: draw(rng, TARGET_X_RANGE_M),
        width: draw(rng, TARGET_WIDTH_RANGE_M),
        height: draw(rng, TARGET_HEIGHT_RANGE_M),
    }
}

// The vertical band is measured from the ground, not from anything the target is drawn on.
pub fn is_point_inside_target(point: Point, target: &Target) -> bool {
    let within_x = point.x >= target.x && point.x <= target.right_edge();
    let within_y = point.y >= 0.0 && point.y <= target.height;
    within_x && within_y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> RandGenerator {
        let rng = RandGenerator::new();
        rng.srand(seed);
        rng
    }

    fn is_tenth(value: f64) -> bool {
        ((value * 10.0) - (value * 10.0).round()).abs() < 1e-9
    }

    #[test]
    fn generated_targets_stay_in_bounds_and_round_to_tenths() {
        let rng = seeded(7);
        for _ in 0..500 {
            let target = generate_target(&rng);
            assert!((25.0..=55.0).contains(&target.x), "{target:?}");
            assert!((5.0..=10.0).contains(&target.width), "{target:?}");
            assert!((6.0..=12.0).contains(&target.height), "{target:?}");
            assert!(is_tenth(target.x) && is_tenth(target.width) && is_tenth(target.height));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let a = seeded(42);
        let b = seeded(42);
        for _ in 0..10 {
            assert_eq!(generate_target(&a), generate_target(&b));
        }
    }

    #[test]
    fn successive_draws_differ() {
        let rng = seeded(3);
        let first = generate_target(&rng);
        let differs = (0..20).any(|_| generate_target(&rng) != first);
        assert!(differs);
    }

    #[test]
    fn left_edge_on_ground_is_inside() {
        let target = Target::new(30.0, 6.0, 8.0);
        assert!(is_point_inside_target(Point::new(target.x, 0.0), &target));
        assert!(is_point_inside_target(Point::new(target.right_edge(), target.height), &target));
    }

    #[test]
    fn points_just_outside_are_rejected() {
        let target = Target::new(30.0, 6.0, 8.0);
        assert!(!is_point_inside_target(Point::new(target.x - 0.01, 0.0), &target));
        assert!(!is_point_inside_target(Point::new(target.x, target.height + 0.01), &target));
        assert!(!is_point_inside_target(Point::new(target.right_edge() + 0.01, 1.0), &target));
        assert!(!is_point_inside_target(Point::new(target.x + 1.0, -0.01), &target));
    }
}
