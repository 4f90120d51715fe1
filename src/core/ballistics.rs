use serde::Serialize;

use crate::core::error::TheoryError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

pub const ANGLE_RANGE_DEG: (f64, f64) = (5.0, 85.0);
pub const SPEED_RANGE_MPS: (f64, f64) = (5.0, 90.0);
pub const GRAVITY_RANGE_MPS2: (f64, f64) = (1.0, 25.0);

/// A position in world meters (y up, ground at 0) or a velocity in m/s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub type Velocity = Point;

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaunchParameters {
    pub angle_deg: f64,
    pub speed_mps: f64,
    pub gravity_mps2: f64,
}

impl LaunchParameters {
    /// Builds parameters as given, without clamping. Theory validation still applies at launch.
    pub const fn new(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> Self {
        Self {
            angle_deg,
            speed_mps,
            gravity_mps2,
        }
    }

    pub fn clamped(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> Self {
        let mut params = Self::default();
        params.set_angle(angle_deg);
        params.set_speed(speed_mps);
        params.set_gravity(gravity_mps2);
        params
    }

    // Non-finite input keeps the previous value; clamp() would otherwise store NaN.
    pub fn set_angle(&mut self, angle_deg: f64) {
        if angle_deg.is_finite() {
            self.angle_deg = angle_deg.clamp(ANGLE_RANGE_DEG.0, ANGLE_RANGE_DEG.1);
        }
    }

    pub fn set_speed(&mut self, speed_mps: f64) {
        if speed_mps.is_finite() {
            self.speed_mps = speed_mps.clamp(SPEED_RANGE_MPS.0, SPEED_RANGE_MPS.1);
        }
    }

    pub fn set_gravity(&mut self, gravity_mps2: f64) {
        if gravity_mps2.is_finite() {
            self.gravity_mps2 = gravity_mps2.clamp(GRAVITY_RANGE_MPS2.0, GRAVITY_RANGE_MPS2.1);
        }
    }
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self::new(45.0, 30.0, EARTH_GRAVITY_MPS2)
    }
}

/// Closed-form flight metrics for one launch. Fixed for the lifetime of that flight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TheoryResult {
    pub vx: f64,
    pub vy: f64,
    pub total_time_s: f64,
    pub range_m: f64,
    pub h_max_m: f64,
    pub initial_velocity: Velocity,
}

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> Velocity {
    let theta = angle_deg.to_radians();
    Point::new(speed_mps * theta.cos(), speed_mps * theta.sin())
}

/// Unclamped position at `time_s` after launch from the origin; y may be negative.
pub fn position_at_time(initial_velocity: Velocity, gravity_mps2: f64, time_s: f64) -> Point {
    let x = initial_velocity.x * time_s;
    let y = (initial_velocity.y * time_s) - (0.5 * gravity_mps2 * time_s * time_s);
    Point::new(x, y)
}

pub fn velocity_at_time(initial_velocity: Velocity, time_s: f64, gravity_mps2: f64) -> Velocity {
    Point::new(initial_velocity.x, initial_velocity.y - (gravity_mps2 * time_s))
}

pub fn speed_magnitude(velocity: Velocity) -> f64 {
    velocity.x.hypot(velocity.y)
}

pub fn compute_theory(params: LaunchParameters) -> Result<TheoryResult, TheoryError> {
    let LaunchParameters {
        angle_deg,
        speed_mps,
        gravity_mps2,
    } = params;

    if gravity_mps2 <= 0.0 {
        return Err(TheoryError::NonPositiveGravity(gravity_mps2));
    }
    if speed_mps <= 0.0 {
        return Err(TheoryError::NonPositiveSpeed(speed_mps));
    }

    let initial_velocity = velocity_components(speed_mps, angle_deg);
    let Point { x: vx, y: vy } = initial_velocity;

    let total_time_s = (2.0 * vy) / gravity_mps2;
    let range_m = (speed_mps * speed_mps * (2.0 * angle_deg.to_radians()).sin()) / gravity_mps2;
    let h_max_m = (vy * vy) / (2.0 * gravity_mps2);

    if !total_time_s.is_finite() || total_time_s <= 0.0 {
        return Err(TheoryError::DegenerateFlightTime(total_time_s));
    }

    Ok(TheoryResult {
        vx,
        vy,
        total_time_s,
        range_m: range_m.max(0.0),
        h_max_m: h_max_m.max(0.0),
        initial_velocity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_theory_for_45_degrees() {
        let theory = compute_theory(LaunchParameters::new(45.0, 30.0, 9.8))
            .expect("calculation should succeed");

        assert_close(theory.vx, 21.21, 0.01);
        assert_close(theory.vy, 21.21, 0.01);
        assert_close(theory.total_time_s, 4.33, 0.01);
        assert_close(theory.range_m, 91.84, 0.01);
        assert_close(theory.h_max_m, 22.96, 0.01);
        assert_eq!(theory.initial_velocity, Point::new(theory.vx, theory.vy));
    }

    #[test]
    fn rejects_zero_gravity_and_zero_speed() {
        assert_eq!(
            compute_theory(LaunchParameters::new(45.0, 30.0, 0.0)),
            Err(TheoryError::NonPositiveGravity(0.0))
        );
        assert_eq!(
            compute_theory(LaunchParameters::new(45.0, 0.0, 9.8)),
            Err(TheoryError::NonPositiveSpeed(0.0))
        );
    }

    #[test]
    fn rejects_flat_and_downward_launches() {
        let flat = compute_theory(LaunchParameters::new(0.0, 30.0, 9.8)).expect_err("flat shot");
        assert!(matches!(flat, TheoryError::DegenerateFlightTime(t) if t == 0.0));

        let down = compute_theory(LaunchParameters::new(-30.0, 30.0, 9.8)).expect_err("downward");
        assert!(matches!(down, TheoryError::DegenerateFlightTime(t) if t < 0.0));
    }

    #[test]
    fn nan_inputs_are_rejected_as_degenerate() {
        let err = compute_theory(LaunchParameters::new(45.0, f64::NAN, 9.8)).expect_err("nan speed");
        assert!(matches!(err, TheoryError::DegenerateFlightTime(t) if t.is_nan()));
    }

    #[test]
    fn position_returns_to_ground_at_total_time() {
        let theory = compute_theory(LaunchParameters::default()).expect("valid defaults");
        let landing = position_at_time(theory.initial_velocity, 9.8, theory.total_time_s);
        assert_close(landing.x, theory.range_m, 1e-9);
        assert_close(landing.y, 0.0, 1e-9);

        let apex = position_at_time(theory.initial_velocity, 9.8, theory.total_time_s / 2.0);
        assert_close(apex.y, theory.h_max_m, 1e-9);
    }

    #[test]
    fn velocity_changes_only_vertically() {
        let v0 = velocity_components(10.0, 90.0);
        let v = velocity_at_time(v0, 1.0, 9.8);
        assert_close(v.x, v0.x, 1e-12);
        assert_close(v.y, 10.0 - 9.8, 1e-9);
        assert_close(speed_magnitude(Point::new(3.0, 4.0)), 5.0, 1e-12);
    }

    #[test]
    fn forty_five_degrees_gives_the_longest_range() {
        let range = |angle| {
            compute_theory(LaunchParameters::new(angle, 30.0, 9.8))
                .expect("valid")
                .range_m
        };
        let best = range(45.0);
        for angle in [5.0, 20.0, 44.0, 46.0, 60.0, 85.0] {
            assert!(range(angle) < best, "angle={angle}");
        }
        // Complementary angles land together.
        assert_close(range(30.0), range(60.0), 1e-9);
    }

    #[test]
    fn landing_speed_matches_launch_speed() {
        let theory = compute_theory(LaunchParameters::new(62.0, 41.0, 3.7)).expect("valid");
        let landing = velocity_at_time(theory.initial_velocity, theory.total_time_s, 3.7);
        assert_close(speed_magnitude(landing), 41.0, 1e-9);
        assert_close(landing.y, -theory.vy, 1e-9);
    }

    #[test]
    fn setters_clamp_into_bounds_and_ignore_nan() {
        let mut params = LaunchParameters::default();
        params.set_angle(120.0);
        params.set_speed(1.0);
        params.set_gravity(100.0);
        assert_eq!(params, LaunchParameters::new(85.0, 5.0, 25.0));

        params.set_angle(f64::NAN);
        params.set_speed(f64::INFINITY);
        assert_eq!(params, LaunchParameters::new(85.0, 5.0, 25.0));

        assert_eq!(
            LaunchParameters::clamped(0.0, 1000.0, 0.5),
            LaunchParameters::new(5.0, 90.0, 1.0)
        );
    }
}
