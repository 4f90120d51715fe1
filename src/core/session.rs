//! Session state machine: launch, reset and per-frame stepping of a single projectile.
//!
//! A session is `Idle` until a valid launch moves it to `Flying`. Each step re-evaluates the
//! closed-form position at the accumulated flight time, so the path never drifts no matter how
//! the time was sliced. A flight ends on a mid-air hit or on ground contact.

use macroquad::rand::RandGenerator;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::core::ballistics::{
    LaunchParameters, Point, TheoryResult, Velocity, compute_theory, position_at_time,
    velocity_at_time,
};
use crate::core::error::TheoryError;
use crate::core::prediction::{PREDICTION_SAMPLES, build_prediction};
use crate::core::target::{Target, generate_target, is_point_inside_target};

/// Upper bound on a single step. Longer frame gaps are cut down to this.
pub const MAX_STEP_S: f64 = 0.04;

pub const INITIAL_MESSAGE: &str = "Set the angle, speed and gravity, then press Launch.";
pub const REJECTED_MESSAGE: &str =
    "Invalid parameters. Make sure the values are positive and the angle is realistic.";
pub const FLYING_MESSAGE: &str = "Simulation running... watch the trajectory!";
pub const HIT_MESSAGE: &str = "Target hit! Your parameter combination was spot on.";
pub const MISS_MESSAGE: &str = "Not yet. Try changing the angle or the speed.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FlightPhase {
    Idle,
    Flying,
}

/// Where and when a flight ended.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Landing {
    pub point: Point,
    pub elapsed_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum StepOutcome {
    /// Nothing was in flight; the step did nothing.
    Idle,
    Flying,
    Hit(Landing),
    Missed(Landing),
}

impl StepOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Hit(_) | Self::Missed(_))
    }
}

// Frozen at launch so that edits made during a flight do not bend it.
#[derive(Clone, Copy, Debug)]
struct Shot {
    params: LaunchParameters,
    theory: TheoryResult,
}

/// Read-only view of everything a renderer or reporter needs.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SessionView<'a> {
    pub params: LaunchParameters,
    pub projectile: Point,
    pub trail: &'a [Point],
    pub prediction: &'a [Point],
    pub target: Target,
    pub theory: Option<&'a TheoryResult>,
    pub launched: bool,
    pub velocity: Velocity,
    pub time_s: f64,
    pub result_text: &'a str,
    pub level: u32,
    pub success: u32,
}

pub struct Session {
    params: LaunchParameters,
    shot: Option<Shot>,
    prediction: Vec<Point>,
    trail: Vec<Point>,
    projectile: Point,
    velocity: Velocity,
    time_s: f64,
    launched: bool,
    target: Target,
    level: u32,
    success: u32,
    result_text: &'static str,
    rng: RandGenerator,
}

impl Session {
    /// New session seeded from the wall clock.
    pub fn new() -> Self {
        Self::with_seed(macroquad::miniquad::date::now().to_bits())
    }

    pub fn with_seed(seed: u64) -> Self {
        let rng = RandGenerator::new();
        rng.srand(seed);
        let target = generate_target(&rng);
        Self {
            params: LaunchParameters::default(),
            shot: None,
            prediction: Vec::new(),
            trail: Vec::new(),
            projectile: Point::ORIGIN,
            velocity: Point::ORIGIN,
            time_s: 0.0,
            launched: false,
            target,
            level: 1,
            success: 0,
            result_text: INITIAL_MESSAGE,
            rng,
        }
    }

    /// Seeded session with a caller-chosen first target. Later targets are still random.
    pub fn with_target(seed: u64, target: Target) -> Self {
        let mut session = Self::with_seed(seed);
        session.target = target;
        session
    }

    pub fn params(&self) -> LaunchParameters {
        self.params
    }

    pub fn set_angle(&mut self, angle_deg: f64) {
        self.params.set_angle(angle_deg);
    }

    pub fn set_speed(&mut self, speed_mps: f64) {
        self.params.set_speed(speed_mps);
    }

    pub fn set_gravity(&mut self, gravity_mps2: f64) {
        self.params.set_gravity(gravity_mps2);
    }

    pub fn phase(&self) -> FlightPhase {
        if self.launched {
            FlightPhase::Flying
        } else {
            FlightPhase::Idle
        }
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    pub fn theory(&self) -> Option<&TheoryResult> {
        self.shot.as_ref().map(|shot| &shot.theory)
    }

    pub fn projectile(&self) -> Point {
        self.projectile
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    pub fn prediction(&self) -> &[Point] {
        &self.prediction
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn success(&self) -> u32 {
        self.success
    }

    pub fn result_text(&self) -> &str {
        self.result_text
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            params: self.params,
            projectile: self.projectile,
            trail: &self.trail,
            prediction: &self.prediction,
            target: self.target,
            theory: self.theory(),
            launched: self.launched,
            velocity: self.velocity,
            time_s: self.time_s,
            result_text: self.result_text,
            level: self.level,
            success: self.success,
        }
    }

    /// Launches with the current (already clamped) parameters.
    pub fn launch(&mut self) -> Result<&TheoryResult, TheoryError> {
        self.launch_with(self.params)
    }

    /// Launches with `params` exactly as given. On rejection only the status text and the
    /// flight flag change; trail, target and score are left alone.
    pub fn launch_with(&mut self, params: LaunchParameters) -> Result<&TheoryResult, TheoryError> {
        let theory = match compute_theory(params) {
            Ok(theory) => theory,
            Err(err) => {
                warn!(?params, %err, "launch rejected");
                self.end_flight();
                self.result_text = REJECTED_MESSAGE;
                return Err(err);
            }
        };

        debug!(
            ?params,
            total_time_s = theory.total_time_s,
            range_m = theory.range_m,
            "launch"
        );
        self.prediction = build_prediction(&theory, params.gravity_mps2, PREDICTION_SAMPLES);
        self.trail.clear();
        self.projectile = Point::ORIGIN;
        self.velocity = theory.initial_velocity;
        self.time_s = 0.0;
        self.launched = true;
        self.result_text = FLYING_MESSAGE;

        let shot = self.shot.insert(Shot { params, theory });
        Ok(&shot.theory)
    }

    /// Back to the initial prompt. Target, level and success count survive.
    pub fn reset(&mut self) {
        debug!("reset");
        self.end_flight();
        self.shot = None;
        self.prediction.clear();
        self.trail.clear();
        self.projectile = Point::ORIGIN;
        self.result_text = INITIAL_MESSAGE;
    }

    /// Advances the flight by `delta_s` seconds of wall-clock time.
    pub fn step(&mut self, delta_s: f64) -> StepOutcome {
        let Some(shot) = self.shot.filter(|_| self.launched) else {
            return StepOutcome::Idle;
        };

        // max() first so NaN and negative gaps count as zero.
        let dt = delta_s.max(0.0).min(MAX_STEP_S);
        let next_time = self.time_s + dt;
        let gravity = shot.params.gravity_mps2;

        let raw = position_at_time(shot.theory.initial_velocity, gravity, next_time);
        let airborne = raw.y >= 0.0;
        let point = Point::new(raw.x, raw.y.max(0.0));
        if airborne {
            self.trail.push(raw);
        }
        self.projectile = point;

        let mid_air_hit = airborne && is_point_inside_target(point, &self.target);
        let landed = raw.y <= 0.0 && next_time > 0.0;
        trace!(t = next_time, x = raw.x, y = raw.y, "step");

        if !(mid_air_hit || landed) {
            self.time_s = next_time;
            self.velocity = velocity_at_time(shot.theory.initial_velocity, next_time, gravity);
            return StepOutcome::Flying;
        }

        // The ground check runs even after a mid-air decision; either one scores.
        let hit = mid_air_hit || is_point_inside_target(Point::new(raw.x, 0.0), &self.target);
        let landing = Landing {
            point,
            elapsed_s: next_time,
        };
        self.end_flight();

        if hit {
            let previous = self.target;
            self.target = generate_target(&self.rng);
            self.level += 1;
            self.success += 1;
            self.prediction.clear();
            self.result_text = HIT_MESSAGE;
            info!(
                x = point.x,
                y = point.y,
                level = self.level,
                ?previous,
                next = ?self.target,
                "target hit"
            );
            StepOutcome::Hit(landing)
        } else {
            self.result_text = MISS_MESSAGE;
            info!(x = point.x, target = ?self.target, "missed");
            StepOutcome::Missed(landing)
        }
    }

    fn end_flight(&mut self) {
        self.launched = false;
        self.time_s = 0.0;
        self.velocity = Point::ORIGIN;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
