use tracing::debug;

use crate::core::session::{Session, StepOutcome};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Clock {
    Stopped,
    /// Started, waiting for the first tick to anchor the clock.
    Armed,
    Running { previous_s: f64 },
}

/// Feeds wall-clock deltas into a [`Session`] while a flight is active.
///
/// At most one tick chain exists at a time. `start` anchors a fresh chain whose first tick
/// steps by zero; the chain cancels itself as soon as the session leaves flight, and ticks
/// after that are ignored.
#[derive(Debug)]
pub struct AnimationDriver {
    clock: Clock,
}

impl AnimationDriver {
    pub const fn new() -> Self {
        Self {
            clock: Clock::Stopped,
        }
    }

    pub fn start(&mut self) {
        debug!("animation started");
        self.clock = Clock::Armed;
    }

    pub fn cancel(&mut self) {
        if self.clock != Clock::Stopped {
            debug!("animation cancelled");
        }
        self.clock = Clock::Stopped;
    }

    pub fn is_active(&self) -> bool {
        self.clock != Clock::Stopped
    }

    /// One frame at monotonic time `now_s`. Returns `None` when no chain is active.
    pub fn tick(&mut self, session: &mut Session, now_s: f64) -> Option<StepOutcome> {
        let delta_s = match self.clock {
            Clock::Stopped => return None,
            Clock::Armed => 0.0,
            Clock::Running { previous_s } => now_s - previous_s,
        };

        if !session.is_launched() {
            self.cancel();
            return None;
        }

        self.clock = Clock::Running { previous_s: now_s };
        let outcome = session.step(delta_s);
        if !session.is_launched() {
            self.cancel();
        }
        Some(outcome)
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightRun {
    pub outcome: StepOutcome,
    pub frames: usize,
}

/// Drives an already launched session on a virtual clock advancing `frame_dt_s` per frame.
///
/// Stops when the flight ends or after `max_frames` ticks, whichever comes first.
pub fn simulate_flight(
    session: &mut Session,
    driver: &mut AnimationDriver,
    frame_dt_s: f64,
    max_frames: usize,
) -> FlightRun {
    let mut now_s = 0.0;
    // A launched shot that gets no frames is still in the air, not idle.
    let mut outcome = if session.is_launched() {
        StepOutcome::Flying
    } else {
        StepOutcome::Idle
    };
    let mut frames = 0;

    if session.is_launched() && !driver.is_active() {
        driver.start();
    }

    while frames < max_frames {
        let Some(step) = driver.tick(session, now_s) else {
            break;
        };
        outcome = step;
        frames += 1;
        now_s += frame_dt_s;
        if step.is_terminal() {
            break;
        }
    }

    FlightRun { outcome, frames }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::MAX_STEP_S;
    use crate::core::target::Target;

    fn far_target_session() -> Session {
        Session::with_target(1, Target::new(500.0, 5.0, 5.0))
    }

    #[test]
    fn first_tick_after_start_steps_by_zero() {
        let mut session = far_target_session();
        session.launch().expect("valid");
        let mut driver = AnimationDriver::new();
        driver.start();

        // A large gap between start and the first frame must not leak into the flight.
        assert_eq!(driver.tick(&mut session, 1_000.0), Some(StepOutcome::Flying));
        assert_eq!(session.time_s(), 0.0);

        driver.tick(&mut session, 1_000.02);
        assert!((session.time_s() - 0.02).abs() < 1e-9);
    }

    #[test]
    fn stalled_frame_is_clamped() {
        let mut session = far_target_session();
        session.launch().expect("valid");
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(&mut session, 0.0);
        driver.tick(&mut session, 30.0);
        assert!((session.time_s() - MAX_STEP_S).abs() < 1e-12);
    }

    #[test]
    fn ticks_are_ignored_until_started() {
        let mut session = far_target_session();
        session.launch().expect("valid");
        let mut driver = AnimationDriver::new();
        assert_eq!(driver.tick(&mut session, 0.5), None);
        assert!(session.trail().is_empty());
    }

    #[test]
    fn reset_then_tick_cancels_without_stepping() {
        let mut session = far_target_session();
        session.launch().expect("valid");
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(&mut session, 0.0);

        session.reset();
        assert_eq!(driver.tick(&mut session, 0.016), None);
        assert!(!driver.is_active());
        assert!(session.trail().is_empty());
    }

    #[test]
    fn chain_stops_itself_when_flight_ends() {
        let mut session = Session::with_target(1, Target::new(25.0, 5.0, 6.0));
        session.launch().expect("valid");
        let mut driver = AnimationDriver::new();

        let run = simulate_flight(&mut session, &mut driver, 1.0 / 60.0, 10_000);

        assert!(matches!(run.outcome, StepOutcome::Missed(_)));
        assert!(!driver.is_active());
        assert_eq!(driver.tick(&mut session, 99.0), None);
        // 4.33 s of flight at 60 fps plus the zero-length anchor frame.
        assert!((260..=262).contains(&run.frames), "frames={}", run.frames);
    }

    #[test]
    fn frame_budget_bounds_the_run() {
        let mut session = far_target_session();
        session.launch().expect("valid");
        let mut driver = AnimationDriver::new();

        let run = simulate_flight(&mut session, &mut driver, 0.01, 5);

        assert_eq!(run.frames, 5);
        assert_eq!(run.outcome, StepOutcome::Flying);
        assert!(driver.is_active());
    }

    #[test]
    fn empty_frame_budget_reports_a_flight_in_progress() {
        let mut session = far_target_session();
        session.launch().expect("valid");
        let mut driver = AnimationDriver::new();

        let run = simulate_flight(&mut session, &mut driver, 0.01, 0);

        assert_eq!(run.frames, 0);
        assert_eq!(run.outcome, StepOutcome::Flying);
        assert!(session.is_launched());
        assert!(session.trail().is_empty());
    }

    #[test]
    fn idle_session_runs_zero_frames() {
        let mut session = far_target_session();
        let mut driver = AnimationDriver::new();
        let run = simulate_flight(&mut session, &mut driver, 0.01, 100);
        assert_eq!(run.frames, 0);
        assert_eq!(run.outcome, StepOutcome::Idle);
    }
}
