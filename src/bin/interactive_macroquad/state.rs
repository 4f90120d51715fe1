use projectile_lab::core::driver::AnimationDriver;
use projectile_lab::core::session::Session;

/// Slider mirrors; macroquad widgets edit `f32` in place.
pub(crate) struct SliderValues {
    pub(crate) angle_deg: f32,
    pub(crate) speed_mps: f32,
    pub(crate) gravity_mps2: f32,
}

pub(crate) struct AppRuntime {
    pub(crate) session: Session,
    pub(crate) driver: AnimationDriver,
    pub(crate) sliders: SliderValues,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let session = Session::new();
        let sliders = SliderValues {
            angle_deg: 0.0,
            speed_mps: 0.0,
            gravity_mps2: 0.0,
        };
        let mut state = Self {
            session,
            driver: AnimationDriver::new(),
            sliders,
        };
        state.pull_sliders();
        state
    }

    /// Copies the session's clamped parameters back into the sliders.
    pub(crate) fn pull_sliders(&mut self) {
        let params = self.session.params();
        self.sliders.angle_deg = params.angle_deg as f32;
        self.sliders.speed_mps = params.speed_mps as f32;
        self.sliders.gravity_mps2 = params.gravity_mps2 as f32;
    }

    /// Writes back only sliders the user moved, so f32 rounding never leaks into untouched
    /// parameters.
    pub(crate) fn push_sliders(&mut self) {
        let params = self.session.params();
        if self.sliders.angle_deg != params.angle_deg as f32 {
            self.session.set_angle(f64::from(self.sliders.angle_deg));
        }
        if self.sliders.speed_mps != params.speed_mps as f32 {
            self.session.set_speed(f64::from(self.sliders.speed_mps));
        }
        if self.sliders.gravity_mps2 != params.gravity_mps2 as f32 {
            self.session.set_gravity(f64::from(self.sliders.gravity_mps2));
        }
        self.pull_sliders();
    }

    pub(crate) fn launch(&mut self) {
        if self.session.launch().is_ok() {
            self.driver.start();
        }
    }

    pub(crate) fn reset(&mut self) {
        self.session.reset();
        self.driver.cancel();
    }
}
