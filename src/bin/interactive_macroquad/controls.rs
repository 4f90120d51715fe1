use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use projectile_lab::core::ballistics::{ANGLE_RANGE_DEG, GRAVITY_RANGE_MPS2, SPEED_RANGE_MPS};
use projectile_lab::core::session::FlightPhase;

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

fn slider_range((low, high): (f64, f64)) -> std::ops::Range<f32> {
    (low as f32)..(high as f32)
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Simulation Controls")
    .ui(&mut *root_ui(), |ui| {
        ui.label(None, "Use realistic values for angle, speed and gravity.");
        ui.separator();
        ui.slider(
            hash!(),
            "Angle (deg)",
            slider_range(ANGLE_RANGE_DEG),
            &mut state.sliders.angle_deg,
        );
        ui.slider(
            hash!(),
            "Speed (m/s)",
            slider_range(SPEED_RANGE_MPS),
            &mut state.sliders.speed_mps,
        );
        ui.slider(
            hash!(),
            "Gravity (m/s^2)",
            slider_range(GRAVITY_RANGE_MPS2),
            &mut state.sliders.gravity_mps2,
        );
        ui.separator();
        if ui.button(None, "Launch (Space)") {
            actions.launch = true;
        }
        if ui.button(None, "Reset (R)") {
            actions.reset = true;
        }
        ui.label(
            None,
            &format!(
                "Flight state: {}",
                phase_text(state.session.phase())
            ),
        );
    });
    state.push_sliders();

    actions
}

pub(crate) fn phase_text(phase: FlightPhase) -> &'static str {
    match phase {
        FlightPhase::Idle => "Idle",
        FlightPhase::Flying => "Flying",
    }
}
