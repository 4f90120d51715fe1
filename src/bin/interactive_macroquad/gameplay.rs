use macroquad::prelude::*;

use crate::constants::{ANGLE_KEY_RATE_DEG, SPEED_KEY_RATE_MPS};
use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.reset();
    }
    if actions.launch {
        state.launch();
    }
}

pub(crate) fn apply_keyboard_adjustments(state: &mut AppRuntime, frame_dt: f32) {
    let frame_dt = f64::from(frame_dt);
    let params = state.session.params();
    if is_key_down(KeyCode::Up) {
        state
            .session
            .set_angle(params.angle_deg + ANGLE_KEY_RATE_DEG * frame_dt);
    }
    if is_key_down(KeyCode::Down) {
        state
            .session
            .set_angle(params.angle_deg - ANGLE_KEY_RATE_DEG * frame_dt);
    }
    if is_key_down(KeyCode::Right) {
        state
            .session
            .set_speed(params.speed_mps + SPEED_KEY_RATE_MPS * frame_dt);
    }
    if is_key_down(KeyCode::Left) {
        state
            .session
            .set_speed(params.speed_mps - SPEED_KEY_RATE_MPS * frame_dt);
    }
    state.pull_sliders();
}

pub(crate) fn step_active_flight(state: &mut AppRuntime) {
    let now_s = get_time();
    if let Some(outcome) = state.driver.tick(&mut state.session, now_s) {
        if outcome.is_terminal() {
            tracing::debug!(?outcome, "flight finished");
        }
    }
}
