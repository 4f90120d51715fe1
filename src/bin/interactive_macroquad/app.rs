use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    PAGE_BG, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, apply_keyboard_adjustments, step_active_flight};
use crate::hud::draw_hud;
use crate::render::{Canvas, draw_scene};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Lab".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub(crate) async fn run() {
    init_logging();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        apply_keyboard_adjustments(&mut state, frame_dt);
        step_active_flight(&mut state);

        clear_background(PAGE_BG);
        let view = state.session.view();
        let canvas = Canvas::new(left, top, right, bottom, &view);
        draw_scene(&canvas, &view, get_time(), ui_font.as_ref());
        draw_hud(&view, left, right, ui_font.as_ref());

        next_frame().await;
    }
}
