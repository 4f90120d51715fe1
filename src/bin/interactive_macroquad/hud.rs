use macroquad::prelude::*;

use projectile_lab::core::ballistics::speed_magnitude;
use projectile_lab::core::session::SessionView;

use crate::constants::{
    ACCENT_COLOR, CONTROLS_Y, HEADER_COLOR, INFO_PANEL_Y, MUTED_COLOR, PANEL_X, SUCCESS_COLOR,
    TITLE_Y,
};
use crate::render::draw_ui_text;

const LINE_H: f32 = 24.0;

pub(crate) fn draw_hud(view: &SessionView<'_>, left: f32, right: f32, font: Option<&Font>) {
    draw_header_block(view, left, right, font);
    let y = draw_info_panel(view, INFO_PANEL_Y, font);
    draw_target_panel(view, y + LINE_H, font);
}

fn draw_header_block(view: &SessionView<'_>, left: f32, right: f32, font: Option<&Font>) {
    draw_ui_text(
        "Projectile Lab - Uniformly Accelerated Motion",
        PANEL_X,
        TITLE_Y,
        30,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        "Controls: sliders or Up/Down angle | Left/Right speed | Space launch | R reset",
        PANEL_X,
        CONTROLS_Y,
        18,
        MUTED_COLOR,
        font,
    );

    let level = format!("Level {} | Hits {}", view.level, view.success);
    let size = measure_text(&level, font, 24, 1.0);
    draw_ui_text(
        &level,
        (right - size.width).max(left),
        TITLE_Y,
        24,
        SUCCESS_COLOR,
        font,
    );
}

fn dash_or(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Theory readout plus live values while flying. Returns the y below the last line.
fn draw_info_panel(view: &SessionView<'_>, top: f32, font: Option<&Font>) -> f32 {
    let mut y = top;
    let mut line = |text: &str, size: u16, color: Color| {
        draw_ui_text(text, PANEL_X, y, size, color, font);
        y += LINE_H;
    };

    line("THEORY", 16, ACCENT_COLOR);
    line(view.result_text, 16, HEADER_COLOR);

    let theory = view.theory;
    line(
        &format!(
            "Flight time: {}",
            dash_or(theory.map(|t| format!("{:.2} s", t.total_time_s)))
        ),
        18,
        HEADER_COLOR,
    );
    line(
        &format!(
            "Max range: {}",
            dash_or(theory.map(|t| format!("{:.2} m", t.range_m)))
        ),
        18,
        HEADER_COLOR,
    );
    line(
        &format!(
            "Max height: {}",
            dash_or(theory.map(|t| format!("{:.2} m", t.h_max_m)))
        ),
        18,
        HEADER_COLOR,
    );
    line(
        &format!(
            "Initial v0: {}",
            dash_or(theory.map(|t| format!("vx {:.1} | vy {:.1} m/s", t.vx, t.vy)))
        ),
        18,
        HEADER_COLOR,
    );

    if view.launched {
        line(
            &format!(
                "Current v: vx {:.1} | vy {:.1} m/s",
                view.velocity.x, view.velocity.y
            ),
            18,
            ACCENT_COLOR,
        );
        line(
            &format!("|v| = {:.2} m/s", speed_magnitude(view.velocity)),
            18,
            ACCENT_COLOR,
        );
        line(&format!("t = {:.2} s", view.time_s), 18, ACCENT_COLOR);
    }

    y
}

fn draw_target_panel(view: &SessionView<'_>, top: f32, font: Option<&Font>) {
    let target = view.target;
    draw_ui_text("TARGET", PANEL_X, top, 16, SUCCESS_COLOR, font);
    draw_ui_text(
        &format!(
            "x = {:.1} m | width {:.1} m | height {:.1} m",
            target.x, target.width, target.height
        ),
        PANEL_X,
        top + LINE_H,
        18,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        "Touch the green block to level up.",
        PANEL_X,
        top + LINE_H * 2.0,
        16,
        MUTED_COLOR,
        font,
    );
}
