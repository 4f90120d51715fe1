use macroquad::prelude::*;

use projectile_lab::core::ballistics::Point;
use projectile_lab::core::session::SessionView;
use projectile_lab::core::target::Target;
use projectile_lab::core::window::{Viewport, scale_for, world_to_canvas};

use crate::constants::{
    ACCENT_COLOR, GROUND_COLOR, IDLE_TEXT_COLOR, PREDICTION_COLOR, PROJECTILE_EDGE,
    PROJECTILE_FILL, PROJECTILE_RADIUS_PX, SKY_BANDS, SKY_BOTTOM, SKY_TOP, TARGET_EDGE,
    TARGET_FILL, TRAIL_COLOR,
};
use crate::notes::{FORMULAS, LEGEND, tip_at};

/// Screen rectangle the simulation is drawn into, with the world scale for this frame.
pub(crate) struct Canvas {
    pub(crate) left: f32,
    pub(crate) top: f32,
    pub(crate) viewport: Viewport,
    pub(crate) scale: f64,
}

impl Canvas {
    pub(crate) fn new(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        view: &SessionView<'_>,
    ) -> Self {
        let viewport = Viewport {
            width: f64::from((right - left).max(1.0)),
            height: f64::from((bottom - top).max(1.0)),
            ..Viewport::default()
        };
        let scale = scale_for(view.theory, &viewport);
        Self {
            left,
            top,
            viewport,
            scale,
        }
    }

    fn width(&self) -> f32 {
        self.viewport.width as f32
    }

    fn height(&self) -> f32 {
        self.viewport.height as f32
    }

    fn ground_y(&self) -> f32 {
        self.top + self.viewport.ground_y() as f32
    }

    pub(crate) fn to_screen(&self, point: Point) -> Vec2 {
        let (cx, cy) = world_to_canvas(point, self.scale, &self.viewport);
        vec2(self.left + cx as f32, self.top + cy as f32)
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

fn draw_background(canvas: &Canvas) {
    let band_h = canvas.height() / SKY_BANDS as f32;
    for i in 0..SKY_BANDS {
        let t = i as f32 / (SKY_BANDS - 1) as f32;
        draw_rectangle(
            canvas.left,
            canvas.top + band_h * i as f32,
            canvas.width(),
            band_h + 1.0,
            lerp_color(SKY_TOP, SKY_BOTTOM, t),
        );
    }
}

fn draw_ground(canvas: &Canvas) {
    let y = canvas.ground_y();
    draw_line(canvas.left, y, canvas.left + canvas.width(), y, 2.0, GROUND_COLOR);
}

fn draw_path(canvas: &Canvas, points: &[Point], thickness: f32, color: Color) {
    if points.len() < 2 {
        return;
    }
    let mut prev = canvas.to_screen(Point::new(points[0].x, points[0].y.max(0.0)));
    for point in points.iter().skip(1) {
        let cur = canvas.to_screen(Point::new(point.x, point.y.max(0.0)));
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

fn draw_target(canvas: &Canvas, target: &Target) {
    let base = canvas.to_screen(Point::new(target.x, 0.0));
    let top = canvas.to_screen(Point::new(target.x, target.height));
    let width_px = (target.width * canvas.scale) as f32;
    let height_px = base.y - top.y;
    draw_rectangle(base.x, top.y, width_px, height_px, TARGET_FILL);
    draw_rectangle_lines(base.x, top.y, width_px, height_px, 2.0, TARGET_EDGE);
}

fn draw_projectile(canvas: &Canvas, projectile: Point) {
    let p = canvas.to_screen(projectile);
    draw_circle(p.x, p.y, PROJECTILE_RADIUS_PX, PROJECTILE_FILL);
    draw_circle_lines(p.x, p.y, PROJECTILE_RADIUS_PX, 2.0, PROJECTILE_EDGE);
}

fn draw_idle_text(canvas: &Canvas, font: Option<&Font>) {
    let label = "Press Launch to start the projectile simulation.";
    let size = measure_text(label, font, 18, 1.0);
    draw_ui_text(
        label,
        canvas.left + (canvas.width() - size.width) * 0.5,
        canvas.top + canvas.height() * 0.5,
        18,
        IDLE_TEXT_COLOR,
        font,
    );
}

/// Formula card in the top-right corner, shown once there is a theory to explain.
fn draw_formulas(canvas: &Canvas, font: Option<&Font>) {
    const LINE_H: f32 = 18.0;
    const PAD: f32 = 10.0;

    let width = FORMULAS
        .iter()
        .map(|line| measure_text(line, font, 14, 1.0).width)
        .fold(measure_text("FORMULAS", font, 14, 1.0).width, f32::max);
    let height = LINE_H * (FORMULAS.len() + 1) as f32 + PAD;
    let x = canvas.left + canvas.width() - width - PAD * 3.0;
    let y = canvas.top + PAD;

    draw_rectangle(x, y, width + PAD * 2.0, height, Color::new(0.09, 0.15, 0.33, 0.55));
    draw_ui_text("FORMULAS", x + PAD, y + LINE_H, 14, ACCENT_COLOR, font);
    for (i, line) in FORMULAS.iter().enumerate() {
        let line_y = y + LINE_H * (i + 2) as f32;
        draw_ui_text(line, x + PAD, line_y, 14, PREDICTION_COLOR, font);
    }
}

// Legend and a rotating tip share the strip under the ground line.
fn draw_footer(canvas: &Canvas, now_s: f64, font: Option<&Font>) {
    let strip_top = canvas.ground_y();
    let x = canvas.left + 12.0;
    draw_ui_text(LEGEND, x, strip_top + 20.0, 14, IDLE_TEXT_COLOR, font);
    draw_ui_text(
        &format!("Tip: {}", tip_at(now_s)),
        x,
        strip_top + 40.0,
        14,
        IDLE_TEXT_COLOR,
        font,
    );
}

pub(crate) fn draw_scene(
    canvas: &Canvas,
    view: &SessionView<'_>,
    now_s: f64,
    font: Option<&Font>,
) {
    draw_background(canvas);
    draw_ground(canvas);
    draw_path(canvas, view.prediction, 1.5, PREDICTION_COLOR);
    draw_target(canvas, &view.target);
    draw_path(canvas, view.trail, 2.0, TRAIL_COLOR);
    draw_projectile(canvas, view.projectile);

    if view.theory.is_some() {
        draw_formulas(canvas, font);
    }
    draw_footer(canvas, now_s, font);

    if !view.launched && view.trail.is_empty() {
        draw_idle_text(canvas, font);
    }
}
