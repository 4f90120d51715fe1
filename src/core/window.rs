use crate::core::ballistics::{Point, TheoryResult};

pub const MIN_SCALE_PX_PER_M: f64 = 4.0;
pub const MAX_SCALE_PX_PER_M: f64 = 20.0;

const MIN_RANGE_SPAN_M: f64 = 10.0;
const MIN_HEIGHT_SPAN_M: f64 = 5.0;

// Framing used before any launch, sized to fit the farthest possible target.
const IDLE_RANGE_M: f64 = 55.0;
const IDLE_HEIGHT_M: f64 = 12.0;

/// Pixel geometry of the drawing surface. The launch origin sits `origin_x` pixels from the
/// left edge on a ground line `ground_offset` pixels above the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub ground_offset: f64,
    pub padding: f64,
    pub origin_x: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 420.0,
            ground_offset: 48.0,
            padding: 120.0,
            origin_x: 40.0,
        }
    }
}

impl Viewport {
    pub fn ground_y(&self) -> f64 {
        self.height - self.ground_offset
    }
}

/// Pixels per meter that fit `range_m` by `h_max_m` into the viewport, bounded to [4, 20].
pub fn derive_scale(range_m: f64, h_max_m: f64, viewport: &Viewport) -> f64 {
    let usable_width = viewport.width - viewport.padding;
    let usable_height = viewport.height - viewport.ground_offset - (viewport.padding / 2.0);
    let scale_x = usable_width / range_m.max(MIN_RANGE_SPAN_M);
    let scale_y = usable_height / h_max_m.max(MIN_HEIGHT_SPAN_M);
    scale_x
        .min(scale_y)
        .clamp(MIN_SCALE_PX_PER_M, MAX_SCALE_PX_PER_M)
}

pub fn scale_for(theory: Option<&TheoryResult>, viewport: &Viewport) -> f64 {
    let (range_m, h_max_m) = theory.map_or((IDLE_RANGE_M, IDLE_HEIGHT_M), |t| {
        (t.range_m, t.h_max_m)
    });
    derive_scale(range_m, h_max_m, viewport)
}

pub fn world_to_canvas(point: Point, scale: f64, viewport: &Viewport) -> (f64, f64) {
    let cx = viewport.origin_x + (point.x * scale);
    let cy = viewport.ground_y() - (point.y * scale);
    (cx, cy)
}
