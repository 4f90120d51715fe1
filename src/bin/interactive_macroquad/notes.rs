// Plain ASCII so the built-in fallback font can render every glyph.
pub(crate) const FORMULAS: [&str; 4] = [
    "Range: R = v0^2 sin(2 theta) / g",
    "Kinematics: x = v0x t, y = v0y t - g t^2 / 2",
    "Newton: F = m a -> a = g",
    "Vector: v = vx i + vy j",
];

pub(crate) const LEGEND: &str =
    "Blue line = theory | Orange line = actual | Green block = target | Orange circle = projectile";

pub(crate) const PHYSICS_TIPS: [&str; 3] = [
    "A 45 deg launch gives the longest range on flat ground under constant gravity.",
    "Peak height depends only on the vertical launch speed and gravity.",
    "On flat ground the landing speed equals the launch speed.",
];

pub(crate) const TIP_PERIOD_S: f64 = 8.0;

/// Tip shown at `time_s`, rotating every [`TIP_PERIOD_S`].
pub(crate) fn tip_at(time_s: f64) -> &'static str {
    let slot = (time_s.max(0.0) / TIP_PERIOD_S) as usize;
    PHYSICS_TIPS[slot % PHYSICS_TIPS.len()]
}
