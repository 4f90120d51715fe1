use std::path::Path;

use plotters::prelude::*;

use crate::core::ballistics::Point;
use crate::core::error::PlotError;
use crate::core::target::Target;

pub const PLOT_SIZE_PX: (u32, u32) = (960, 540);

const TRAIL_COLOR: RGBColor = RGBColor(251, 146, 60);
const TARGET_COLOR: RGBColor = RGBColor(5, 150, 105);

fn render_err(err: impl std::fmt::Display) -> PlotError {
    PlotError::Render(err.to_string())
}

fn extent(points: &[Point], target: &Target) -> (f64, f64) {
    let (max_x, max_y) = points
        .iter()
        .fold((target.right_edge(), target.height), |(mx, my), p| {
            (mx.max(p.x), my.max(p.y))
        });
    (max_x.max(1.0) * 1.06, max_y.max(1.0) * 1.10)
}

/// Writes an SVG chart of the theoretical path, the stepped trail and the target block.
pub fn plot_flight(
    path: &Path,
    prediction: &[Point],
    trail: &[Point],
    target: &Target,
) -> Result<(), PlotError> {
    if prediction.is_empty() && trail.is_empty() {
        return Err(PlotError::EmptyPath);
    }

    let all_points: Vec<Point> = prediction.iter().chain(trail).copied().collect();
    let (max_x, max_y) = extent(&all_points, target);

    let root = SVGBackend::new(path, PLOT_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Projectile flight", ("sans-serif", 26))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(target.x, 0.0), (target.right_edge(), target.height)],
            TARGET_COLOR.mix(0.6).filled(),
        )))
        .map_err(render_err)?
        .label("Target")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], TARGET_COLOR.filled()));

    if !prediction.is_empty() {
        chart
            .draw_series(LineSeries::new(prediction.iter().map(|p| (p.x, p.y)), &BLUE))
            .map_err(render_err)?
            .label("Theory")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    }

    if !trail.is_empty() {
        chart
            .draw_series(LineSeries::new(trail.iter().map(|p| (p.x, p.y)), &TRAIL_COLOR))
            .map_err(render_err)?
            .label("Simulated")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &TRAIL_COLOR));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::driver::{AnimationDriver, simulate_flight};
    use crate::core::session::Session;

    #[test]
    fn writes_svg_with_both_paths() {
        let target = Target::new(25.0, 5.0, 6.0);
        let mut session = Session::with_target(11, target);
        session.launch().expect("valid");
        let prediction = session.prediction().to_vec();
        let mut driver = AnimationDriver::new();
        let run = simulate_flight(&mut session, &mut driver, 1.0 / 60.0, 10_000);
        assert!(run.outcome.is_terminal(), "{run:?}");

        let path = std::env::temp_dir().join(format!(
            "projectile_lab-plot-{}.svg",
            std::process::id()
        ));
        plot_flight(&path, &prediction, session.trail(), &target).expect("chart renders");

        let svg = std::fs::read_to_string(&path).expect("chart file exists");
        let _ = std::fs::remove_file(&path);
        assert!(svg.contains("<svg"));
        assert!(svg.matches("<polyline").count() >= 2);
        assert!(svg.contains("Theory"));
        assert!(svg.contains("Simulated"));
        assert!(svg.contains("Target"));
    }

    #[test]
    fn refuses_to_plot_nothing() {
        let err = plot_flight(
            Path::new("unused.svg"),
            &[],
            &[],
            &Target::new(30.0, 5.0, 6.0),
        )
        .expect_err("empty input");
        assert!(matches!(err, PlotError::EmptyPath));
    }

    #[test]
    fn extent_covers_target_and_points_with_padding() {
        let target = Target::new(30.0, 5.0, 6.0);
        let (x, y) = extent(&[Point::new(90.0, 20.0)], &target);
        assert!((x - 90.0 * 1.06).abs() < 1e-9);
        assert!((y - 20.0 * 1.10).abs() < 1e-9);

        let (x, y) = extent(&[Point::ORIGIN], &target);
        assert!((x - 35.0 * 1.06).abs() < 1e-9);
        assert!((y - 6.0 * 1.10).abs() < 1e-9);
    }
}
