use crate::core::ballistics::{Point, TheoryResult, position_at_time};

pub const PREDICTION_SAMPLES: usize = 60;

/// Evenly spaced points over `[0, total_time]`, stopping before the first one below ground.
///
/// `samples` is the number of intervals, so a full arc yields `samples + 1` points.
pub fn prediction_points(
    theory: &TheoryResult,
    gravity_mps2: f64,
    samples: usize,
) -> impl Iterator<Item = Point> + '_ {
    let sample_count = samples.max(1);
    (0..=sample_count)
        .map(move |i| {
            let t = (i as f64 / sample_count as f64) * theory.total_time_s;
            position_at_time(theory.initial_velocity, gravity_mps2, t)
        })
        .take_while(|point| point.y >= 0.0)
}

pub fn build_prediction(theory: &TheoryResult, gravity_mps2: f64, samples: usize) -> Vec<Point> {
    prediction_points(theory, gravity_mps2, samples).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::{LaunchParameters, compute_theory};

    fn theory(angle_deg: f64, speed_mps: f64, gravity_mps2: f64) -> TheoryResult {
        compute_theory(LaunchParameters::new(angle_deg, speed_mps, gravity_mps2))
            .expect("valid parameters")
    }

    #[test]
    fn starts_at_origin_and_never_dips_below_ground() {
        let theory = theory(45.0, 30.0, 9.8);
        let points = build_prediction(&theory, 9.8, PREDICTION_SAMPLES);

        assert_eq!(points.first(), Some(&Point::ORIGIN));
        assert!(points.len() <= PREDICTION_SAMPLES + 1);
        assert!(points.len() >= PREDICTION_SAMPLES);
        assert!(points.iter().all(|p| p.y >= 0.0));
        assert!(points.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn stronger_gravity_than_theory_truncates_the_path() {
        // Sampling the 9.8 arc under 19.6 sends it underground halfway through.
        let theory = theory(45.0, 30.0, 9.8);
        let points = build_prediction(&theory, 19.6, PREDICTION_SAMPLES);

        let half = PREDICTION_SAMPLES / 2;
        assert!((half..=half + 1).contains(&points.len()), "len={}", points.len());
        assert!(points.iter().all(|p| p.y >= 0.0));
    }

    #[test]
    fn repeated_builds_are_identical() {
        let theory = theory(30.0, 50.0, 3.7);
        let first = build_prediction(&theory, 3.7, PREDICTION_SAMPLES);
        let second = build_prediction(&theory, 3.7, PREDICTION_SAMPLES);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_samples_still_yields_endpoints() {
        let theory = theory(60.0, 20.0, 9.8);
        let points: Vec<Point> = prediction_points(&theory, 9.8, 0).collect();
        assert_eq!(points.first(), Some(&Point::ORIGIN));
        assert!(points.len() <= 2);
    }
}
