use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::Level;

use projectile_lab::core::ballistics::{LaunchParameters, Point, TheoryResult};
use projectile_lab::core::driver::{AnimationDriver, simulate_flight};
use projectile_lab::core::plot::plot_flight;
use projectile_lab::core::session::{Session, StepOutcome};
use projectile_lab::core::target::Target;

#[derive(Parser, Debug)]
#[command(
    name = "projectile_lab",
    version,
    about = "Projectile motion theory and headless flight simulation",
    allow_negative_numbers = true
)]
struct Cli {
    /// Launch angle in degrees. Prompted for when omitted.
    angle_deg: Option<f64>,
    /// Launch speed in m/s.
    speed_mps: Option<f64>,
    /// Gravitational acceleration in m/s^2.
    gravity_mps2: Option<f64>,

    /// Fly the shot frame by frame against a target and report the result.
    #[arg(long)]
    simulate: bool,

    /// Left edge of the target in meters (needs width and height too).
    #[arg(long)]
    target_x: Option<f64>,
    #[arg(long)]
    target_width: Option<f64>,
    #[arg(long)]
    target_height: Option<f64>,

    /// Seed for target generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Virtual frame length in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,

    /// Frame budget for --simulate; must be at least 1.
    #[arg(long, default_value_t = 100_000)]
    max_frames: usize,

    /// Launch with the values exactly as given instead of clamping them into
    /// angle 5-85 deg, speed 5-90 m/s, gravity 1-25 m/s^2.
    #[arg(long)]
    raw: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Write an SVG chart; the file name defaults to a timestamp.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct FlightReport {
    outcome: StepOutcome,
    frames: usize,
    target: Target,
    trail_points: usize,
    level: u32,
    success: u32,
    result_text: String,
}

#[derive(Serialize)]
struct Report {
    params: LaunchParameters,
    theory: TheoryResult,
    flight: Option<FlightReport>,
    plot: Option<PathBuf>,
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("could not read input")?;

        if bytes == 0 {
            bail!("input ended unexpectedly (EOF)");
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn resolve_params(cli: &Cli) -> Result<LaunchParameters> {
    match (cli.angle_deg, cli.speed_mps, cli.gravity_mps2) {
        (Some(angle), Some(speed), Some(gravity)) => {
            Ok(LaunchParameters::new(angle, speed, gravity))
        }
        (None, None, None) => Ok(LaunchParameters::new(
            read_f64("Angle (degrees): ")?,
            read_f64("Velocity (m/s): ")?,
            read_f64("Gravity (m/s^2): ")?,
        )),
        _ => bail!("expected all of <angle_deg> <speed_mps> <gravity_mps2>, or none of them"),
    }
}

/// Clamps into the interactive ranges unless `--raw` asks for the values verbatim.
fn apply_bounds(cli: &Cli, requested: LaunchParameters) -> Result<LaunchParameters> {
    if cli.raw {
        return Ok(requested);
    }
    let LaunchParameters {
        angle_deg,
        speed_mps,
        gravity_mps2,
    } = requested;
    if ![angle_deg, speed_mps, gravity_mps2].iter().all(|v| v.is_finite()) {
        bail!("launch parameters must be finite numbers");
    }

    let params = LaunchParameters::clamped(angle_deg, speed_mps, gravity_mps2);
    if params != requested {
        tracing::warn!(?requested, ?params, "parameters clamped into range");
    }
    Ok(params)
}

fn resolve_target(cli: &Cli) -> Result<Option<Target>> {
    match (cli.target_x, cli.target_width, cli.target_height) {
        (Some(x), Some(width), Some(height)) => {
            if width < 0.0 || height < 0.0 {
                bail!("target width and height cannot be negative");
            }
            Ok(Some(Target::new(x, width, height)))
        }
        (None, None, None) => Ok(None),
        _ => bail!("--target-x, --target-width and --target-height go together"),
    }
}

fn build_session(cli: &Cli) -> Result<Session> {
    let session = match (resolve_target(cli)?, cli.seed) {
        (Some(target), seed) => Session::with_target(seed.unwrap_or_default(), target),
        (None, Some(seed)) => Session::with_seed(seed),
        (None, None) => Session::new(),
    };
    Ok(session)
}

fn default_plot_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("trajectory-{stamp}.svg"))
}

fn print_theory(theory: &TheoryResult) {
    println!("\nTime of flight: {:.4} s", theory.total_time_s);
    println!("Horizontal distance: {:.4} m", theory.range_m);
    println!("Maximum height: {:.4} m", theory.h_max_m);
    println!(
        "Initial velocity: vx = {:.4} m/s, vy = {:.4} m/s",
        theory.vx, theory.vy
    );
}

fn describe_point(point: Point) -> String {
    format!("({:.2} m, {:.2} m)", point.x, point.y)
}

fn print_flight(flight: &FlightReport) {
    println!();
    match flight.outcome {
        StepOutcome::Hit(landing) => println!(
            "Hit at {} after {:.2} s",
            describe_point(landing.point),
            landing.elapsed_s
        ),
        StepOutcome::Missed(landing) => println!(
            "Missed: landed at {} after {:.2} s",
            describe_point(landing.point),
            landing.elapsed_s
        ),
        StepOutcome::Flying => println!("Still flying after {} frames", flight.frames),
        StepOutcome::Idle => println!("No flight took place"),
    }
    println!(
        "Target: x = {:.1} m, width = {:.1} m, height = {:.1} m",
        flight.target.x, flight.target.width, flight.target.height
    );
    println!("Level: {} | Hits: {}", flight.level, flight.success);
    println!("{}", flight.result_text);
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.frame_dt.is_finite() || cli.frame_dt <= 0.0 {
        bail!("--frame-dt must be a positive number of seconds");
    }
    if cli.simulate && cli.max_frames == 0 {
        bail!("--max-frames must be at least 1 when simulating");
    }

    let params = apply_bounds(cli, resolve_params(cli)?)?;
    let mut session = build_session(cli)?;
    let theory = *session
        .launch_with(params)
        .with_context(|| format!("cannot launch with {params:?}"))?;

    let prediction = session.prediction().to_vec();
    let target = session.target();

    let flight = if cli.simulate {
        let mut driver = AnimationDriver::new();
        let run = simulate_flight(&mut session, &mut driver, cli.frame_dt, cli.max_frames);
        Some(FlightReport {
            outcome: run.outcome,
            frames: run.frames,
            target,
            trail_points: session.trail().len(),
            level: session.level(),
            success: session.success(),
            result_text: session.result_text().to_string(),
        })
    } else {
        None
    };

    let plot = match &cli.plot {
        Some(path) => {
            let path = path.clone().unwrap_or_else(default_plot_path);
            plot_flight(&path, &prediction, session.trail(), &target)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "chart written");
            Some(path)
        }
        None => None,
    };

    let report = Report {
        params,
        theory,
        flight,
        plot,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_theory(&report.theory);
    if let Some(flight) = &report.flight {
        print_flight(flight);
    }
    if let Some(path) = &report.plot {
        println!("\nChart saved to {}", path.display());
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
