use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use projectile_motion::core::analysis::{SummaryStatistics, analyze};
use projectile_motion::core::ballistics::{EARTH_GRAVITY_MPS2, LaunchParameters, generate};
use projectile_motion::error::{ProjectileError, parse_f64};
use projectile_motion::output::animation::{TrajectoryAnimation, render_animation};
use projectile_motion::output::paths::{DEFAULT_OUTPUT_DIR, OutputPaths};
use projectile_motion::output::plot::{plot_title, plot_trajectory};
use projectile_motion::output::table::export_table;

const INVALID_INPUT_WARNING: &str = "⚠️ Please enter valid numeric values for velocity and angle.";

/// Compute, tabulate, plot and animate a projectile launched over level ground.
#[derive(Debug, Parser)]
#[command(version, allow_negative_numbers = true)]
struct Cli {
    /// Initial speed in m/s (prompted for when omitted)
    #[arg(requires = "angle")]
    speed: Option<String>,

    /// Launch angle in degrees
    angle: Option<String>,

    /// Gravitational acceleration in m/s^2
    #[arg(long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,

    /// Directory receiving the CSV, PNG and GIF outputs
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Write into a fresh run-YYYYMMDD-HHMMSS subdirectory
    #[arg(long)]
    timestamped: bool,

    /// Skip the static trajectory plot
    #[arg(long)]
    no_plot: bool,

    /// Skip the animated GIF
    #[arg(long)]
    no_animation: bool,
}

fn read_value<R: BufRead>(
    input: &mut R,
    prompt: &str,
    label: &'static str,
) -> Result<f64, ProjectileError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ProjectileError::InvalidInput {
            label,
            value: String::new(),
        });
    }

    parse_f64(&line, label)
}

fn get_inputs_from_user<R: BufRead>(input: &mut R) -> Result<(f64, f64), ProjectileError> {
    let speed = read_value(input, "Enter initial velocity (m/s): ", "velocity")?;
    let angle = read_value(input, "Enter launch angle (degrees): ", "angle")?;
    Ok((speed, angle))
}

fn get_inputs(cli: &Cli) -> Result<(f64, f64), ProjectileError> {
    match (&cli.speed, &cli.angle) {
        (Some(speed), Some(angle)) => {
            Ok((parse_f64(speed, "velocity")?, parse_f64(angle, "angle")?))
        }
        _ => get_inputs_from_user(&mut io::stdin().lock()),
    }
}

fn format_summary(summary: &SummaryStatistics) -> String {
    summary
        .labeled()
        .iter()
        .map(|(label, value)| format!("{label:<16}{value:>12.6}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn output_paths(cli: &Cli) -> OutputPaths {
    if cli.timestamped {
        OutputPaths::timestamped(&cli.output_dir, &chrono::Local::now())
    } else {
        OutputPaths::new(cli.output_dir.clone())
    }
}

fn run(cli: Cli) -> Result<(), ProjectileError> {
    let (speed, angle) = get_inputs(&cli)?;
    let params = LaunchParameters::new(speed, angle).with_gravity(cli.gravity);
    log::debug!("Launch parameters: {params:?}");

    let series = generate(params);
    let analysis = analyze(&series);

    println!("\nTrajectory Analysis:");
    println!("{}", format_summary(&analysis.summary));

    let paths = output_paths(&cli);
    export_table(&analysis.records, &paths.table())?;

    if !cli.no_plot {
        plot_trajectory(&series, &plot_title(params), &paths.plot())?;
    }

    if !cli.no_animation {
        let animation = TrajectoryAnimation::new(series.positions());
        render_animation(&animation, &paths.animation())?;
    }

    println!("\nOutputs written to {}", paths.dir.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        if err.is_invalid_input() {
            log::debug!("{err}");
            println!("{INVALID_INPUT_WARNING}");
        } else {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;
    use projectile_motion::core::analysis::SummaryStatistics;

    use super::{Cli, format_summary, get_inputs, get_inputs_from_user};

    #[test]
    fn reads_velocity_then_angle() {
        let mut input = Cursor::new("20\n45\n");
        let (speed, angle) = get_inputs_from_user(&mut input).expect("inputs should parse");

        assert_eq!(speed, 20.0);
        assert_eq!(angle, 45.0);
    }

    #[test]
    fn non_numeric_prompt_is_invalid_input() {
        let mut input = Cursor::new("abc\n45\n");
        let err = get_inputs_from_user(&mut input).expect_err("parse should fail");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn eof_at_prompt_is_invalid_input() {
        let mut input = Cursor::new("20\n");
        let err = get_inputs_from_user(&mut input).expect_err("angle is missing");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn positional_arguments_skip_the_prompt() {
        let cli = Cli::parse_from(["projectile_motion", "10", "90"]);
        assert_eq!(get_inputs(&cli).expect("inputs should parse"), (10.0, 90.0));
    }

    #[test]
    fn negative_values_are_positionals_not_flags() {
        let cli = Cli::parse_from(["projectile_motion", "20", "-30"]);
        assert_eq!(get_inputs(&cli).expect("inputs should parse"), (20.0, -30.0));
    }

    #[test]
    fn non_numeric_argument_is_invalid_input() {
        let cli = Cli::parse_from(["projectile_motion", "abc", "45"]);
        assert!(get_inputs(&cli).expect_err("parse should fail").is_invalid_input());
    }

    #[test]
    fn lone_speed_argument_is_rejected() {
        assert!(Cli::try_parse_from(["projectile_motion", "10"]).is_err());
    }

    #[test]
    fn flags_have_sensible_defaults() {
        let cli = Cli::parse_from(["projectile_motion"]);
        assert_eq!(cli.gravity, 9.81);
        assert_eq!(cli.output_dir, std::path::PathBuf::from("data"));
        assert!(!cli.timestamped && !cli.no_plot && !cli.no_animation);
    }

    #[test]
    fn summary_lists_all_four_labels() {
        let text = format_summary(&SummaryStatistics {
            max_height_m: 10.19,
            range_m: 40.77,
            flight_time_s: 2.88,
            impact_speed_mps: 20.0,
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Max Height"));
        assert!(lines[3].starts_with("Impact Velocity"));
        assert!(lines[3].ends_with("20.000000"));
    }
}
