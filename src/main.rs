use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use parabolic_target::core::ballistics::{LaunchParameters, Trajectory};
use parabolic_target::core::error::Error;
use parabolic_target::core::proximity::{TargetQuery, evaluate_target};
use parabolic_target::form::{LaunchForm, input_hint, parse_f64};
use parabolic_target::plot;
use parabolic_target::report::SimulationReport;

#[derive(Parser, Debug)]
#[command(name = "parabolic_target")]
#[command(about = "Projectile trajectory calculator with target hit testing")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Initial speed (m/s); prompted for when omitted
    #[arg(short, long)]
    speed: Option<f64>,

    /// Launch angle (degrees, 0-90); prompted for when omitted
    #[arg(short, long)]
    angle: Option<f64>,

    /// Initial height (m); prompted for when omitted
    #[arg(long)]
    height: Option<f64>,

    /// Target distance (m)
    #[arg(short = 'x', long)]
    target_x: Option<f64>,

    /// Target height (m)
    #[arg(short = 'y', long)]
    target_y: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Include the sampled path in JSON output
    #[arg(long)]
    samples: bool,

    /// Save the chart (.png or .svg); a timestamped PNG name is used when no path is given
    #[arg(long, value_name = "PATH")]
    save: Option<Option<PathBuf>>,

    /// More logging (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("Could not read input")?;
    if bytes == 0 {
        bail!("Input ended unexpectedly (EOF).");
    }
    Ok(line.trim().to_string())
}

fn read_f64(prompt: &str, label: &str) -> Result<f64> {
    loop {
        match parse_f64(&read_line(prompt)?, label) {
            Ok(v) => return Ok(v),
            Err(msg) => eprintln!("{msg}"),
        }
    }
}

fn form_from_user() -> Result<LaunchForm> {
    Ok(LaunchForm {
        speed: read_line("Initial Speed (m/s): ")?,
        angle: read_line("Launch Angle (deg): ")?,
        height: read_line("Initial Height (m): ")?,
        target_x: read_line("Target X (m, blank to skip): ")?,
        target_y: read_line("Target Y (m, blank to skip): ")?,
    })
}

fn launch_from_args(args: &Args) -> Result<LaunchParameters> {
    let speed_mps = match args.speed {
        Some(v) => v,
        None => read_f64("Initial Speed (m/s): ", "speed")?,
    };
    let angle_deg = match args.angle {
        Some(v) => v,
        None => read_f64("Launch Angle (deg): ", "angle")?,
    };
    let height_m = match args.height {
        Some(v) => v,
        None => read_f64("Initial Height (m): ", "height")?,
    };
    LaunchParameters::new(speed_mps, angle_deg, height_m).map_err(with_hint)
}

fn with_hint(err: Error) -> anyhow::Error {
    let hint = input_hint(&err);
    anyhow!(err).context(hint)
}

fn collect_inputs(args: &Args) -> Result<(LaunchParameters, TargetQuery)> {
    let nothing_given = args.speed.is_none()
        && args.angle.is_none()
        && args.height.is_none()
        && args.target_x.is_none()
        && args.target_y.is_none();
    if nothing_given {
        return form_from_user()?.parse().map_err(with_hint);
    }

    let params = launch_from_args(args)?;
    let target = TargetQuery::from_coordinates(args.target_x, args.target_y).map_err(with_hint)?;
    Ok((params, target))
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    debug!(?args, "parsed arguments");

    let (params, query) = collect_inputs(&args)?;
    let trajectory = Trajectory::new(params).map_err(with_hint)?;
    let mut report = SimulationReport::new(&trajectory, evaluate_target(&trajectory, query));
    if args.samples {
        report = report.with_path(&trajectory);
    }

    match args.format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(save) = &args.save {
        let path = save
            .clone()
            .unwrap_or_else(|| PathBuf::from(plot::default_file_name(&Local::now())));
        plot::render_to_file(&path, &trajectory, &report.target)
            .with_context(|| format!("Failed to save graph to {}", path.display()))?;
        if args.format == OutputFormat::Text {
            println!("Graph saved to: {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{Args, OutputFormat, collect_inputs};
    use parabolic_target::core::proximity::TargetQuery;

    #[test]
    fn parses_full_command_line() {
        let args = Args::try_parse_from([
            "parabolic_target",
            "--speed",
            "30",
            "--angle",
            "45",
            "--height",
            "0",
            "-x",
            "60",
            "-y",
            "5",
            "--format",
            "json",
        ])
        .expect("arguments should parse");

        assert_eq!(args.format, OutputFormat::Json);
        let (params, target) = collect_inputs(&args).expect("inputs are valid");
        assert_eq!(params.speed_mps, 30.0);
        assert_eq!(target, TargetQuery::Both { x: 60.0, y: 5.0 });
    }

    #[test]
    fn save_flag_takes_optional_path() {
        let bare = Args::try_parse_from(["parabolic_target", "--speed", "1", "--save"])
            .expect("arguments should parse");
        assert_eq!(bare.save, Some(None));

        let named =
            Args::try_parse_from(["parabolic_target", "--speed", "1", "--save", "out.svg"])
                .expect("arguments should parse");
        assert_eq!(named.save, Some(Some(PathBuf::from("out.svg"))));
    }

    #[test]
    fn invalid_angle_carries_input_hint() {
        let args = Args::try_parse_from([
            "parabolic_target",
            "--speed",
            "20",
            "--angle",
            "95",
            "--height",
            "0",
        ])
        .expect("arguments should parse");

        let err = collect_inputs(&args).expect_err("angle is out of range");
        assert!(format!("{err:#}").starts_with("Please enter valid numbers"));
    }

    #[test]
    fn negative_target_is_rejected() {
        let args = Args::try_parse_from([
            "parabolic_target",
            "--speed",
            "20",
            "--angle",
            "45",
            "--height",
            "0",
            "--target-x",
            "-5",
        ])
        .expect("arguments should parse");

        let err = collect_inputs(&args).expect_err("negative target");
        assert!(format!("{err:#}").starts_with("Please enter valid target"));
    }
}
