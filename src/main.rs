use clap::{Args, Parser, Subcommand, ValueHint};
use jacobi_solver::prelude::*;
use jacobi_solver::report::{DEFAULT_METRICS_FILE, read_metrics, speedup_table};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Parallel Jacobi solver for random diagonally dominant systems"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a system, solve it and record the run time
    Solve(SolveArgs),

    /// Print speedup per worker count from a metrics file
    Speedup(SpeedupArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// System dimension
    #[arg(default_value_t = 2000, value_parser = clap::value_parser!(u64).range(1..))]
    n: u64,

    /// Maximum number of sweeps
    #[arg(default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    max_iter: u64,

    /// Relative residual tolerance
    #[arg(default_value_t = 1e-8)]
    tol: f64,

    /// Generator seed
    #[arg(default_value_t = 12345)]
    seed: u64,

    /// Worker count, clamped to [1, available workers]
    #[arg(long, short = 't')]
    threads: Option<usize>,

    /// Metrics file to append `threads,time` to
    #[arg(long, default_value = DEFAULT_METRICS_FILE, value_hint = ValueHint::FilePath)]
    metrics: PathBuf,

    /// Do not write the metrics file
    #[arg(long, conflicts_with = "metrics")]
    no_metrics: bool,

    /// Exit with failure if the sweep cap is reached before the tolerance
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct SpeedupArgs {
    /// Metrics file written by `solve`
    #[arg(long, default_value = DEFAULT_METRICS_FILE, value_hint = ValueHint::FilePath)]
    metrics: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn build_client(threads: Option<usize>) -> Result<CpuClient> {
    CpuClient::with_config(ParallelismConfig::new(threads, None))
}

/// Run one solve; `Ok(false)` means `--strict` was set and the cap was hit
fn run_solve(args: SolveArgs) -> Result<bool> {
    let config = SolverConfig::new(
        usize::try_from(args.n).map_err(|e| Error::invalid_argument("n", e.to_string()))?,
        usize::try_from(args.max_iter)
            .map_err(|e| Error::invalid_argument("max_iter", e.to_string()))?,
        args.tol,
        args.seed,
    );
    config.validate()?;

    let client = build_client(args.threads)?;
    let report = solve_random_system(&client, &config)?;
    println!("{report}");

    if !args.no_metrics {
        MetricsSink::new(args.metrics).append(&report)?;
    }

    if args.strict && !report.status.is_converged() {
        error!(
            iterations = report.iterations,
            residual = report.residual,
            "tolerance not reached"
        );
        return Ok(false);
    }
    Ok(true)
}

fn run_speedup(args: SpeedupArgs) -> Result<bool> {
    let records = read_metrics(&args.metrics)?;
    println!("threads,time,speedup,ideal");
    for row in speedup_table(&records)? {
        println!(
            "{},{:.6},{:.3},{:.1}",
            row.threads, row.time, row.speedup, row.ideal
        );
    }
    Ok(true)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Speedup(args) => run_speedup(args),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use tempfile::tempdir;

    fn solve_args(argv: &[&str]) -> SolveArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Command::Solve(args) => args,
            Command::Speedup(_) => panic!("expected the solve subcommand"),
        }
    }

    #[test]
    fn test_solve_defaults() {
        let args = solve_args(&["jacobi-solver", "solve"]);
        assert_eq!(args.n, 2000);
        assert_eq!(args.max_iter, 5000);
        assert_eq!(args.tol, 1e-8);
        assert_eq!(args.seed, 12345);
        assert_eq!(args.threads, None);
        assert_eq!(args.metrics, PathBuf::from(DEFAULT_METRICS_FILE));
        assert!(!args.no_metrics);
        assert!(!args.strict);
    }

    #[test]
    fn test_positional_and_flags() {
        let args = solve_args(&[
            "jacobi-solver",
            "solve",
            "40",
            "7",
            "1e-6",
            "9",
            "-t",
            "3",
            "--strict",
        ]);
        assert_eq!((args.n, args.max_iter, args.seed), (40, 7, 9));
        assert_eq!(args.tol, 1e-6);
        assert_eq!(args.threads, Some(3));
        assert!(args.strict);
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let err = Cli::try_parse_from(["jacobi-solver", "solve", "0"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Cli::try_parse_from(["jacobi-solver", "solve", "10", "0"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_no_metrics_conflicts_with_metrics_path() {
        let err = Cli::try_parse_from([
            "jacobi-solver",
            "solve",
            "--no-metrics",
            "--metrics",
            "other.csv",
        ])
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        assert!(solve_args(&["jacobi-solver", "solve", "--no-metrics"]).no_metrics);
    }

    #[test]
    fn test_zero_threads_is_clamped_to_one() {
        let args = solve_args(&["jacobi-solver", "solve", "-t", "0"]);
        let client = build_client(args.threads).unwrap();
        assert_eq!(client.num_threads(), 1);
    }

    #[test]
    fn test_strict_run_fails_at_cap() {
        let dir = tempdir().unwrap();
        let metrics = dir.path().join("results.csv");
        let metrics_arg = metrics.to_str().unwrap();

        let args = solve_args(&[
            "jacobi-solver", "solve", "20", "1", "1e-12", "1", "-t", "1", "--strict", "--metrics",
            metrics_arg,
        ]);
        assert!(!run_solve(args).unwrap());

        let args = solve_args(&[
            "jacobi-solver", "solve", "20", "1", "1e-12", "1", "-t", "1", "--metrics", metrics_arg,
        ]);
        assert!(run_solve(args).unwrap());

        // Both runs record their timing, strict or not
        let records = read_metrics(&metrics).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.threads == 1));
    }
}
