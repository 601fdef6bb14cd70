//! Run reporting: the summary line and the per-run metrics file
//!
//! The metrics file is append-only CSV without a header, one `threads,time`
//! row per run, so runs with different worker counts can be compared later.

use crate::algorithm::jacobi::SolveReport;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default metrics file name
pub const DEFAULT_METRICS_FILE: &str = "results.csv";

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} threads={} iter={} residual={:.6} time={:.6} status={}",
            self.n,
            self.threads,
            self.iterations,
            self.residual,
            self.time_secs(),
            self.status
        )
    }
}

/// Append-only `threads,time` sink
#[derive(Debug, Clone)]
pub struct MetricsSink {
    path: PathBuf,
}

impl MetricsSink {
    /// Sink writing to `path`, created on first append
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this sink appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row for `report`
    pub fn append(&self, report: &SolveReport) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{},{:.6}", report.threads, report.time_secs())?;
        debug!(path = %self.path.display(), threads = report.threads, "metrics appended");
        Ok(())
    }
}

impl Default for MetricsSink {
    fn default() -> Self {
        Self::new(DEFAULT_METRICS_FILE)
    }
}

/// One row of the metrics file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRecord {
    /// Worker count of the run
    pub threads: usize,
    /// Elapsed seconds of the run
    pub time: f64,
}

/// Parse the contents of a metrics file; blank lines are skipped
pub fn parse_metrics(contents: &str) -> Result<Vec<MetricsRecord>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_record(idx + 1, line))
        .collect()
}

fn parse_record(line_no: usize, line: &str) -> Result<MetricsRecord> {
    let (threads, time) = line
        .trim()
        .split_once(',')
        .ok_or_else(|| Error::malformed_metrics(line_no, "expected 'threads,time'"))?;
    let threads = threads
        .trim()
        .parse::<usize>()
        .map_err(|e| Error::malformed_metrics(line_no, format!("threads: {e}")))?;
    let time = time
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::malformed_metrics(line_no, format!("time: {e}")))?;
    if threads == 0 || !time.is_finite() || time < 0.0 {
        return Err(Error::malformed_metrics(
            line_no,
            "threads must be positive and time non-negative",
        ));
    }
    Ok(MetricsRecord { threads, time })
}

/// Read and parse a metrics file
pub fn read_metrics(path: impl AsRef<Path>) -> Result<Vec<MetricsRecord>> {
    let contents = fs::read_to_string(path)?;
    parse_metrics(&contents)
}

/// Speedup of one worker count relative to the single-worker runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedupRow {
    /// Worker count
    pub threads: usize,
    /// Mean elapsed seconds over the runs with this worker count
    pub time: f64,
    /// t(1) / t(threads)
    pub speedup: f64,
    /// Linear speedup, equal to `threads`
    pub ideal: f64,
}

/// Average runs per worker count and compute speedup against one worker
///
/// Rows are sorted by worker count.
pub fn speedup_table(records: &[MetricsRecord]) -> Result<Vec<SpeedupRow>> {
    let mut by_threads: BTreeMap<usize, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_threads.entry(record.threads).or_insert((0.0, 0));
        entry.0 += record.time;
        entry.1 += 1;
    }

    let baseline = match by_threads.get(&1) {
        Some(&(total, count)) => total / count as f64,
        None => return Err(Error::MissingBaseline),
    };

    Ok(by_threads
        .into_iter()
        .map(|(threads, (total, count))| {
            let time = total / count as f64;
            SpeedupRow {
                threads,
                time,
                speedup: baseline / time,
                ideal: threads as f64,
            }
        })
        .collect())
}
