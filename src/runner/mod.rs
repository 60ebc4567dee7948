//! Sequential suite execution
//!
//! This module owns the execution-and-reporting loop at the core of
//! `suiterun`: iterate the configured work items in order, gate each on the
//! existence of its entry point, run the entry point as a blocking child
//! process with the working directory scoped to the item's directory, and
//! classify every attempt by exit status.
//!
//! ## Modules
//!
//! - `exec` - Entry-point execution boundary (`ItemExecutor`)
//! - `reporter` - Progress and summary rendering (`Reporter`)
//! - `workdir` - Scoped working-directory guard
//!
//! ## Design
//!
//! The loop never short-circuits: a failed item is recorded and the next one
//! still runs. Tallies are not accumulated in shared counters; the ordered
//! `RunRecord` sequence is folded into one immutable `RunSummary` at the end,
//! which makes the aggregation independently testable. Only environment
//! failures (working-directory resolve/enter/restore) abort the run.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod exec;
pub mod reporter;
pub mod workdir;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub use exec::{ExecStatus, ItemExecutor, ProcessExecutor};
pub use reporter::{ConsoleReporter, Reporter};
pub use workdir::{RunnerError, WorkDirGuard};

// ============================================================================
// Data model
// ============================================================================

/// One named unit of batch work: a directory under the suite root holding a
/// fixed entry-point file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Identifier, used verbatim as the directory name
    pub name: String,
    /// Working directory for the duration of the invocation
    pub dir: PathBuf,
    /// Full entry-point path; its existence gates whether the item runs
    pub entry_point: PathBuf,
}

impl WorkItem {
    /// Resolve a configured name into its directory and entry-point paths.
    pub fn resolve(root: &Path, name: &str, entry_file: &str) -> Self {
        let dir = root.join(name);
        let entry_point = dir.join(entry_file);
        Self {
            name: name.to_string(),
            dir,
            entry_point,
        }
    }

    /// Entry-point filename relative to the item directory.
    pub fn entry_file_name(&self) -> &OsStr {
        self.entry_point
            .file_name()
            .unwrap_or(self.entry_point.as_os_str())
    }
}

/// Terminal classification of one suite item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Entry point absent; the item was never executed
    Skipped,
    /// Child exited with status code 0
    Succeeded(Duration),
    /// Nonzero exit, or the child could not be started at all. The optional
    /// detail (exit status text or launch error) is for live progress output
    /// only; the summary keeps just the identifier.
    Failed(Duration, Option<String>),
}

impl ItemOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ItemOutcome::Failed(..))
    }
}

/// Outcome of one item, recorded in sequence order and never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub name: String,
    pub outcome: ItemOutcome,
}

/// End-of-run aggregate derived from the ordered record sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSummary {
    /// Items whose entry point existed and which were executed
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Items whose entry point was absent; excluded from `attempted`
    pub skipped: usize,
    /// Failed identifiers in execution order
    pub failures: Vec<String>,
    /// Wall-clock duration of the whole run
    pub duration: Duration,
}

impl RunSummary {
    /// Fold the ordered records into aggregate counters.
    ///
    /// Invariant: `attempted == succeeded + failed`; skipped items count
    /// toward none of the three.
    pub fn from_records(records: &[RunRecord], duration: Duration) -> Self {
        records.iter().fold(
            Self {
                duration,
                ..Self::default()
            },
            |mut summary, record| {
                match &record.outcome {
                    ItemOutcome::Skipped => summary.skipped += 1,
                    ItemOutcome::Succeeded(_) => {
                        summary.attempted += 1;
                        summary.succeeded += 1;
                    }
                    ItemOutcome::Failed(..) => {
                        summary.attempted += 1;
                        summary.failed += 1;
                        summary.failures.push(record.name.clone());
                    }
                }
                summary
            },
        )
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

// ============================================================================
// Execution loop
// ============================================================================

/// Run every item in sequence order and fold the outcomes into a summary.
///
/// Items whose entry point does not exist are skipped with a notice and do
/// not count as attempted. Attempted items run one at a time, each inside a
/// working-directory guard that restores the caller's directory on every
/// exit path. Per-item failures (nonzero exit, failed launch) are recorded
/// and never interrupt the loop.
///
/// ## Errors
///
/// Returns `RunnerError` only on environment failure: the working directory
/// cannot be resolved, entered, or restored. No summary is produced in that
/// case.
pub fn run(
    items: &[WorkItem],
    executor: &dyn ItemExecutor,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, RunnerError> {
    let start_time = Instant::now();
    reporter.on_collection_complete(items.len());

    let mut records: Vec<RunRecord> = Vec::with_capacity(items.len());
    let mut attempted = 0usize;

    for item in items {
        if !item.entry_point.is_file() {
            reporter.on_item_skipped(item);
            records.push(RunRecord {
                name: item.name.clone(),
                outcome: ItemOutcome::Skipped,
            });
            continue;
        }

        attempted += 1;
        reporter.on_item_start(attempted, item);

        let guard = WorkDirGuard::enter(&item.dir)?;
        let item_start = Instant::now();
        let result = executor.execute(item);
        let elapsed = item_start.elapsed();
        guard.release()?;

        let outcome = match result {
            Ok(status) if status.success => ItemOutcome::Succeeded(elapsed),
            Ok(status) => {
                let detail = match status.code {
                    Some(code) => format!("exit status: {}", code),
                    None => "terminated by signal".to_string(),
                };
                ItemOutcome::Failed(elapsed, Some(detail))
            }
            Err(e) => ItemOutcome::Failed(elapsed, Some(format!("failed to launch: {}", e))),
        };

        reporter.on_item_complete(item, &outcome);
        records.push(RunRecord {
            name: item.name.clone(),
            outcome,
        });
    }

    let summary = RunSummary::from_records(&records, start_time.elapsed());
    reporter.on_run_complete(&summary);
    Ok(summary)
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard};

    /// The process working directory is global to the test binary, so every
    /// test that changes it serializes on this lock.
    static CWD_LOCK: Mutex<()> = Mutex::new(());

    pub fn cwd_lock() -> MutexGuard<'static, ()> {
        CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Tests
// ============================================================================
