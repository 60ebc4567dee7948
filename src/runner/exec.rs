//! Entry-point execution boundary
//!
//! This module separates process spawning from loop orchestration. The
//! `ItemExecutor` trait is the runner's only contract with an example: invoke
//! its entry point as an external process and report the exit status. Tests
//! substitute scripted executors; the default implementation spawns the
//! interpreter command configured in the manifest.

use std::io;
use std::process::Command;

use super::WorkItem;

/// Exit classification of one entry-point invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
    /// Whether the child exited with status code 0
    pub success: bool,
    /// Raw exit code, when the platform reports one
    pub code: Option<i32>,
}

/// Run one example's entry point to completion.
///
/// Implementations block until the child terminates. The working directory
/// has already been scoped to the item's directory when this is called, so
/// the entry point is addressed by bare filename.
pub trait ItemExecutor {
    fn execute(&self, item: &WorkItem) -> io::Result<ExecStatus>;
}

/// Spawns the configured interpreter command with the entry filename appended.
///
/// The child inherits stdio: whatever an example prints streams through to
/// the console between the runner's own progress lines.
pub struct ProcessExecutor {
    program: String,
    args: Vec<String>,
}

impl ProcessExecutor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl ItemExecutor for ProcessExecutor {
    fn execute(&self, item: &WorkItem) -> io::Result<ExecStatus> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(item.entry_file_name())
            .status()?;

        Ok(ExecStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}
