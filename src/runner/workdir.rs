//! Scoped working-directory changes
//!
//! Every example runs with the process working directory set to its own
//! directory, and the change must not leak to sibling examples or to the
//! caller. `WorkDirGuard` owns that change: it records the previous directory
//! on entry and restores it before the next example runs. Release is explicit
//! and fallible (a failed restore aborts the whole run); `Drop` restores as a
//! backstop on unwind paths.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort the whole run.
///
/// These are environment-level failures, never per-item outcomes: a child
/// process exiting nonzero is recorded as a `Failed` outcome, not raised as
/// a `RunnerError`.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("cannot determine the current working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("cannot enter working directory '{dir}': {source}")]
    EnterDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot restore working directory '{dir}': {source}")]
    RestoreDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scoped change of the process working directory.
///
/// The working directory is the one piece of shared mutable state between
/// items, so the guard must be released (or dropped) before the next item
/// is examined.
pub struct WorkDirGuard {
    previous: Option<PathBuf>,
}

impl WorkDirGuard {
    /// Change the working directory to `dir`, remembering the current one.
    pub fn enter(dir: &Path) -> Result<Self, RunnerError> {
        let previous = env::current_dir().map_err(RunnerError::CurrentDir)?;
        env::set_current_dir(dir).map_err(|source| RunnerError::EnterDir {
            dir: dir.to_path_buf(),
            source,
        })?;
        tracing::debug!("entered working directory {}", dir.display());
        Ok(Self {
            previous: Some(previous),
        })
    }

    /// Restore the previous working directory.
    ///
    /// A failed restore leaves the process in an unknown directory, so
    /// callers treat the error as fatal for the remainder of the run.
    pub fn release(mut self) -> Result<(), RunnerError> {
        let Some(previous) = self.previous.take() else {
            return Ok(());
        };
        env::set_current_dir(&previous).map_err(|source| RunnerError::RestoreDir {
            dir: previous,
            source,
        })
    }
}

impl Drop for WorkDirGuard {
    fn drop(&mut self) {
        // Backstop for unwind paths; `release()` is the normal exit.
        if let Some(previous) = self.previous.take() {
            if let Err(e) = env::set_current_dir(&previous) {
                tracing::error!(
                    "failed to restore working directory {}: {}",
                    previous.display(),
                    e
                );
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::runner::test_support::cwd_lock;

    #[test]
    fn release_restores_previous_directory() {
        let _cwd = cwd_lock();
        let target = tempfile::tempdir().unwrap();
        let before = env::current_dir().unwrap();

        let guard = WorkDirGuard::enter(target.path()).unwrap();
        assert_eq!(
            env::current_dir().unwrap(),
            target.path().canonicalize().unwrap()
        );
        guard.release().unwrap();

        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn drop_restores_previous_directory() {
        let _cwd = cwd_lock();
        let target = tempfile::tempdir().unwrap();
        let before = env::current_dir().unwrap();

        {
            let _guard = WorkDirGuard::enter(target.path()).unwrap();
            assert_ne!(env::current_dir().unwrap(), before);
        }

        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn entering_a_missing_directory_fails() {
        let _cwd = cwd_lock();
        let before = env::current_dir().unwrap();

        let result = WorkDirGuard::enter(Path::new("definitely/not/a/real/dir"));
        assert!(matches!(result, Err(RunnerError::EnterDir { .. })));

        assert_eq!(env::current_dir().unwrap(), before);
    }
}
