//! Suite manifest loading
//!
//! The suite is static configuration, not invocation input: a JSON manifest
//! (`suite.json` by default) names the ordered examples and how to invoke
//! them. Every name maps verbatim to a directory under the manifest root and
//! a fixed entry-point filename inside it.
//!
//! ```json
//! {
//!   "root": "suite",
//!   "entry_point": "indicators.py",
//!   "command": ["uv", "run"],
//!   "examples": ["italian_help_desk", "production"]
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::runner::WorkItem;

/// Default manifest filename, looked up in the current directory.
pub const DEFAULT_MANIFEST: &str = "suite.json";

/// Errors that occur while loading the suite configuration.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("manifest '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest: {0}")]
    Invalid(String),
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_entry_point() -> String {
    "run.sh".to_string()
}

fn default_command() -> Vec<String> {
    vec!["sh".to_string()]
}

/// Static suite configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory the example directories live under
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Entry-point filename looked up inside every example directory
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    /// Interpreter command (program plus leading arguments) the entry-point
    /// filename is appended to
    #[serde(default = "default_command")]
    pub command: Vec<String>,
    /// Ordered example names; duplicates are permitted and run independently
    pub examples: Vec<String>,
}

impl Manifest {
    /// Load and validate a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate field contents beyond what deserialization enforces.
    ///
    /// Example names and the entry-point filename become path segments, so
    /// they must be plain names without separators or parent components.
    pub fn validate(&self) -> Result<(), ManifestError> {
        match self.command.first() {
            None => {
                return Err(ManifestError::Invalid(
                    "command must name an interpreter".to_string(),
                ));
            }
            Some(program) if program.is_empty() => {
                return Err(ManifestError::Invalid(
                    "command interpreter must not be empty".to_string(),
                ));
            }
            Some(_) => {}
        }

        if !is_plain_name(&self.entry_point) {
            return Err(ManifestError::Invalid(format!(
                "entry point '{}' must be a bare filename",
                self.entry_point
            )));
        }

        for name in &self.examples {
            if !is_plain_name(name) {
                return Err(ManifestError::Invalid(format!(
                    "example name '{}' must be a plain directory name",
                    name
                )));
            }
        }

        if self.root.is_absolute() {
            tracing::warn!(
                "manifest root is an absolute path: {}. Consider using a relative path.",
                self.root.display()
            );
        }

        Ok(())
    }

    /// Resolve the configured names into work items, in manifest order.
    pub fn resolve_items(&self) -> Vec<WorkItem> {
        self.examples
            .iter()
            .map(|name| WorkItem::resolve(&self.root, name, &self.entry_point))
            .collect()
    }
}

/// A single normal path component: no separators, no `.`/`..`, not empty.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
