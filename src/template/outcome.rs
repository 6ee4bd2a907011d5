use std::path::{Path, PathBuf};

use crate::constants::DRY_RUN_PREFIX;
use crate::error::Error;
use crate::ext::PathExt;

/// Why a destination was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyExists,
}

/// What happened to a single requested name.
#[derive(Debug)]
pub enum GenerationOutcome {
    Created(PathBuf),
    Skipped(PathBuf, SkipReason),
    Failed(PathBuf, Error),
}

impl GenerationOutcome {
    /// Destination path the outcome is about.
    pub fn path(&self) -> &Path {
        match self {
            GenerationOutcome::Created(path)
            | GenerationOutcome::Skipped(path, _)
            | GenerationOutcome::Failed(path, _) => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, GenerationOutcome::Created(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, GenerationOutcome::Skipped(..))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, GenerationOutcome::Failed(..))
    }

    /// Gets a message describing the outcome.
    ///
    /// # Arguments
    /// * `project_root` - Paths are shown relative to this directory
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, project_root: &Path, dry_run: bool) -> String {
        let prefix = if dry_run { DRY_RUN_PREFIX } else { "" };
        let relative = self.path().display_relative_to(project_root);

        match self {
            GenerationOutcome::Created(_) => format!("{prefix}Generated {relative}"),
            GenerationOutcome::Skipped(_, SkipReason::AlreadyExists) => {
                format!("{prefix}Skipping {relative} (already exists)")
            }
            GenerationOutcome::Failed(_, cause) => {
                format!("{prefix}Failed to generate {relative}: {cause}")
            }
        }
    }
}
