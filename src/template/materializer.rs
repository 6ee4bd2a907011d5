use std::path::Path;

use crate::asset::{AssetDescriptor, AssetMapping};
use crate::error::{Error, Result};
use crate::ioutils::{copy_path, create_dir_all};

use super::outcome::{GenerationOutcome, SkipReason};

/// Copies templates to their destinations without ever overwriting.
pub struct Materializer<'a> {
    project_root: &'a Path,
    dry_run: bool,
}

impl<'a> Materializer<'a> {
    pub fn new(project_root: &'a Path, dry_run: bool) -> Self {
        Self { project_root, dry_run }
    }

    /// Materializes one mapping and logs the outcome.
    ///
    /// An existing destination is skipped. Copy errors are captured in the
    /// returned outcome so the caller can go on with the next name.
    pub fn materialize(
        &self,
        mapping: &AssetMapping,
        descriptor: &AssetDescriptor,
    ) -> GenerationOutcome {
        log::debug!(
            "Materializing '{}' -> '{}'",
            mapping.source.display(),
            mapping.destination.display()
        );

        let outcome = if mapping.destination.exists() {
            GenerationOutcome::Skipped(mapping.destination.clone(), SkipReason::AlreadyExists)
        } else {
            match self.copy(mapping) {
                Ok(()) => GenerationOutcome::Created(mapping.destination.clone()),
                Err(e) => GenerationOutcome::Failed(mapping.destination.clone(), e),
            }
        };

        let message = outcome.get_message(self.project_root, self.dry_run);
        match &outcome {
            GenerationOutcome::Created(_) => {
                log::info!("{message}");
                if let Some(reference) = &descriptor.reference {
                    log::info!("Make sure to reference it in {reference}");
                }
            }
            GenerationOutcome::Skipped(..) => log::warn!("{message}"),
            GenerationOutcome::Failed(..) => log::error!("{message}"),
        }
        outcome
    }

    fn copy(&self, mapping: &AssetMapping) -> Result<()> {
        if !mapping.source.exists() {
            return Err(Error::TemplateNotFound {
                path: mapping.source.display().to_string(),
            });
        }

        if self.dry_run {
            return Ok(());
        }

        if let Some(parent) = mapping.destination.parent() {
            create_dir_all(parent)?;
        }
        copy_path(&mapping.source, &mapping.destination)
    }
}
