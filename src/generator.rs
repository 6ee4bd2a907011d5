//! Runs a validated request against a project.

use crate::asset::{map_name, AssetDescriptor, ResolvedRequest};
use crate::error::Result;
use crate::project::Project;
use crate::store::{ensure_store_ready, StoreProvider};
use crate::template::{GenerationOutcome, Materializer};

/// Generates the assets of one request.
///
/// The store provider is only needed for store requests.
pub struct Generator<'a> {
    project: &'a Project,
    provider: Option<&'a mut dyn StoreProvider>,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    pub fn new(
        project: &'a Project,
        provider: Option<&'a mut dyn StoreProvider>,
        dry_run: bool,
    ) -> Self {
        Self { project, provider, dry_run }
    }

    /// Generates every requested name in order.
    ///
    /// # Returns
    /// * `Result<Vec<GenerationOutcome>>` - One outcome per name. Per-file
    ///   failures are outcomes. A store request without a provider or a failed
    ///   provider install is an error.
    pub fn generate(&mut self, request: &ResolvedRequest) -> Result<Vec<GenerationOutcome>> {
        let descriptor = AssetDescriptor::resolve(
            request.asset_type,
            request.format,
            self.project,
            self.provider.as_deref(),
        )?;
        log::debug!("Resolved {} with format '{}': {descriptor:?}", request.asset_type, request.format);

        if let (true, Some(provider)) =
            (descriptor.requires_install, self.provider.as_deref_mut())
        {
            ensure_store_ready(provider, self.project, request.format, self.dry_run)?;
        }

        let materializer = Materializer::new(self.project.root(), self.dry_run);
        let outcomes = request
            .names
            .iter()
            .map(|name| {
                let mapping =
                    map_name(name, &descriptor, request, self.project, self.provider.as_deref());
                materializer.materialize(&mapping, &descriptor)
            })
            .collect();
        Ok(outcomes)
    }
}
