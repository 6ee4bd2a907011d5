use crate::{
    asset::{AssetType, ResolvedRequest, TemplateFormat},
    cli::Args,
    error::Result,
    generator::Generator,
    project::Project,
    store::{PackageStoreProvider, StoreProvider},
    template::GenerationOutcome,
};

/// Main CLI runner that orchestrates a generation run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<Vec<GenerationOutcome>> {
        // Type and explicit format errors win over project discovery errors
        self.check_raw_values()?;

        let project = self.discover_project()?;

        let request = ResolvedRequest::validate(
            &self.args.asset_type,
            self.args.format.as_deref(),
            self.args.names.clone(),
            project.is_typescript(),
        )?;

        // package.json is only read for stores
        let mut provider = match request.asset_type {
            AssetType::Store => Some(PackageStoreProvider::from_project(&project)?),
            _ => None,
        };
        let provider = provider.as_mut().map(|p| p as &mut dyn StoreProvider);
        let outcomes = Generator::new(&project, provider, self.args.dry_run).generate(&request)?;

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        log::debug!(
            "Finished {} {}: {} created, {} skipped, {failed} failed",
            outcomes.len(),
            request.asset_type,
            outcomes.iter().filter(|o| o.is_created()).count(),
            outcomes.iter().filter(|o| o.is_skipped()).count(),
        );
        Ok(outcomes)
    }

    fn check_raw_values(&self) -> Result<()> {
        self.args.asset_type.parse::<AssetType>()?;
        if let Some(format) = &self.args.format {
            format.parse::<TemplateFormat>()?;
        }
        Ok(())
    }

    fn discover_project(&self) -> Result<Project> {
        let start = match &self.args.project {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        Project::discover(start, self.args.templates.clone())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Vec<GenerationOutcome>> {
    let runner = Runner::new(args);
    runner.run()
}
