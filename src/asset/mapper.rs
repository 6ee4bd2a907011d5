use std::path::{Component, Path, PathBuf};

use crate::asset::descriptor::AssetDescriptor;
use crate::asset::kind::AssetType;
use crate::asset::request::ResolvedRequest;
use crate::constants::APP_TEMPLATES_DIR;
use crate::project::Project;
use crate::store::StoreProvider;

/// Template and destination of a single requested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMapping {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Appends the descriptor's extension unless `name` already carries it.
pub fn normalize_name(name: &str, descriptor: &AssetDescriptor) -> String {
    match &descriptor.extension {
        Some(extension) if !name.ends_with(extension.as_str()) => format!("{name}{extension}"),
        _ => name.to_string(),
    }
}

/// Keeps only the plain segments of `name`, so the result stays below the
/// folder it is joined to. Roots, drive prefixes, `.` and `..` are dropped.
fn relative_name(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Computes where `name` comes from and where it goes. Does not touch the disk.
///
/// Templates live at `<templates>/app/<format>/[<provider>/]<type><extension>`,
/// the provider segment only being present for stores.
pub fn map_name(
    name: &str,
    descriptor: &AssetDescriptor,
    request: &ResolvedRequest,
    project: &Project,
    provider: Option<&dyn StoreProvider>,
) -> AssetMapping {
    let destination = project
        .resolve(&descriptor.folder)
        .join(relative_name(&normalize_name(name, descriptor)));

    let mut source =
        project.templates_root().join(APP_TEMPLATES_DIR).join(request.format.as_str());
    if let (AssetType::Store, Some(provider)) = (request.asset_type, provider) {
        source.push(provider.name());
    }
    let extension = descriptor.extension.as_deref().unwrap_or_default();
    source.push(format!("{}{extension}", request.asset_type));

    AssetMapping { source, destination }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::kind::TemplateFormat;
    use crate::config::ProjectConfig;
    use crate::error::Result;

    struct Vuex;

    impl StoreProvider for Vuex {
        fn name(&self) -> &str {
            "vuex"
        }

        fn path_key(&self) -> &str {
            "store"
        }

        fn is_installed(&self) -> bool {
            true
        }

        fn install(&mut self) -> Result<()> {
            Ok(())
        }

        fn modules_are_directories(&self) -> bool {
            true
        }
    }

    fn project() -> Project {
        Project::new(
            PathBuf::from("/app"),
            "quasar.config.js",
            ProjectConfig { typescript: Some(false), ..Default::default() },
            PathBuf::from("/tpl"),
        )
    }

    fn descriptor(folder: &str, extension: Option<&str>) -> AssetDescriptor {
        AssetDescriptor {
            folder: folder.to_string(),
            extension: extension.map(str::to_string),
            reference: None,
            requires_install: false,
        }
    }

    fn request(asset_type: AssetType, format: TemplateFormat) -> ResolvedRequest {
        ResolvedRequest { asset_type, format, names: vec!["x".into()] }
    }

    #[test]
    fn extension_is_not_duplicated() {
        let page = descriptor("src/pages", Some(".vue"));
        assert_eq!(normalize_name("Foo.vue", &page), "Foo.vue");
        assert_eq!(normalize_name("Foo", &page), "Foo.vue");
    }

    #[test]
    fn other_extensions_still_get_the_required_one() {
        let boot = descriptor("src/boot", Some(".ts"));
        assert_eq!(normalize_name("axios.js", &boot), "axios.js.ts");
    }

    #[test]
    fn names_are_kept_without_required_extension() {
        let module = descriptor("src/store", None);
        assert_eq!(normalize_name("todos", &module), "todos");
    }

    #[test]
    fn maps_page_template_and_destination() {
        let mapping = map_name(
            "MyNewPage",
            &descriptor("src/pages", Some(".vue")),
            &request(AssetType::Page, TemplateFormat::Default),
            &project(),
            Some(&Vuex),
        );
        assert_eq!(mapping.source, Path::new("/tpl/app/default/page.vue"));
        assert_eq!(mapping.destination, Path::new("/app/src/pages/MyNewPage.vue"));
    }

    #[test]
    fn nested_names_keep_their_sub_path() {
        let mapping = map_name(
            "admin/Users",
            &descriptor("src/components", Some(".vue")),
            &request(AssetType::Component, TemplateFormat::TsCompositionSetup),
            &project(),
            Some(&Vuex),
        );
        assert_eq!(mapping.source, Path::new("/tpl/app/ts-composition-setup/component.vue"));
        assert_eq!(mapping.destination, Path::new("/app/src/components/admin/Users.vue"));
    }

    #[test]
    fn store_templates_are_scoped_by_provider() {
        let mapping = map_name(
            "todos",
            &descriptor("src/store", None),
            &request(AssetType::Store, TemplateFormat::Ts),
            &project(),
            Some(&Vuex),
        );
        assert_eq!(mapping.source, Path::new("/tpl/app/ts/vuex/store"));
        assert_eq!(mapping.destination, Path::new("/app/src/store/todos"));
    }

    #[test]
    fn middleware_template_uses_type_name() {
        let mapping = map_name(
            "render",
            &descriptor("src-ssr/middlewares", Some(".js")),
            &request(AssetType::SsrMiddleware, TemplateFormat::Default),
            &project(),
            Some(&Vuex),
        );
        assert_eq!(mapping.source, Path::new("/tpl/app/default/ssrmiddleware.js"));
        assert_eq!(mapping.destination, Path::new("/app/src-ssr/middlewares/render.js"));
    }

    #[test]
    fn names_cannot_leave_the_asset_folder() {
        let page = descriptor("src/pages", Some(".vue"));
        let request = request(AssetType::Page, TemplateFormat::Default);

        let absolute = map_name("/elsewhere/Evil", &page, &request, &project(), None);
        assert_eq!(absolute.destination, Path::new("/app/src/pages/elsewhere/Evil.vue"));

        let parent = map_name("../../../Evil", &page, &request, &project(), None);
        assert_eq!(parent.destination, Path::new("/app/src/pages/Evil.vue"));

        let dotted = map_name("./admin/./Users", &page, &request, &project(), None);
        assert_eq!(dotted.destination, Path::new("/app/src/pages/admin/Users.vue"));
    }
}
