//! Constants used throughout assetgen

/// Project configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["assetgen.yaml", "assetgen.yml", "assetgen.json"];

/// Files whose presence marks the root of a Quasar app, in lookup order
pub const PROJECT_MARKERS: &[&str] = &[
    "quasar.config.js",
    "quasar.config.ts",
    "quasar.config.mjs",
    "quasar.config.cjs",
    "quasar.conf.js",
];

/// Presence of this file makes TypeScript the default output
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Manifest read to detect the installed state-management provider
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Name of the template directory shipped next to the executable
pub const TEMPLATES_DIR: &str = "templates";

/// Sub-directory of the template root holding per-format asset templates
pub const APP_TEMPLATES_DIR: &str = "app";

/// Sub-directory of the template root holding store bootstrap trees
pub const STORE_TEMPLATES_DIR: &str = "store";

/// Extension shared by pages, layouts and components
pub const VUE_EXTENSION: &str = ".vue";

/// Router entry, without extension, relative to the project root
pub const ROUTER_ENTRY_STEM: &str = "src/router/routes";

/// Prefix prepended to messages in dry-run mode
pub const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// Asset folders relative to the project root
pub mod folders {
    pub const PAGES: &str = "src/pages";
    pub const LAYOUTS: &str = "src/layouts";
    pub const COMPONENTS: &str = "src/components";
    pub const BOOT: &str = "src/boot";
    pub const SSR_MIDDLEWARES: &str = "src-ssr/middlewares";
    pub const SRC: &str = "src";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const INFO: u8 = 0;
    pub const DEBUG: u8 = 1;
    pub const TRACE: u8 = 2;
}
