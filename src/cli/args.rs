use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const AFTER_HELP: &str = r#"Asset types:
  page (p)        src/pages/<name>.vue
  layout (l)      src/layouts/<name>.vue
  component (c)   src/components/<name>.vue
  store (s)       src/<store folder>/<name>, installs the store provider when missing
  boot (b)        src/boot/<name>.js|ts
  ssrmiddleware   src-ssr/middlewares/<name>.js|ts

Formats:
  default, ts, ts-options, ts-class, ts-composition, ts-composition-setup
  Defaults to ts-composition in TypeScript projects and to default otherwise.
  store, boot and ssrmiddleware only distinguish default from ts.

Examples:
  assetgen p Profile Settings
  assetgen s cart --format ts
  assetgen b axios"#;

/// CLI arguments for assetgen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Asset type or its single-letter alias.
    #[arg(value_name = "TYPE")]
    pub asset_type: String,

    /// Names of the assets to generate.
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Template format.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Directory to start looking for the project from (defaults to the current one).
    #[arg(short, long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Template root directory.
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` keep clap's behaviour and exit with status 0.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        kind => {
            if kind != ErrorKind::MissingRequiredArgument {
                let _ = e.print();
            }
            print_usage();
            std::process::exit(exit_codes::FAILURE);
        }
    })
}

/// Prints the usage text to stdout.
pub fn print_usage() {
    let mut command = Args::command().help_template(HELP_TEMPLATE);
    if let Err(print_err) = command.print_help() {
        eprintln!("Failed to display help information: {print_err}");
    } else {
        println!();
    }
}

/// Map `-v` counts to the appropriate log level.
///
/// Info is the floor since generated files are reported at that level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
