use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    /// Wrong argument count or an unusable name.
    #[error("Usage error: {0}.")]
    Usage(String),

    #[error("Invalid asset type: {0}")]
    InvalidAssetType(String),

    #[error("Invalid asset format: {0}")]
    InvalidAssetFormat(String),

    #[error("No Quasar project found in '{start}' or any of its parents.")]
    ProjectNotFound { start: String },

    #[error("Failed to parse config file '{file}': {message}")]
    ConfigParse { file: String, message: String },

    /// The package manager ran but did not install the provider package.
    #[error("Failed to install '{package}', package manager exited with status: {status}")]
    InstallFailed { package: String, status: ExitStatus },

    #[error("Template '{path}' does not exist.")]
    TemplateNotFound { path: String },

    #[error("Generating stores requires a store provider.")]
    StoreProviderRequired,
}

impl Error {
    /// Whether the usage text should accompany this error.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Error::Usage(_) | Error::InvalidAssetType(_) | Error::InvalidAssetFormat(_)
        )
    }
}

/// Convenience type alias for Results with assetgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
