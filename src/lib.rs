/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Asset types, formats, descriptors and path mapping.
pub mod asset;

/// Project configuration file handling.
pub mod config;

/// Detects whether existing project files are TypeScript or JavaScript.
pub mod extension;

/// Project root discovery and project-wide settings.
pub mod project;

/// Store provider detection, installation and bootstrapping.
pub mod store;

/// Copies templates into the project.
pub mod template;

/// Runs a validated request against a project.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;
