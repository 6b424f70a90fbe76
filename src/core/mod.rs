use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for pkgdoc.
///
/// Every variant is fatal for a single invocation: the binary logs it and
/// exits without attempting a partial report.
#[derive(Error, Debug)]
pub enum DocError {
    /// The requested output format is not one of `txt`, `md` or `json`
    #[error("output must be either `txt`, `md` or `json` (got '{value}')")]
    InvalidFormat {
        /// The rejected value
        value: String,
    },

    /// User configuration could not be interpreted
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O error on a specific file
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The package argument matched neither a path nor a registered library
    #[error("cannot find package '{package}'")]
    PackageNotFound {
        /// Package name or path as given on the command line
        package: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Import operation error with file context
    #[error("failed to import '{path}': {details}")]
    ImportError {
        /// Path of file being imported
        path: PathBuf,
        /// Import error details
        details: String,
    },

    /// A package imports itself, directly or transitively
    #[error("circular import detected: {chain}")]
    CircularImport {
        /// Human readable import chain, ending with the repeated file
        chain: String,
    },

    /// A reserved schema key carries a value of the wrong shape
    #[error("invalid schema at '{path}': {details}")]
    InvalidSchema {
        /// Dotted path of the offending node
        path: String,
        /// What was wrong with it
        details: String,
    },

    /// The root value cannot enumerate its members
    #[error("cannot get fields of '{path}': {details}")]
    FieldDiscovery {
        /// Dotted path of the value ("" for the package root)
        path: String,
        /// Why listing failed
        details: String,
    },

    /// The assembled JSON document could not be serialized
    #[error("json marshal: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for pkgdoc operations.
pub type Result<T> = result::Result<T, DocError>;

impl DocError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        DocError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an import error with file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying import error
    /// * `path` - Path to the file that failed to import
    pub fn import(error: impl fmt::Display, path: &Path) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        DocError::ImportError {
            path: clean_path,
            details: error.to_string(),
        }
    }

    /// Creates a schema error for the node at `path`.
    pub fn invalid_schema(path: &str, details: impl Into<String>) -> Self {
        DocError::InvalidSchema {
            path: display_path(path).to_string(),
            details: details.into(),
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}
