use tracing::{info, instrument};

use super::{Sources, Value, convert::package_to_value, loading::load_with_imports};
use crate::{DocError, Result};

/// Builds a package into a navigable value tree.
pub trait SchemaCompiler {
    /// Compiles `package`, resolving it against `sources`.
    ///
    /// # Errors
    ///
    /// Returns an error when the package cannot be found, read or compiled.
    fn build(&self, sources: &Sources, package: &str) -> Result<Value>;
}

/// Compiles TOML package files.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlCompiler;

impl TomlCompiler {
    /// Creates a compiler.
    pub fn new() -> Self {
        Self
    }

    /// Compiles a single package document held in memory.
    ///
    /// Imports are not resolved; an `imports` key is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DocError::TomlParseError` or `DocError::InvalidSchema`.
    pub fn compile_str(&self, source: &str) -> Result<Value> {
        let mut table: toml::Table =
            toml::from_str(source).map_err(|e| DocError::toml_parse(e, None))?;
        table.remove("imports");
        package_to_value(&table)
    }
}

impl SchemaCompiler for TomlCompiler {
    #[instrument(skip(self, sources))]
    fn build(&self, sources: &Sources, package: &str) -> Result<Value> {
        let path = sources.resolve(package)?;
        info!(path = %path.display(), "compiling package");

        let table = load_with_imports(&path)?;
        package_to_value(&table)
    }
}
