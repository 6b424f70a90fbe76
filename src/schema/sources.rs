use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{DocError, Result};

/// Import path of the built-in library.
pub const STDLIB_PATH: &str = "pkgdoc.dev/std";

const PACKAGE_FILE: &str = "package.toml";

/// Virtual filesystem mapping library names to their source trees.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    libraries: BTreeMap<String, PathBuf>,
}

impl Sources {
    /// Creates an empty source mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapping with the built-in library rooted at `root`.
    pub fn with_stdlib(root: impl Into<PathBuf>) -> Self {
        Self::new().with_library(STDLIB_PATH, root)
    }

    /// Registers a library.
    pub fn with_library(mut self, name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.libraries.insert(name.into(), root.into());
        self
    }

    /// Root directory registered for `name`.
    pub fn library(&self, name: &str) -> Option<&Path> {
        self.libraries.get(name).map(PathBuf::as_path)
    }

    /// Resolves a package argument to the file that declares it.
    ///
    /// Existing files are used as is, existing directories resolve to their
    /// `package.toml`, and names under a registered library resolve inside
    /// that library's root.
    ///
    /// # Errors
    ///
    /// Returns `DocError::PackageNotFound` when nothing matches.
    pub fn resolve(&self, package: &str) -> Result<PathBuf> {
        let local = Path::new(package);
        if local.is_file() {
            return Ok(local.to_path_buf());
        }
        if local.is_dir() {
            return existing(local.join(PACKAGE_FILE), package);
        }

        for (name, root) in &self.libraries {
            let Some(rest) = package.strip_prefix(name.as_str()) else {
                continue;
            };
            if rest.is_empty() {
                return existing(root.join(PACKAGE_FILE), package);
            }
            if let Some(subpath) = rest.strip_prefix('/') {
                return existing(root.join(subpath).join(PACKAGE_FILE), package);
            }
        }

        Err(DocError::PackageNotFound {
            package: package.to_string(),
        })
    }
}

fn existing(path: PathBuf, package: &str) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(DocError::PackageNotFound {
            package: package.to_string(),
        })
    }
}
