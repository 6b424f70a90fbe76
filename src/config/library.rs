use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigPaths;

/// Where library sources live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LibraryConfig {
    /// Root of the built-in library; defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdlib: Option<PathBuf>,
}

impl LibraryConfig {
    /// Resolves the built-in library root, `flag` taking precedence.
    ///
    /// Returns `None` when no location is configured and no data directory
    /// can be determined.
    pub fn stdlib_root(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.stdlib.clone())
            .or_else(|| ConfigPaths::stdlib_dir().ok())
    }
}
