use std::path::{Path, PathBuf};

use crate::{DocError, Result};

/// Tracks the chain of package files currently being imported
#[derive(Debug, Default)]
pub struct CircularDetector {
    import_chain: Vec<PathBuf>,
}

impl CircularDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails if `path` is already part of the current import chain
    pub fn detect_circular_import(&self, path: &Path) -> Result<()> {
        if !self.import_chain.iter().any(|p| p == path) {
            return Ok(());
        }

        let chain_display: Vec<String> = self
            .import_chain
            .iter()
            .map(|p| file_name(p))
            .chain(std::iter::once(file_name(path)))
            .collect();

        Err(DocError::CircularImport {
            chain: chain_display.join(" -> "),
        })
    }

    pub fn push_to_chain(&mut self, path: &Path) {
        self.import_chain.push(path.to_path_buf());
    }

    pub fn pop_from_chain(&mut self) {
        self.import_chain.pop();
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
