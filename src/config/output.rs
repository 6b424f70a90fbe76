use serde::{Deserialize, Serialize};

use crate::{Result, docs::OutputFormat};

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format used when `--output` is not given (`txt`, `md` or `json`).
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl OutputConfig {
    /// Resolves the output format, `flag` taking precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns `DocError::InvalidFormat` for anything but `txt`, `md` or `json`.
    pub fn resolve(&self, flag: Option<&str>) -> Result<OutputFormat> {
        flag.unwrap_or(&self.format).parse()
    }
}

fn default_format() -> String {
    OutputFormat::default().to_string()
}
