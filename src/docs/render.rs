use std::{fmt, io::Write, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    json::JsonRenderer, markdown::MarkdownRenderer, terminal::WidthProvider, text::TextRenderer,
};
use crate::{DocError, Result};

/// Report formats understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain, tab-aligned text
    #[default]
    Text,
    /// Markdown headings and pipe tables
    Markdown,
    /// One indented JSON document
    Json,
}

impl OutputFormat {
    /// Flag spelling of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }

    /// Creates the renderer implementing this format.
    pub fn renderer<'a>(self, width: &'a dyn WidthProvider) -> Box<dyn Renderer + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::new(width)),
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "txt" => Ok(OutputFormat::Text),
            "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(DocError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}

/// Which side of a definition a table documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Values supplied by the caller
    Inputs,
    /// Values produced by the definition
    Outputs,
}

impl Group {
    /// Section title, `Inputs` or `Outputs`.
    pub fn title(self) -> &'static str {
        match self {
            Group::Inputs => "Inputs",
            Group::Outputs => "Outputs",
        }
    }
}

/// One documented value: label, type and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValueSummary {
    /// Label relative to the owning definition
    pub name: String,
    /// Display type
    #[serde(rename = "Type")]
    pub type_name: String,
    /// Doc string, possibly the no-comment sentinel
    pub description: String,
}

/// Output strategy for one documentation pass.
///
/// The driver calls `package` once, then for every definition `field`
/// followed by `group` for the inputs and then the outputs, and finally
/// `finish`. Strings arrive unescaped and untruncated.
pub trait Renderer {
    /// Emits the package header.
    fn package(&mut self, out: &mut dyn Write, name: &str, doc: &str) -> Result<()>;

    /// Emits a definition's name and documentation.
    fn field(&mut self, out: &mut dyn Write, name: &str, doc: &str) -> Result<()>;

    /// Emits the inputs or outputs of the definition named `field`.
    fn group(
        &mut self,
        out: &mut dyn Write,
        field: &str,
        group: Group,
        rows: &[ValueSummary],
    ) -> Result<()>;

    /// Emits anything held back until the pass is complete.
    fn finish(&mut self, out: &mut dyn Write) -> Result<()>;
}
