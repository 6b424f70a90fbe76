//! Documentation rendering for compiled packages.
//!
//! A package's struct-shaped definitions are discovered, their nested values
//! split into inputs and outputs, and the result rendered as plain text,
//! Markdown or JSON. The three formats carry the same information and differ
//! only in syntax, escaping and truncation.

mod classify;
mod columns;
mod describe;
mod generator;
mod json;
mod markdown;
mod render;
mod terminal;
mod text;
mod walker;

#[cfg(test)]
mod tests;

pub use classify::{AttributeClassifier, INPUT_ATTR, IoClassifier, OUTPUT_ATTR, ScanContext};
pub use describe::{DefaultDescriber, NO_COMMENT, ValueDescriber};
pub use generator::DocsGenerator;
pub use json::{DocumentBuilder, FieldJson, JsonRenderer, PackageJson, write_document};
pub use markdown::{MarkdownRenderer, escape};
pub use render::{Group, OutputFormat, Renderer, ValueSummary};
pub use terminal::{FixedWidth, TerminalWidth, Truncator, WidthProvider, trim_to};
pub use text::TextRenderer;
pub use walker::{Field, discover_fields};
