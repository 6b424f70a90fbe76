use std::{io::Write, mem};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use super::render::{Group, Renderer, ValueSummary};
use crate::Result;

const JSON_INDENT: &[u8] = b"    ";

/// A documented definition in the JSON report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldJson {
    /// Definition label
    pub name: String,
    /// Definition doc string
    pub description: String,
    /// Values supplied by the caller
    pub inputs: Vec<ValueSummary>,
    /// Values produced by the definition
    pub outputs: Vec<ValueSummary>,
}

/// The JSON report for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageJson {
    /// Package name as requested
    pub name: String,
    /// Package doc string
    pub description: String,
    /// Documented definitions in discovery order
    pub fields: Vec<FieldJson>,
}

/// Assembles a [`PackageJson`] one definition at a time.
///
/// A field is started with [`begin_field`](Self::begin_field), receives its
/// inputs, and is appended to the package once its outputs are attached.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    package: PackageJson,
    current: FieldJson,
}

impl DocumentBuilder {
    /// Starts the document for package `name`.
    pub fn new(name: &str, description: &str) -> Self {
        let mut package = PackageJson {
            name: name.to_string(),
            ..PackageJson::default()
        };
        if !description.is_empty() {
            package.description = description.to_string();
        }

        Self {
            package,
            current: FieldJson::default(),
        }
    }

    /// Starts a new in-progress field.
    pub fn begin_field(&mut self, name: &str, description: &str) {
        self.current = FieldJson {
            name: name.to_string(),
            ..FieldJson::default()
        };
        if !description.is_empty() {
            self.current.description = description.to_string();
        }
    }

    /// Attaches inputs to the in-progress field.
    pub fn inputs(&mut self, rows: &[ValueSummary]) {
        self.current.inputs = rows.to_vec();
    }

    /// Attaches outputs and appends the in-progress field to the package.
    pub fn outputs(&mut self, rows: &[ValueSummary]) {
        self.current.outputs = rows.to_vec();
        self.package.fields.push(mem::take(&mut self.current));
    }

    /// The fully assembled document.
    pub fn build(self) -> PackageJson {
        self.package
    }
}

/// Renders the package as a single JSON document once the pass completes.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    builder: Option<DocumentBuilder>,
}

impl JsonRenderer {
    /// Creates a JSON renderer.
    pub fn new() -> Self {
        Self::default()
    }

    fn builder(&mut self) -> &mut DocumentBuilder {
        self.builder.get_or_insert_with(DocumentBuilder::default)
    }
}

impl Renderer for JsonRenderer {
    fn package(&mut self, _out: &mut dyn Write, name: &str, doc: &str) -> Result<()> {
        self.builder = Some(DocumentBuilder::new(name, doc));
        Ok(())
    }

    fn field(&mut self, _out: &mut dyn Write, name: &str, doc: &str) -> Result<()> {
        self.builder().begin_field(name, doc);
        Ok(())
    }

    fn group(
        &mut self,
        _out: &mut dyn Write,
        _field: &str,
        group: Group,
        rows: &[ValueSummary],
    ) -> Result<()> {
        match group {
            Group::Inputs => self.builder().inputs(rows),
            Group::Outputs => self.builder().outputs(rows),
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut dyn Write) -> Result<()> {
        let document = self.builder.take().unwrap_or_default().build();
        write_document(out, &document)
    }
}

/// Writes `document` with four-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns `DocError::Serialization` or `DocError::Io`.
pub fn write_document(out: &mut dyn Write, document: &PackageJson) -> Result<()> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    document.serialize(&mut serializer)?;

    out.write_all(&buf)?;
    writeln!(out)?;
    Ok(())
}
