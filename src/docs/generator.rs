use std::io::Write;

use tracing::{debug, info, instrument};

use super::{
    classify::{AttributeClassifier, IoClassifier, ScanContext},
    describe::{DefaultDescriber, ValueDescriber},
    render::{Group, OutputFormat, ValueSummary},
    terminal::{TerminalWidth, WidthProvider},
    walker::discover_fields,
};
use crate::{
    Result,
    schema::{SchemaCompiler, Sources, Value},
};

/// Renders documentation for compiled packages.
///
/// Fields are discovered, classified and described, then handed to the
/// renderer for the configured format. Collaborators default to the
/// attribute-based classifier, the metadata describer and the terminal
/// attached to stdout; each can be replaced.
pub struct DocsGenerator {
    format: OutputFormat,
    describer: Box<dyn ValueDescriber>,
    classifier: Box<dyn IoClassifier>,
    width: Box<dyn WidthProvider>,
}

impl DocsGenerator {
    /// Creates a generator for `format` with the default collaborators.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            describer: Box::new(DefaultDescriber),
            classifier: Box::new(AttributeClassifier),
            width: Box::new(TerminalWidth),
        }
    }

    /// Replaces the value describer.
    pub fn with_describer(mut self, describer: impl ValueDescriber + 'static) -> Self {
        self.describer = Box::new(describer);
        self
    }

    /// Replaces the input/output classifier.
    pub fn with_classifier(mut self, classifier: impl IoClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Replaces the display width source used for text truncation.
    pub fn with_width_provider(mut self, width: impl WidthProvider + 'static) -> Self {
        self.width = Box::new(width);
        self
    }

    /// The configured output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Compiles `package` and writes its documentation to `out`.
    ///
    /// # Errors
    ///
    /// Returns compilation errors before anything is written, otherwise the
    /// errors of [`generate`](Self::generate).
    pub fn generate_package(
        &self,
        compiler: &dyn SchemaCompiler,
        sources: &Sources,
        package: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let root = compiler.build(sources, package)?;
        self.generate(package, &root, out)
    }

    /// Writes documentation for the compiled package `root` to `out`.
    ///
    /// # Errors
    ///
    /// Returns `DocError::FieldDiscovery` before anything is written if the
    /// root cannot list its members. Write failures and JSON serialization
    /// failures abort the pass; output already written is not rolled back.
    #[instrument(skip(self, root, out), fields(format = %self.format))]
    pub fn generate(&self, package: &str, root: &Value, out: &mut dyn Write) -> Result<()> {
        let fields = discover_fields(root)?;
        info!(count = fields.len(), "documenting definitions");

        let ctx = ScanContext::new(package);
        let mut renderer = self.format.renderer(self.width.as_ref());

        renderer.package(out, package, &self.describer.doc_string(root))?;

        for field in &fields {
            renderer.field(out, field.name, &self.describer.doc_string(field.value))?;

            let inputs = self.summarize(field.name, &self.classifier.scan_inputs(&ctx, field.value));
            renderer.group(out, field.name, Group::Inputs, &inputs)?;

            let outputs =
                self.summarize(field.name, &self.classifier.scan_outputs(&ctx, field.value));
            renderer.group(out, field.name, Group::Outputs, &outputs)?;

            debug!(
                field = field.name,
                inputs = inputs.len(),
                outputs = outputs.len(),
                "rendered definition"
            );
        }

        renderer.finish(out)?;
        out.flush()?;
        Ok(())
    }

    /// Renders documentation for `root` into a string.
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn render_to_string(&self, package: &str, root: &Value) -> Result<String> {
        let mut out = Vec::new();
        self.generate(package, root, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn summarize(&self, name: &str, values: &[&Value]) -> Vec<ValueSummary> {
        values
            .iter()
            .map(|value| ValueSummary {
                name: self.describer.label(name, value),
                type_name: self.describer.format_value(value),
                description: self.describer.doc_string(value),
            })
            .collect()
    }
}
