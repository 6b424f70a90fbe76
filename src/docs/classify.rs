use tracing::trace;

use crate::schema::Value;

/// Attribute marking a value supplied by the caller.
pub const INPUT_ATTR: &str = "input";
/// Attribute marking a value produced by the definition.
pub const OUTPUT_ATTR: &str = "output";

/// Execution context shared by all scans of one documentation pass.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    package: &'a str,
}

impl<'a> ScanContext<'a> {
    /// Creates a context for documenting `package`.
    pub fn new(package: &'a str) -> Self {
        Self { package }
    }

    /// Package being documented.
    pub fn package(&self) -> &'a str {
        self.package
    }
}

/// Splits a definition's nested values into inputs and outputs.
///
/// Scans never mutate the value and may return empty sequences.
pub trait IoClassifier {
    /// Values the caller is expected to supply.
    fn scan_inputs<'v>(&self, ctx: &ScanContext<'_>, value: &'v Value) -> Vec<&'v Value>;

    /// Values the definition produces.
    fn scan_outputs<'v>(&self, ctx: &ScanContext<'_>, value: &'v Value) -> Vec<&'v Value>;
}

/// Classifies values by their `input` and `output` attributes.
///
/// Members are visited depth-first in declaration order. Nested definitions
/// are skipped, and a classified value is never descended into.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeClassifier;

impl AttributeClassifier {
    fn scan<'v>(ctx: &ScanContext<'_>, value: &'v Value, attr: &str) -> Vec<&'v Value> {
        let mut found = Vec::new();
        collect(value, attr, &mut found);
        trace!(
            package = ctx.package(),
            path = value.path(),
            attr,
            count = found.len(),
            "scanned value"
        );
        found
    }
}

impl IoClassifier for AttributeClassifier {
    fn scan_inputs<'v>(&self, ctx: &ScanContext<'_>, value: &'v Value) -> Vec<&'v Value> {
        Self::scan(ctx, value, INPUT_ATTR)
    }

    fn scan_outputs<'v>(&self, ctx: &ScanContext<'_>, value: &'v Value) -> Vec<&'v Value> {
        Self::scan(ctx, value, OUTPUT_ATTR)
    }
}

fn collect<'v>(value: &'v Value, attr: &str, found: &mut Vec<&'v Value>) {
    for member in value.members() {
        if member.is_definition() {
            continue;
        }

        let child = member.value();
        if child.has_attr(attr) {
            found.push(child);
        } else if child.kind().is_struct()
            && !child.has_attr(INPUT_ATTR)
            && !child.has_attr(OUTPUT_ATTR)
        {
            collect(child, attr, found);
        }
    }
}
