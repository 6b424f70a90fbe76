use crate::schema::Value;

/// Doc string reported for values without a comment.
pub const NO_COMMENT: &str = "-";

/// Produces the display strings for a single value.
pub trait ValueDescriber {
    /// Short single-line rendering of the value's declared type or shape.
    fn format_value(&self, value: &Value) -> String;

    /// The value's documentation, or [`NO_COMMENT`] when it has none.
    fn doc_string(&self, value: &Value) -> String;

    /// The value's path relative to `name`, used as its row label.
    fn label(&self, name: &str, value: &Value) -> String {
        let path = value.path();
        path.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(path)
            .to_string()
    }
}

/// Describes values from the metadata recorded by the compiler.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDescriber;

impl ValueDescriber for DefaultDescriber {
    fn format_value(&self, value: &Value) -> String {
        let shown = if value.has_attr("secret") {
            "secret".to_string()
        } else if let Some(declared) = value.declared_type() {
            declared.to_string()
        } else if let Some(literal) = value.literal() {
            literal.to_string()
        } else {
            value.kind().to_string()
        };

        shown.replace('\n', "\\n")
    }

    fn doc_string(&self, value: &Value) -> String {
        let joined = value
            .doc()
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        if joined.is_empty() {
            return NO_COMMENT.to_string();
        }

        joined.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
