//! Compiled package values.
//!
//! A package compiles into a tree of [`Value`] nodes. Documentation rendering
//! only ever borrows from this tree; nothing downstream mutates it.

mod compiler;
mod convert;
mod loading;
mod sources;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};

pub use compiler::{SchemaCompiler, TomlCompiler};
pub use sources::{STDLIB_PATH, Sources};

use crate::{DocError, Result};

/// Structural kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Record with named members
    Struct,
    /// Text
    String,
    /// Integer number
    Int,
    /// Floating point number
    Float,
    /// Boolean
    Bool,
    /// Raw bytes
    Bytes,
    /// Ordered sequence
    List,
    /// Explicit null
    Null,
    /// Unconstrained, any kind is accepted
    Top,
}

impl Kind {
    /// Whether values of this kind can hold named members.
    pub fn is_struct(self) -> bool {
        self == Kind::Struct
    }

    /// Schema spelling of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Struct => "struct",
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Bytes => "bytes",
            Kind::List => "list",
            Kind::Null => "null",
            Kind::Top => "_",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "struct" => Ok(Kind::Struct),
            "string" => Ok(Kind::String),
            "int" => Ok(Kind::Int),
            "float" => Ok(Kind::Float),
            "bool" => Ok(Kind::Bool),
            "bytes" => Ok(Kind::Bytes),
            "list" => Ok(Kind::List),
            "null" => Ok(Kind::Null),
            "top" | "_" => Ok(Kind::Top),
            other => Err(format!("unknown kind '{other}'")),
        }
    }
}

/// A node of a compiled package.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    path: String,
    definition: bool,
    kind: Kind,
    doc: Vec<String>,
    declared_type: Option<String>,
    literal: Option<String>,
    attributes: Vec<String>,
    members: Vec<Member>,
}

/// A named member of a struct value.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    label: String,
    value: Value,
}

impl Member {
    /// The member's label as written in the package (`#Run`, `image`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The member's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the member is a definition rather than a plain field.
    pub fn is_definition(&self) -> bool {
        self.value.definition
    }
}

impl Value {
    /// Creates an empty value of `kind` rooted at `path`.
    pub fn new(path: impl Into<String>, kind: Kind) -> Self {
        Self {
            path: path.into(),
            definition: false,
            kind,
            doc: Vec::new(),
            declared_type: None,
            literal: None,
            attributes: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Adds a doc comment fragment.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc.push(doc.into());
        self
    }

    /// Sets the declared type expression.
    pub fn with_type(mut self, declared: impl Into<String>) -> Self {
        self.declared_type = Some(declared.into());
        self
    }

    /// Sets the concrete literal this value was declared with.
    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    /// Adds an attribute such as `input` or `output`.
    pub fn with_attr(mut self, attr: impl Into<String>) -> Self {
        self.attributes.push(attr.into());
        self
    }

    /// Appends a member, re-rooting its path under this value.
    ///
    /// Labels starting with `#` mark the member as a definition.
    pub fn with_member(mut self, label: impl Into<String>, mut value: Value) -> Self {
        let label = label.into();
        value.definition = label.starts_with('#');
        value.rebase(&join_path(&self.path, &label));
        self.members.push(Member { label, value });
        self
    }

    fn rebase(&mut self, path: &str) {
        self.path = path.to_string();
        for member in &mut self.members {
            let child = join_path(path, &member.label);
            member.value.rebase(&child);
        }
    }

    /// Dotted path from the package root; empty for the root itself.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Structural kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Doc comment fragments in declaration order.
    pub fn doc(&self) -> &[String] {
        &self.doc
    }

    /// Declared type expression, if any.
    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }

    /// Concrete literal, if the value was declared with one.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Whether this value was declared as a definition.
    pub fn is_definition(&self) -> bool {
        self.definition
    }

    /// Whether the value carries attribute `name`.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|attr| attr == name)
    }

    /// Lists the struct's members in declaration order.
    ///
    /// Definitions are only included when `definitions` is set.
    ///
    /// # Errors
    ///
    /// Returns `DocError::FieldDiscovery` when the value is not a struct.
    pub fn fields(&self, definitions: bool) -> Result<Vec<&Member>> {
        if !self.kind.is_struct() {
            return Err(DocError::FieldDiscovery {
                path: if self.path.is_empty() {
                    "<root>".to_string()
                } else {
                    self.path.clone()
                },
                details: format!("value of kind {} has no fields", self.kind),
            });
        }

        Ok(self
            .members
            .iter()
            .filter(|member| definitions || !member.is_definition())
            .collect())
    }

    /// Members in declaration order, definitions included.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

pub(crate) fn join_path(parent: &str, label: &str) -> String {
    if parent.is_empty() {
        label.to_string()
    } else {
        format!("{parent}.{label}")
    }
}
