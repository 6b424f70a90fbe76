use std::io::Write;

use super::{
    columns::Columns,
    describe::NO_COMMENT,
    render::{Group, Renderer, ValueSummary},
};
use crate::Result;

const TABLE_PADDING: usize = 4;

/// Escapes characters that would break a Markdown table cell or be read as HTML.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Markdown report with one pipe table per inputs/outputs group.
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a Markdown renderer.
    pub fn new() -> Self {
        Self
    }

    fn empty_notice(group: Group) -> &'static str {
        match group {
            Group::Inputs => "_No input._",
            Group::Outputs => "_No output._",
        }
    }
}

impl Renderer for MarkdownRenderer {
    fn package(&mut self, out: &mut dyn Write, name: &str, doc: &str) -> Result<()> {
        writeln!(out, "## Package {}", escape(name))?;
        if doc == NO_COMMENT {
            writeln!(out)?;
        } else {
            write!(out, "\n{}\n\n", escape(doc))?;
        }
        Ok(())
    }

    fn field(&mut self, out: &mut dyn Write, name: &str, doc: &str) -> Result<()> {
        write!(out, "### {}\n\n", escape(name))?;
        if doc != NO_COMMENT {
            write!(out, "{}\n\n", escape(doc))?;
        }
        Ok(())
    }

    fn group(
        &mut self,
        out: &mut dyn Write,
        field: &str,
        group: Group,
        rows: &[ValueSummary],
    ) -> Result<()> {
        write!(out, "#### {} {}\n\n", escape(field), group.title())?;
        if rows.is_empty() {
            write!(out, "{}\n\n", Self::empty_notice(group))?;
            return Ok(());
        }

        let mut table = Columns::new(TABLE_PADDING);
        table.row(["| Name", "| Type", "| Description    ", "|"]);
        table.row(["| -------------", "|:-------------:", "|:-------------:", "|"]);
        for row in rows {
            table.row([
                format!("|*{}*", row.name),
                format!("|``{}``", escape(&row.type_name)),
                format!("|{}", escape(&row.description)),
                "|".to_string(),
            ]);
        }
        table.write_to(out)?;
        writeln!(out)?;
        Ok(())
    }

    fn finish(&mut self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}
