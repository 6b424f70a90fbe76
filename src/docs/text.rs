use std::io::Write;

use super::{
    columns::Columns,
    render::{Group, Renderer, ValueSummary},
    terminal::{Truncator, WidthProvider},
};
use crate::Result;

const TEXT_PADDING: &str = "    ";

/// Plain-text report streamed as it is produced.
///
/// Descriptions in value tables are trimmed to half the terminal width.
pub struct TextRenderer<'a> {
    truncator: Truncator<'a>,
}

impl<'a> TextRenderer<'a> {
    /// Creates a text renderer measuring the display with `width`.
    pub fn new(width: &'a dyn WidthProvider) -> Self {
        Self {
            truncator: Truncator::new(width),
        }
    }
}

impl Renderer for TextRenderer<'_> {
    fn package(&mut self, out: &mut dyn Write, name: &str, doc: &str) -> Result<()> {
        writeln!(out, "Package {name}")?;
        writeln!(out, "\n{doc}")?;
        Ok(())
    }

    fn field(&mut self, out: &mut dyn Write, name: &str, doc: &str) -> Result<()> {
        writeln!(out, "\n{name}\n\n{TEXT_PADDING}{doc}")?;
        Ok(())
    }

    fn group(
        &mut self,
        out: &mut dyn Write,
        _field: &str,
        group: Group,
        rows: &[ValueSummary],
    ) -> Result<()> {
        let title = group.title();
        if rows.is_empty() {
            writeln!(out, "\n{TEXT_PADDING}{title}: none")?;
            return Ok(());
        }

        writeln!(out, "\n{TEXT_PADDING}{title}:")?;

        let mut columns = Columns::new(TEXT_PADDING.len());
        for row in rows {
            columns.row([
                String::new(),
                String::new(),
                row.name.clone(),
                row.type_name.clone(),
                self.truncator.trim(&row.description),
            ]);
        }
        columns.write_to(out)?;
        Ok(())
    }

    fn finish(&mut self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}
