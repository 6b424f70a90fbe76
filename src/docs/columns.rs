use std::io::{self, Write};

/// Aligns rows of cells into padded columns.
///
/// Every cell but the last of a row is padded to the widest cell of its
/// column plus `padding` spaces. The last cell is written as is. Widths are
/// counted in characters.
#[derive(Debug, Default)]
pub(crate) struct Columns {
    padding: usize,
    rows: Vec<Vec<String>>,
}

impl Columns {
    pub(crate) fn new(padding: usize) -> Self {
        Self {
            padding,
            rows: Vec::new(),
        }
    }

    pub(crate) fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub(crate) fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let widths = self.widths();

        for row in &self.rows {
            let mut line = String::new();
            let last = row.len().saturating_sub(1);

            for (column, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if column < last {
                    let pad = widths[column] - cell.chars().count();
                    line.extend(std::iter::repeat_n(' ', pad));
                }
            }

            writeln!(out, "{line}")?;
        }

        Ok(())
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();

        for row in &self.rows {
            let aligned = row.len().saturating_sub(1);
            for (column, cell) in row.iter().take(aligned).enumerate() {
                let width = cell.chars().count() + self.padding;
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        widths
    }
}
