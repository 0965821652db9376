use std::fmt;

use crate::domain::{ListingRecord, ResultSet};

/// Tables longer than this print only their head and tail.
const MAX_DISPLAY_ROWS: usize = 60;
const HEAD_TAIL_ROWS: usize = 5;
const MISSING: &str = "-";

/// The finished result of a run, in tabular form.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingTable {
    rows: ResultSet,
}

impl ListingTable {
    pub fn new(rows: ResultSet) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &ListingRecord::COLUMNS
    }

    pub fn rows(&self) -> &[ListingRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row indices to print; `None` marks the elided middle.
    fn display_rows(&self) -> Vec<Option<usize>> {
        let n = self.rows.len();
        if n <= MAX_DISPLAY_ROWS {
            return (0..n).map(Some).collect();
        }
        (0..HEAD_TAIL_ROWS)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((n - HEAD_TAIL_ROWS..n).map(Some))
            .collect()
    }
}

impl fmt::Display for ListingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns();

        if self.rows.is_empty() {
            writeln!(f, "Empty table")?;
            writeln!(f, "Columns: [{}]", columns.join(", "))?;
            return write!(f, "Index: []");
        }

        let shown = self.display_rows();
        let lines: Vec<(String, Vec<String>)> = shown
            .iter()
            .map(|slot| match slot {
                Some(i) => (
                    i.to_string(),
                    self.rows[*i]
                        .cells()
                        .into_iter()
                        .map(|cell| cell.unwrap_or_else(|| MISSING.to_string()))
                        .collect(),
                ),
                None => ("...".to_string(), vec!["...".to_string(); columns.len()]),
            })
            .collect();

        let index_width = lines
            .iter()
            .map(|(index, _)| index.chars().count())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(c, name)| {
                lines
                    .iter()
                    .map(|(_, cells)| cells[c].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (name, &width) in columns.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }

        for (index, cells) in &lines {
            writeln!(f)?;
            write!(f, "{index:<index_width$}")?;
            for (cell, &width) in cells.iter().zip(&widths) {
                write!(f, "  {cell:>width$}")?;
            }
        }

        if shown.len() < self.rows.len() {
            write!(f, "\n\n[{} rows x {} columns]", self.rows.len(), columns.len())?;
        }
        Ok(())
    }
}
