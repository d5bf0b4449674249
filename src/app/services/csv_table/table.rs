//! Row splitting and positional cell access for one sheet

use super::line::parse_line;

/// Split raw sheet text into rows of fields.
///
/// Lines are separated by `\n` (a trailing `\r` is dropped). Blank lines are
/// removed entirely, which means a genuinely blank data row cannot be told
/// apart from a separator and is lost.
pub fn parse_table(raw_text: &str) -> Vec<Vec<String>> {
    raw_text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Parsed rows of one sheet with forgiving positional access
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Parse raw sheet text; empty text yields an empty table
    pub fn parse(raw_text: &str) -> Self {
        Self {
            rows: parse_table(raw_text),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Trimmed cell text, or `""` when the row or column does not exist
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(|cell| cell.trim())
            .unwrap_or("")
    }

    /// Rows from `start` onwards, paired with their row index
    pub fn data_rows(&self, start: usize) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(start)
            .map(|(index, row)| (index, row.as_slice()))
    }
}
