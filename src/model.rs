use indexmap::IndexMap;

use crate::dom::DocumentNode;

/// Dense `rows x cols` matrix of cell text. Every row holds exactly `cols` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    cols: usize,
}

impl Grid {
    /// Builds a grid of `cols` columns, padding short rows with empty strings and
    /// truncating long ones.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>, cols: usize) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(cols, String::new());
                row
            })
            .collect();
        Self { rows, cols }
    }

    /// Builds a grid as wide as its widest row.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self::new(rows, cols)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols == 0
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// Section name used for rows that precede the first dominating row.
pub const START_SECTION: &str = "<start>";

/// Named sub-grids in the order their names first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subtables {
    sections: IndexMap<String, Grid>,
}

impl Subtables {
    pub(crate) fn push_rows(&mut self, name: &str, rows: Vec<Vec<String>>, cols: usize) {
        match self.sections.get_mut(name) {
            Some(existing) => {
                let mut merged = std::mem::take(existing).into_rows();
                merged.extend(rows);
                *existing = Grid::new(merged, cols);
            }
            None => {
                self.sections.insert(name.to_string(), Grid::new(rows, cols));
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Grid> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grid)> {
        self.sections
            .iter()
            .map(|(name, grid)| (name.as_str(), grid))
    }
}

/// A located table after grid construction and cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable {
    pub title: Option<String>,
    pub grid: Grid,
    pub sections: Option<Subtables>,
}

/// One table of a document together with the caption found before it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry<N> {
    pub index: usize,
    pub title: Option<String>,
    pub table: N,
}

impl<N: DocumentNode> CatalogEntry<N> {
    /// The table's markup with every attribute stripped.
    #[must_use]
    pub fn markup(&self) -> String {
        self.table.bare_markup()
    }
}
