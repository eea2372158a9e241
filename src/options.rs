use std::fmt;
use std::str::FromStr;

/// How the Grid Builder decides a table's column count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnCountStrategy {
    /// Cell count of the first row, colspans ignored. Wider later rows are clipped.
    #[default]
    FirstRow,
    /// Largest cell count over all rows, colspans ignored.
    MaxAcrossRows,
}

impl FromStr for ColumnCountStrategy {
    type Err = String;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        match spec.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "first-row" | "first" => Ok(Self::FirstRow),
            "max-across-rows" | "max" => Ok(Self::MaxAcrossRows),
            other => Err(format!(
                "invalid column count strategy '{other}', expected first-row or max-across-rows"
            )),
        }
    }
}

impl fmt::Display for ColumnCountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstRow => "first-row",
            Self::MaxAcrossRows => "max-across-rows",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub column_count: ColumnCountStrategy,
    /// Which title match to use; negative values count from the last match.
    pub match_index: isize,
    /// Drop blank rows and useless columns before returning the grid.
    pub clean: bool,
    pub split_subtables: bool,
    pub delimiter: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            column_count: ColumnCountStrategy::FirstRow,
            match_index: -1,
            clean: true,
            split_subtables: false,
            delimiter: b',',
        }
    }
}
