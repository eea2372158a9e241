use crate::dom::DocumentNode;
use crate::model::Grid;
use crate::options::ColumnCountStrategy;
use crate::warning::{ExtractWarning, WarningCode};

/// Expands a table's rows and colspans into a dense grid of trimmed cell text.
pub fn build_grid<N: DocumentNode>(table: &N, strategy: ColumnCountStrategy) -> Grid {
    let mut warnings = Vec::new();
    build_grid_with_warnings(table, strategy, &mut warnings)
}

pub fn build_grid_with_warnings<N: DocumentNode>(
    table: &N,
    strategy: ColumnCountStrategy,
    warnings: &mut Vec<ExtractWarning>,
) -> Grid {
    let rows = table_rows(table)
        .iter()
        .map(row_cells)
        .collect::<Vec<_>>();

    let cols = match strategy {
        ColumnCountStrategy::FirstRow => rows.first().map_or(0, Vec::len),
        ColumnCountStrategy::MaxAcrossRows => rows.iter().map(Vec::len).max().unwrap_or(0),
    };

    let mut out = vec![vec![String::new(); cols]; rows.len()];
    for (r, (cells, target)) in rows.iter().zip(out.iter_mut()).enumerate() {
        let mut j = 0_usize;
        for cell in cells {
            let span = col_span(cell, r, j, warnings);
            let end = j.saturating_add(span);
            if j < cols {
                let text = cell.trimmed_text();
                for slot in &mut target[j..end.min(cols)] {
                    slot.clone_from(&text);
                }
            }
            j = end;
        }

        if j < cols {
            warnings.push(
                ExtractWarning::new(
                    WarningCode::RowWidthMismatch,
                    format!("row covers {j} of {cols} columns; padded with blanks"),
                )
                .with_row(r),
            );
        } else if j > cols {
            warnings.push(
                ExtractWarning::new(
                    WarningCode::SpanClipped,
                    format!("row spans {j} columns; content past column {cols} dropped"),
                )
                .with_row(r),
            );
        }
    }

    Grid::new(out, cols)
}

/// Rows owned by `table` itself; rows of nested tables belong to those tables.
fn table_rows<N: DocumentNode>(table: &N) -> Vec<N> {
    table
        .find_all("tr")
        .into_iter()
        .filter(|row| owning_table(row).as_ref() == Some(table))
        .collect()
}

fn owning_table<N: DocumentNode>(node: &N) -> Option<N> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ancestor.is_element("table") {
            return Some(ancestor);
        }
        current = ancestor.parent();
    }
    None
}

fn row_cells<N: DocumentNode>(row: &N) -> Vec<N> {
    row.children()
        .filter(|cell| cell.is_element("td") || cell.is_element("th"))
        .collect()
}

fn col_span<N: DocumentNode>(
    cell: &N,
    row: usize,
    col: usize,
    warnings: &mut Vec<ExtractWarning>,
) -> usize {
    let Some(raw) = cell.attr("colspan") else {
        return 1;
    };

    match raw.trim().parse::<usize>() {
        Ok(span) if span >= 1 => span,
        _ => {
            warnings.push(
                ExtractWarning::new(
                    WarningCode::MalformedSpan,
                    format!("unusable colspan {raw:?}; treating as 1"),
                )
                .with_row(row)
                .with_col(col),
            );
            1
        }
    }
}
