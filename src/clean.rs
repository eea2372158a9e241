use std::collections::BTreeSet;

use crate::model::Grid;

/// Drops blank rows, then removes useless columns until none remain.
///
/// A column is useless when, in every row, its cell is blank or equal to the cell to its right.
/// Each pass decides the full set of useless columns before removing any of them.
#[must_use]
pub fn clean_grid(grid: &Grid) -> Grid {
    let mut rows = grid
        .rows()
        .iter()
        .filter(|row| !is_blank_row(row))
        .cloned()
        .collect::<Vec<_>>();
    if rows.is_empty() {
        return Grid::empty();
    }

    let mut cols = grid.col_count();
    loop {
        let useless = useless_columns(&rows, cols);
        if useless.is_empty() {
            break;
        }

        tracing::debug!(?useless, "dropping useless columns");
        rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .enumerate()
                    .filter(|(col, _)| !useless.contains(col))
                    .map(|(_, cell)| cell)
                    .collect()
            })
            .collect();
        cols -= useless.len();
    }

    Grid::new(rows, cols)
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(String::is_empty)
}

fn useless_columns(rows: &[Vec<String>], cols: usize) -> BTreeSet<usize> {
    (0..cols)
        .filter(|&col| {
            rows.iter().all(|row| {
                let cell = &row[col];
                cell.is_empty() || row.get(col + 1) == Some(cell)
            })
        })
        .collect()
}
