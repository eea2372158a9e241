use crate::model::{Grid, START_SECTION, Subtables};

/// A row whose cells all repeat its first cell, i.e. an inline section header.
fn dominating_value(row: &[String]) -> Option<&str> {
    let (first, rest) = row.split_first()?;
    rest.iter().all(|cell| cell == first).then_some(first.as_str())
}

/// Partitions `grid` into sections headed by dominating rows.
///
/// Rows before the first dominating row land under [`START_SECTION`]; that entry is always
/// present, even when empty. A grid with no rows or no columns comes back whole under
/// [`START_SECTION`].
#[must_use]
pub fn split_subtables(grid: &Grid) -> Subtables {
    let cols = grid.col_count();
    let mut sections = Subtables::default();
    if grid.is_empty() {
        sections.push_rows(START_SECTION, grid.rows().to_vec(), cols);
        return sections;
    }

    let mut name = START_SECTION.to_string();
    let mut buffer = Vec::new();
    for row in grid.rows() {
        match dominating_value(row) {
            Some(header) => {
                sections.push_rows(&name, std::mem::take(&mut buffer), cols);
                name = header.to_string();
            }
            None => buffer.push(row.clone()),
        }
    }
    sections.push_rows(&name, buffer, cols);

    tracing::debug!(sections = sections.len(), "split grid into subtables");
    sections
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::split_subtables;
    use crate::model::{Grid, START_SECTION};

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn splits_at_dominating_rows() {
        let sections = split_subtables(&grid(&[
            &["H", "H"],
            &["a", "1"],
            &["b", "2"],
            &["S", "S"],
            &["c", "3"],
        ]));

        assert_eq!(
            sections.names().collect::<Vec<_>>(),
            vec![START_SECTION, "H", "S"]
        );
        assert_eq!(sections.get(START_SECTION), Some(&Grid::new(Vec::new(), 2)));
        assert_eq!(sections.get("H"), Some(&grid(&[&["a", "1"], &["b", "2"]])));
        assert_eq!(sections.get("S"), Some(&grid(&[&["c", "3"]])));
    }

    #[test]
    fn rows_before_first_header_stay_in_start() {
        let sections = split_subtables(&grid(&[&["x", "1"], &["Assets", "Assets"], &["y", "2"]]));
        assert_eq!(sections.get(START_SECTION), Some(&grid(&[&["x", "1"]])));
        assert_eq!(sections.get("Assets"), Some(&grid(&[&["y", "2"]])));
    }

    #[test]
    fn no_dominating_rows_yields_single_start_entry() {
        let input = grid(&[&["a", "1"], &["b", "2"]]);
        let sections = split_subtables(&input);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get(START_SECTION), Some(&input));
    }

    #[test]
    fn degenerate_grids_keep_the_mapping_shape() {
        let sections = split_subtables(&Grid::empty());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get(START_SECTION), Some(&Grid::empty()));
    }

    #[test]
    fn rows_without_columns_stay_in_start() {
        let input = Grid::new(vec![Vec::new(), Vec::new()], 0);
        let sections = split_subtables(&input);
        assert_eq!(sections.len(), 1);
        let start = sections.get(START_SECTION).expect("start section");
        assert_eq!(start.row_count(), 2);
        assert_eq!(start.col_count(), 0);
    }

    #[test]
    fn repeated_header_appends_to_existing_section() {
        let sections = split_subtables(&grid(&[
            &["Current", "Current"],
            &["a", "1"],
            &["Other", "Other"],
            &["b", "2"],
            &["Current", "Current"],
            &["c", "3"],
        ]));
        assert_eq!(
            sections.get("Current"),
            Some(&grid(&[&["a", "1"], &["c", "3"]]))
        );
    }
}
