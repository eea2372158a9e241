mod cik;
mod clean;
mod csv_out;
mod dom;
mod error;
mod filings;
mod grid;
mod html;
mod locate;
mod model;
mod normalize;
mod options;
mod subtables;
mod title;
mod warning;

use std::path::Path;

use crate::csv_out::{write_csv_file, write_csv_string};

pub use cik::CikDirectory;
pub use clean::clean_grid;
pub use dom::{Children, Descendants, DocumentNode, Following, NodeKind};
pub use error::ExtractError;
pub use filings::{
    ARCHIVES_BASE_URL, FINANCIAL_REPORT_NAME, Filing, cache_relative_path, find_filings,
    parse_recent_filings,
};
pub use grid::{build_grid, build_grid_with_warnings};
pub use html::{HtmlDocument, HtmlNode};
pub use locate::{catalog_tables, find_table, find_table_at};
pub use model::{CatalogEntry, ExtractedTable, Grid, START_SECTION, Subtables};
pub use normalize::{matches, normalize};
pub use options::{ColumnCountStrategy, ExtractOptions};
pub use subtables::split_subtables;
pub use title::{SCALE_ANNOTATION, resolve_title};
pub use warning::{ExtractWarning, WarningCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub title: Option<String>,
    pub row_count: usize,
    pub col_count: usize,
    pub section_count: usize,
    pub warnings: Vec<ExtractWarning>,
}

impl ExtractionReport {
    fn new(table: Option<&ExtractedTable>, warnings: Vec<ExtractWarning>) -> Self {
        let Some(table) = table else {
            return Self {
                title: None,
                row_count: 0,
                col_count: 0,
                section_count: 0,
                warnings,
            };
        };

        Self {
            title: table.title.clone(),
            row_count: table.grid.row_count(),
            col_count: table.grid.col_count(),
            section_count: table.sections.as_ref().map_or(0, Subtables::len),
            warnings,
        }
    }
}

/// Locates the table titled `query`, then builds, cleans and optionally splits its grid.
///
/// Absence of the table is not an error: it yields `None` and a
/// [`WarningCode::TableNotFound`] warning.
pub fn extract_table<N: DocumentNode>(
    root: &N,
    query: &str,
    options: &ExtractOptions,
    warnings: &mut Vec<ExtractWarning>,
) -> Option<ExtractedTable> {
    let Some(table) = find_table_at(root, query, options.match_index) else {
        warnings.push(ExtractWarning::new(
            WarningCode::TableNotFound,
            format!("no table follows a title matching {query:?}"),
        ));
        return None;
    };

    let title = resolve_title(&table);
    if title.is_none() {
        warnings.push(ExtractWarning::new(
            WarningCode::TitleMissing,
            "no caption found before the matched table",
        ));
    }

    let mut grid = build_grid_with_warnings(&table, options.column_count, warnings);
    if options.clean {
        grid = clean_grid(&grid);
    }
    if grid.is_empty() {
        warnings.push(ExtractWarning::new(
            WarningCode::EmptyGrid,
            "matched table has no non-blank cells",
        ));
    }

    let sections = options.split_subtables.then(|| split_subtables(&grid));
    tracing::debug!(
        rows = grid.row_count(),
        cols = grid.col_count(),
        "extracted table for {query:?}"
    );

    Some(ExtractedTable {
        title,
        grid,
        sections,
    })
}

fn validate_options(options: &ExtractOptions) -> Result<(), ExtractError> {
    if matches!(options.delimiter, b'"' | b'\n' | b'\r') || !options.delimiter.is_ascii() {
        return Err(ExtractError::InvalidOption(format!(
            "unusable delimiter {:?}",
            char::from(options.delimiter)
        )));
    }
    Ok(())
}

/// Reads an HTML file, extracts the table titled `query` and writes it as CSV.
///
/// When no table matches, nothing is written and the report carries zero rows.
pub fn extract_html_to_csv(
    input_html: &Path,
    output_csv: &Path,
    query: &str,
    options: &ExtractOptions,
) -> Result<ExtractionReport, ExtractError> {
    validate_options(options)?;

    let bytes = std::fs::read(input_html)?;
    let document = HtmlDocument::from_bytes(&bytes);
    let mut warnings = Vec::new();
    let table = extract_table(&document.root(), query, options, &mut warnings);

    if let Some(table) = &table {
        write_csv_file(
            output_csv,
            &table.grid,
            table.sections.as_ref(),
            options.delimiter,
        )?;
    }

    Ok(ExtractionReport::new(table.as_ref(), warnings))
}

pub fn extract_html_str_to_csv_string(
    html: &str,
    query: &str,
    options: &ExtractOptions,
) -> Result<(String, ExtractionReport), ExtractError> {
    validate_options(options)?;

    let document = HtmlDocument::parse(html);
    let mut warnings = Vec::new();
    let table = extract_table(&document.root(), query, options, &mut warnings);

    let csv = match &table {
        Some(table) => write_csv_string(&table.grid, table.sections.as_ref(), options.delimiter)?,
        None => String::new(),
    };

    Ok((csv, ExtractionReport::new(table.as_ref(), warnings)))
}
