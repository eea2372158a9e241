use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::ExtractError;
use crate::model::{Grid, Subtables};

pub(crate) fn write_grid<W: Write>(
    writer: W,
    grid: &Grid,
    delimiter: u8,
) -> Result<(), ExtractError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(writer);
    for row in grid.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// One record per row with the section name prepended as the first field.
pub(crate) fn write_subtables<W: Write>(
    writer: W,
    sections: &Subtables,
    delimiter: u8,
) -> Result<(), ExtractError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(writer);
    for (name, grid) in sections.iter() {
        for row in grid.rows() {
            writer.write_record(std::iter::once(name).chain(row.iter().map(String::as_str)))?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_csv_file(
    path: &Path,
    grid: &Grid,
    sections: Option<&Subtables>,
    delimiter: u8,
) -> Result<(), ExtractError> {
    let file = std::fs::File::create(path)?;
    match sections {
        Some(sections) => write_subtables(file, sections, delimiter),
        None => write_grid(file, grid, delimiter),
    }
}

pub(crate) fn write_csv_string(
    grid: &Grid,
    sections: Option<&Subtables>,
    delimiter: u8,
) -> Result<String, ExtractError> {
    let mut buffer = Vec::<u8>::new();
    match sections {
        Some(sections) => write_subtables(&mut buffer, sections, delimiter)?,
        None => write_grid(&mut buffer, grid, delimiter)?,
    }

    String::from_utf8(buffer)
        .map_err(|error| ExtractError::InvalidOption(format!("invalid utf-8 csv output: {error}")))
}
