//! Per-sheet row processing.
//!
//! Each row walks a small state machine: validated (has an EAN) →
//! attributes extracted → matched against the remaining files → either its
//! matches are consumed and renamed, or the row is recorded as unmatched.
//! Rows are processed in sheet order; an earlier row with looser constraints
//! can legitimately starve a later one, so the order is load-bearing.

use crate::assign;
use crate::error::{RenamerError, Result};
use crate::index::FileIndex;
use crate::matcher;
use crate::schema::{AttributeSchema, EAN_COLUMN};
use calamine::{Data, Range};
use chrono::Local;
use std::path::Path;

/// Counters accumulated across every sheet of a run.
#[derive(Debug, Default)]
pub struct RunTally {
    pub files_renamed: usize,
    pub matched_eans: usize,
    pub unmatched_eans: usize,
}

/// One catalog row that found no candidate photo, kept for the final report.
#[derive(Debug, Clone)]
pub struct UnmatchedRecord {
    /// 1-based data-row position within its sheet.
    pub sheet_row: usize,
    pub ean: String,
    pub timestamp: String,
    /// Raw cell values aligned with the schema's column order, `None` where
    /// the source cell was blank.
    pub values: Vec<Option<String>>,
}

/// One spreadsheet record, shaped by the schema's declared column order
/// rather than a per-row dictionary.
struct CatalogRow {
    row_index: usize,
    ean: String,
    raw_values: Vec<Option<String>>,
}

impl CatalogRow {
    /// Lowercased non-blank values, the constraints the matcher works with.
    fn match_values(&self) -> Vec<String> {
        self.raw_values
            .iter()
            .flatten()
            .map(|v| v.to_lowercase())
            .collect()
    }
}

/// Column positions of the schema's attributes plus the EAN column within
/// one sheet's header row.
#[derive(Debug)]
struct HeaderProjection {
    attribute_cols: Vec<usize>,
    ean_col: usize,
}

fn project_header(
    sheet: &str,
    range: &Range<Data>,
    schema: &AttributeSchema,
) -> Result<HeaderProjection> {
    let missing = |column: &str| RenamerError::MissingColumn {
        sheet: sheet.to_string(),
        column: column.to_string(),
    };

    let header = range.rows().next().ok_or_else(|| missing(EAN_COLUMN))?;
    let headers: Vec<String> = header.iter().map(cell_text).collect();

    let position = |column: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| missing(column))
    };

    let mut attribute_cols = Vec::with_capacity(schema.columns.len());
    for column in schema.columns {
        attribute_cols.push(position(column)?);
    }
    let ean_col = position(EAN_COLUMN)?;

    Ok(HeaderProjection {
        attribute_cols,
        ean_col,
    })
}

/// Render a cell as text without coercing types. Integral floats print
/// without the trailing `.0` so numeric EAN cells keep their plain digits.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Pull one data row into shape. Returns `None` when the EAN cell is blank:
/// such rows are skipped outright, entering neither tally.
fn extract_row(row_index: usize, row: &[Data], projection: &HeaderProjection) -> Option<CatalogRow> {
    let ean = row
        .get(projection.ean_col)
        .map(cell_text)
        .unwrap_or_default()
        .trim()
        .to_string();
    if ean.is_empty() {
        return None;
    }

    let raw_values = projection
        .attribute_cols
        .iter()
        .map(|&col| {
            let text = row.get(col).map(cell_text).unwrap_or_default();
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect();

    Some(CatalogRow {
        row_index,
        ean,
        raw_values,
    })
}

/// Process one sheet: match every valid row against the remaining files and
/// either consume its matches or record it as unmatched.
///
/// The header is projected before any row is touched, so a missing required
/// column aborts the whole run with no partial renames from this sheet.
pub fn process_sheet(
    sheet: &str,
    range: &Range<Data>,
    schema: &AttributeSchema,
    index: &mut FileIndex,
    photo_folder: &Path,
    tally: &mut RunTally,
    unmatched: &mut Vec<UnmatchedRecord>,
) -> Result<()> {
    let projection = project_header(sheet, range, schema)?;

    let mut rows = range.rows();
    rows.next(); // header row

    for (i, row) in rows.enumerate() {
        // 1-based data-row index, the position reported in the CSV
        let row_index = i + 1;
        let Some(catalog_row) = extract_row(row_index, row, &projection) else {
            continue;
        };

        let matches = matcher::find_matches(&catalog_row.match_values(), index);

        if matches.is_empty() {
            tally.unmatched_eans += 1;
            unmatched.push(UnmatchedRecord {
                sheet_row: catalog_row.row_index,
                ean: catalog_row.ean,
                timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                values: catalog_row.raw_values,
            });
        } else {
            tally.matched_eans += 1;
            tally.files_renamed +=
                assign::assign_files(&catalog_row.ean, &matches, photo_folder, index);
        }
    }

    Ok(())
}
