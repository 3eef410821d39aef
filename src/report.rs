//! Unmatched-EAN report, one CSV per run.

use crate::error::Result;
use crate::schema::AttributeSchema;
use crate::sheet::UnmatchedRecord;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Write the CSV of catalog rows that found no photo. Returns the report
/// path. Callers only invoke this when at least one record exists.
///
/// The header is `riga_excel,ean,data` followed by the schema's attribute
/// columns, the layout the downstream tooling expects.
pub fn write_unmatched_report(
    reports_folder: &Path,
    schema: &AttributeSchema,
    records: &[UnmatchedRecord],
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = reports_folder.join(format!(
        "report_ean_non_trovati_{}_{}.csv",
        schema.brand, timestamp
    ));

    let mut writer = csv::Writer::from_path(&path)?;

    let mut header = vec!["riga_excel", "ean", "data"];
    header.extend_from_slice(schema.columns);
    writer.write_record(&header)?;

    for record in records {
        let mut fields = vec![
            record.sheet_row.to_string(),
            record.ean.clone(),
            record.timestamp.clone(),
        ];
        fields.extend(record.values.iter().map(|v| v.clone().unwrap_or_default()));
        writer.write_record(&fields)?;
    }
    writer.flush()?;

    Ok(path)
}
