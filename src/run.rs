//! Whole-run orchestration: path layout, optimizer pre-pass, directory scan,
//! sheet-by-sheet processing and report emission.

use crate::error::{RenamerError, Result};
use crate::index::FileIndex;
use crate::optimizer::{self, OptimizeSettings};
use crate::report;
use crate::scanner;
use crate::schema::AttributeSchema;
use crate::sheet::{self, RunTally, UnmatchedRecord};
use calamine::{open_workbook, Reader, Xlsx};
use std::path::PathBuf;
use std::time::Instant;

/// Directory layout of one season, derived from the two CLI parameters.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub photo_folder: PathBuf,
    pub excel_file: PathBuf,
    pub reports_folder: PathBuf,
}

impl RunPaths {
    pub fn new(season: &str, brand: &str) -> Self {
        let base = PathBuf::from(season);
        Self {
            photo_folder: base.join("photoes").join(brand),
            excel_file: base.join("excels").join(format!("{}.xlsx", brand)),
            reports_folder: base.join("reports"),
        }
    }
}

/// Final outcome of a run.
#[derive(Debug)]
pub struct RunReport {
    pub tally: RunTally,
    pub jpg_files_seen: usize,
    pub report_path: Option<PathBuf>,
}

/// Run the whole pipeline for one season and brand.
///
/// A missing photo folder, missing spreadsheet or missing required column is
/// fatal and aborts with no partial report. A single failed rename or a
/// failed recompression is logged and the run continues.
pub fn run(
    paths: &RunPaths,
    schema: &AttributeSchema,
    optimize: Option<OptimizeSettings>,
) -> Result<RunReport> {
    println!("Columns to match: {:?}", schema.columns);

    if !paths.photo_folder.is_dir() {
        return Err(RenamerError::FolderNotFound(
            paths.photo_folder.display().to_string(),
        ));
    }
    if !paths.excel_file.is_file() {
        return Err(RenamerError::ExcelNotFound(
            paths.excel_file.display().to_string(),
        ));
    }

    if !paths.reports_folder.exists() {
        std::fs::create_dir_all(&paths.reports_folder)?;
        println!("Reports folder created: {}", paths.reports_folder.display());
    }

    let started = Instant::now();

    // 1. Scan the photo folder
    println!("\nReading files from {}...", paths.photo_folder.display());
    let jpg_files = scanner::scan_photo_folder(&paths.photo_folder)?;
    println!("Found {} JPG file(s)", jpg_files.len());

    // 2. Offer oversized images to the external recompressor
    if let Some(settings) = optimize {
        println!("\nChecking for oversized images...");
        optimizer::optimize_folder(&paths.photo_folder, &jpg_files, &settings);
    }

    let mut index = FileIndex::build(jpg_files.iter().cloned());

    // 3. Process the workbook sheet by sheet
    println!("\nReading Excel file {}...", paths.excel_file.display());
    let mut workbook: Xlsx<_> = open_workbook(&paths.excel_file)?;

    let mut tally = RunTally::default();
    let mut unmatched: Vec<UnmatchedRecord> = Vec::new();

    let sheet_names = workbook.sheet_names().to_vec();
    for sheet_name in sheet_names {
        println!("Processing sheet {}...", sheet_name);
        let range = workbook.worksheet_range(&sheet_name)?;
        println!("Sheet read: {} row(s) found", range.height().saturating_sub(1));
        sheet::process_sheet(
            &sheet_name,
            &range,
            schema,
            &mut index,
            &paths.photo_folder,
            &mut tally,
            &mut unmatched,
        )?;
    }

    // 4. Totals and report
    let elapsed = started.elapsed();
    println!("\nRun completed in {:.2} seconds.", elapsed.as_secs_f64());
    println!("Total files renamed: {}", tally.files_renamed);
    println!(
        "Files not renamed: {}",
        jpg_files.len() - tally.files_renamed
    );

    let report_path = if unmatched.is_empty() {
        println!("\nEvery EAN code matched at least one file.");
        None
    } else {
        let path = report::write_unmatched_report(&paths.reports_folder, schema, &unmatched)?;
        println!("\nUnmatched EAN report: {}", path.display());
        println!("Total EAN codes without a match: {}", unmatched.len());
        Some(path)
    };

    Ok(RunReport {
        tally,
        jpg_files_seen: jpg_files.len(),
        report_path,
    })
}
