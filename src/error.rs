use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenamerError {
    #[error("unknown brand '{name}'. Available brands: {available}")]
    UnknownBrand { name: String, available: String },

    #[error("photo folder not found: {0}")]
    FolderNotFound(String),

    #[error("Excel file not found: {0}")]
    ExcelNotFound(String),

    #[error("sheet '{sheet}': required column '{column}' is missing")]
    MissingColumn { sheet: String, column: String },

    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    #[error("report write error: {0}")]
    ReportWrite(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenamerError>;
