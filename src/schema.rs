//! Catalog family schemas.
//!
//! Each brand's spreadsheet carries its own set of attribute columns; the EAN
//! column is common to every layout. The column lists are ordered and stable
//! for the lifetime of a run.

/// Column holding the EAN code, required in every sheet.
pub const EAN_COLUMN: &str = "EAN";

/// Extension of the photo files handled by a run (matched case-insensitively).
pub const FILE_EXTENSION: &str = ".jpg";

/// Ordered attribute columns for one brand's spreadsheet layout.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSchema {
    pub brand: &'static str,
    pub columns: &'static [&'static str],
}

const SCHEMAS: &[AttributeSchema] = &[
    AttributeSchema {
        brand: "guess",
        columns: &["Model", "Part", "Color"],
    },
    AttributeSchema {
        brand: "liujo",
        columns: &["Modello", "Parte", "Colore"],
    },
    AttributeSchema {
        brand: "furla",
        columns: &["Modello", "Parte", "Colore", "TipoVariante"],
    },
    AttributeSchema {
        brand: "alviero",
        columns: &["Linea", "Modello", "Tessuto", "Colore"],
    },
    AttributeSchema {
        brand: "brand",
        columns: &["Campo1", "Campo2"],
    },
];

pub fn for_brand(name: &str) -> Option<&'static AttributeSchema> {
    SCHEMAS.iter().find(|s| s.brand == name)
}

/// Comma-separated list of the known brands, for error messages.
pub fn available_brands() -> String {
    SCHEMAS
        .iter()
        .map(|s| s.brand)
        .collect::<Vec<_>>()
        .join(", ")
}
