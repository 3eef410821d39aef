//! Multi-sheet photo renamer.
//!
//! Matches product photos to catalog rows identified by an EAN code, using
//! the free-text attribute columns of a brand's spreadsheet, and renames each
//! matched photo to `<EAN>-<n>.jpg`. Oversized JPEGs are offered to an
//! external recompression tool before matching.

pub mod assign;
pub mod cli;
pub mod error;
pub mod index;
pub mod matcher;
pub mod optimizer;
pub mod report;
pub mod run;
pub mod scanner;
pub mod schema;
pub mod sheet;
