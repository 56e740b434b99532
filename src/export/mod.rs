//! Export module for the expense tracker
//!
//! Turns the expense table into downloadable artifacts:
//! - CSV: the raw expense rows (spreadsheet-compatible)
//! - PDF: a printable report with an income summary and a details table

pub mod artifact;
pub mod csv;
pub mod pdf;

use std::path::Path;

use crate::error::TrackerResult;
use crate::models::{Expense, Money};

pub use artifact::{generate_via_temp_file, ArtifactKind, ExportArtifact};
pub use self::csv::{read_csv, read_expenses_csv, to_csv, write_expenses_csv, CSV_HEADER};
pub use pdf::{PdfEncoder, PrintPdfEncoder, ReportContent};

/// Render the PDF report with the default encoder
pub fn to_pdf_report(income: Money, expenses: &[Expense]) -> TrackerResult<Vec<u8>> {
    to_pdf_report_with(&PrintPdfEncoder, income, expenses, None)
}

/// Render the PDF report with a specific encoder
///
/// The document is staged in a temporary file under `temp_dir` (or the
/// system temp directory), which never outlives this call.
pub fn to_pdf_report_with<E: PdfEncoder>(
    encoder: &E,
    income: Money,
    expenses: &[Expense],
    temp_dir: Option<&Path>,
) -> TrackerResult<Vec<u8>> {
    let content = ReportContent::build(income, expenses);
    generate_via_temp_file(temp_dir, |writer| encoder.encode(&content, writer))
}
