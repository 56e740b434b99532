//! Export Data page

use std::path::Path;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use super::ViewController;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{self, ArtifactKind, ExportArtifact, PdfEncoder};

/// Whether there is anything to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Empty,
    Ready { count: usize },
}

impl ExportStatus {
    /// Message for the export page
    pub fn message(&self) -> String {
        match self {
            Self::Empty => TrackerError::EmptyExport.to_string(),
            Self::Ready { count } => format!(
                "{} expense{} ready to export.",
                count,
                if *count == 1 { "" } else { "s" }
            ),
        }
    }
}

impl ViewController {
    /// What the export page should offer
    pub fn export_status(&self) -> ExportStatus {
        match self.store().len() {
            0 => ExportStatus::Empty,
            count => ExportStatus::Ready { count },
        }
    }

    /// Export the expense table as CSV, named after `today`
    pub fn export_csv(&self, today: NaiveDate) -> TrackerResult<ExportArtifact> {
        self.ensure_exportable()?;

        let csv = export::to_csv(self.store().expenses()).map_err(|e| {
            error!(error = %e, "CSV export failed");
            e
        })?;
        let artifact = ExportArtifact::new(ArtifactKind::Csv, today, csv.into_bytes());

        info!(file = %artifact.file_name, bytes = artifact.len(), "CSV export produced");
        Ok(artifact)
    }

    /// Export the PDF report, named after `today`
    pub fn export_pdf(&self, today: NaiveDate) -> TrackerResult<ExportArtifact> {
        self.export_pdf_with(&export::PrintPdfEncoder, today, None)
    }

    /// Export the PDF report with a specific encoder and temp directory
    pub fn export_pdf_with<E: PdfEncoder>(
        &self,
        encoder: &E,
        today: NaiveDate,
        temp_dir: Option<&Path>,
    ) -> TrackerResult<ExportArtifact> {
        self.ensure_exportable()?;

        let store = self.store();
        let bytes =
            export::to_pdf_report_with(encoder, store.monthly_income(), store.expenses(), temp_dir)
                .map_err(|e| {
                    error!(error = %e, "PDF export failed");
                    e
                })?;
        let artifact = ExportArtifact::new(ArtifactKind::Pdf, today, bytes);

        info!(file = %artifact.file_name, bytes = artifact.len(), "PDF export produced");
        Ok(artifact)
    }

    fn ensure_exportable(&self) -> TrackerResult<()> {
        if self.store().is_empty() {
            warn!("export requested with no expenses");
            return Err(TrackerError::EmptyExport);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ExpenseForm;
    use crate::export::ReportContent;
    use std::io::{BufWriter, Write};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn seeded() -> ViewController {
        let mut controller = ViewController::default();
        controller.update_income("2000");
        controller.submit_expense(&ExpenseForm::new("2024-06-01", "Housing", "Rent", "1200"));
        controller.submit_expense(&ExpenseForm::new("2024-06-02", "Food", "Lunch, with tip", "14.75"));
        controller
    }

    struct RecordingEncoder;

    impl PdfEncoder for RecordingEncoder {
        fn encode<W: Write>(
            &self,
            content: &ReportContent,
            target: &mut BufWriter<W>,
        ) -> TrackerResult<()> {
            writeln!(target, "%PDF-fake")?;
            for line in &content.summary {
                writeln!(target, "{}", line)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_empty_store_exports_nothing() {
        let controller = ViewController::default();

        assert_eq!(controller.export_status(), ExportStatus::Empty);
        assert_eq!(
            controller.export_status().message(),
            "No data to export. Please add some expenses first."
        );
        assert!(controller.export_csv(today()).unwrap_err().is_empty_export());
        assert!(controller.export_pdf(today()).unwrap_err().is_empty_export());
    }

    #[test]
    fn test_csv_export() {
        let controller = seeded();
        assert_eq!(controller.export_status(), ExportStatus::Ready { count: 2 });

        let artifact = controller.export_csv(today()).unwrap();
        assert_eq!(artifact.file_name, "expenses_20240630.csv");
        assert_eq!(artifact.content_type(), "text/csv");

        let text = String::from_utf8(artifact.bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-06-01,Housing,Rent,1200.00");
        assert_eq!(lines[2], "2024-06-02,Food,\"Lunch, with tip\",14.75");
    }

    #[test]
    fn test_pdf_export_with_encoder() {
        let controller = seeded();
        let temp_dir = TempDir::new().unwrap();

        let artifact = controller
            .export_pdf_with(&RecordingEncoder, today(), Some(temp_dir.path()))
            .unwrap();

        assert_eq!(artifact.file_name, "expense_report_20240630.pdf");
        assert_eq!(artifact.content_type(), "application/pdf");
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.contains("Remaining Balance: $785.25"));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_pdf_export_real_encoder() {
        let artifact = seeded().export_pdf(today()).unwrap();
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_does_not_mutate() {
        let controller = seeded();
        let before = controller.store().expenses().to_vec();
        controller.export_csv(today()).unwrap();
        assert_eq!(controller.store().expenses(), before.as_slice());
    }
}
