//! PDF expense report
//!
//! Report generation is split in two: [`ReportContent`] is the pure content
//! of the document (title, summary lines, table) and a [`PdfEncoder`] lays
//! that content out as PDF bytes. The shipped encoder uses printpdf with the
//! builtin Helvetica fonts.

use std::io::{BufWriter, Write};

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{format_currency, Expense, Money};

/// Descriptions longer than this are cut in the table
pub const DESCRIPTION_MAX_CHARS: usize = 50;

/// Horizontal alignment of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A table column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportColumn {
    pub title: &'static str,
    pub width_mm: f32,
    pub align: Align,
}

/// Table columns: Date, Category, Description, Amount
pub const REPORT_COLUMNS: [ReportColumn; 4] = [
    ReportColumn {
        title: "Date",
        width_mm: 40.0,
        align: Align::Left,
    },
    ReportColumn {
        title: "Category",
        width_mm: 40.0,
        align: Align::Left,
    },
    ReportColumn {
        title: "Description",
        width_mm: 80.0,
        align: Align::Left,
    },
    ReportColumn {
        title: "Amount",
        width_mm: 30.0,
        align: Align::Right,
    },
];

/// Everything that appears in the report, independent of layout
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContent {
    /// Centered document title
    pub title: String,
    /// "Label: value" lines under the title
    pub summary: Vec<String>,
    /// Heading above the table
    pub details_heading: String,
    /// One row of four cells per expense, in store order
    pub rows: Vec<[String; 4]>,
}

impl ReportContent {
    /// Build report content from the income and the expense table
    pub fn build(income: Money, expenses: &[Expense]) -> Self {
        let total: Money = expenses.iter().map(|e| e.amount).sum();
        let remaining = income - total;

        let rows = expenses
            .iter()
            .map(|e| {
                [
                    e.date.format("%Y-%m-%d").to_string(),
                    e.category.label().to_string(),
                    truncate_chars(&e.description, DESCRIPTION_MAX_CHARS),
                    format_currency(e.amount),
                ]
            })
            .collect();

        Self {
            title: "Expense Report".to_string(),
            summary: vec![
                format!("Monthly Income: {}", format_currency(income)),
                format!("Total Expenses: {}", format_currency(total)),
                format!("Remaining Balance: {}", format_currency(remaining)),
            ],
            details_heading: "Expense Details".to_string(),
            rows,
        }
    }
}

/// Keep at most `max` characters (not bytes)
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Turns report content into PDF bytes
pub trait PdfEncoder {
    /// Encode the content into `target`
    fn encode<W: Write>(&self, content: &ReportContent, target: &mut BufWriter<W>)
        -> TrackerResult<()>;
}

/// Page geometry, in millimetres
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const ROW_HEIGHT: f32 = 10.0;
const BOTTOM_LIMIT: f32 = 15.0;
const CELL_PADDING: f32 = 1.5;
/// Baseline offset from the top of a row
const BASELINE_OFFSET: f32 = 6.5;

const TITLE_SIZE: f32 = 16.0;
const SUMMARY_SIZE: f32 = 12.0;
const TABLE_SIZE: f32 = 10.0;

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Approximate advance width of Helvetica glyphs, in thousandths of an em
fn glyph_width(c: char) -> f32 {
    match c {
        '0'..='9' | '$' => 556.0,
        ',' | '.' | ' ' => 278.0,
        '-' => 333.0,
        'i' | 'j' | 'l' => 222.0,
        'f' | 't' | 'I' => 278.0,
        'r' => 333.0,
        'm' | 'M' => 833.0,
        'w' | 'W' => 722.0,
        'A'..='Z' => 667.0,
        _ => 556.0,
    }
}

/// Estimated rendered width of `text` in millimetres
pub fn text_width_mm(text: &str, font_size: f32) -> f32 {
    let em: f32 = text.chars().map(glyph_width).sum::<f32>() / 1000.0;
    em * font_size * PT_TO_MM
}

/// X position at which to start drawing `text` inside a cell
pub fn aligned_x(cell_left: f32, cell_width: f32, text: &str, font_size: f32, align: Align) -> f32 {
    let width = text_width_mm(text, font_size);
    match align {
        Align::Left => cell_left + CELL_PADDING,
        Align::Center => cell_left + (cell_width - width).max(0.0) / 2.0,
        Align::Right => cell_left + (cell_width - width - CELL_PADDING).max(CELL_PADDING),
    }
}

/// printpdf-backed encoder producing A4 pages
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintPdfEncoder;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PrintPdfEncoder {
    fn new_page(doc: &PdfDocumentReference) -> PdfLayerReference {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        doc.get_page(page).get_layer(layer)
    }

    fn draw_row(
        layer: &PdfLayerReference,
        top: f32,
        cells: &[String; 4],
        header: bool,
        font: &IndirectFontRef,
    ) {
        let mut left = MARGIN;
        for (column, text) in REPORT_COLUMNS.iter().zip(cells.iter()) {
            let align = if header { Align::Center } else { column.align };
            let x = aligned_x(left, column.width_mm, text, TABLE_SIZE, align);
            layer.use_text(
                text.as_str(),
                TABLE_SIZE,
                Mm(x),
                Mm(top - BASELINE_OFFSET),
                font,
            );
            draw_rect(layer, left, top, column.width_mm, ROW_HEIGHT);
            left += column.width_mm;
        }
    }

    fn header_cells() -> [String; 4] {
        REPORT_COLUMNS.map(|c| c.title.to_string())
    }

    fn fonts(doc: &PdfDocumentReference) -> TrackerResult<Fonts> {
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| TrackerError::Export(format!("Failed to load font: {}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| TrackerError::Export(format!("Failed to load font: {}", e)))?;
        Ok(Fonts { regular, bold })
    }
}

fn draw_rect(layer: &PdfLayerReference, left: f32, top: f32, width: f32, height: f32) {
    let corners = vec![
        (Point::new(Mm(left), Mm(top)), false),
        (Point::new(Mm(left + width), Mm(top)), false),
        (Point::new(Mm(left + width), Mm(top - height)), false),
        (Point::new(Mm(left), Mm(top - height)), false),
    ];
    layer.add_line(Line {
        points: corners,
        is_closed: true,
    });
}

impl PdfEncoder for PrintPdfEncoder {
    fn encode<W: Write>(
        &self,
        content: &ReportContent,
        target: &mut BufWriter<W>,
    ) -> TrackerResult<()> {
        let (doc, page, layer) =
            PdfDocument::new(&content.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let fonts = Self::fonts(&doc)?;
        let mut layer = doc.get_page(page).get_layer(layer);
        layer.set_outline_thickness(0.5);

        // Title
        let mut y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
        let title_x = aligned_x(0.0, PAGE_WIDTH, &content.title, TITLE_SIZE, Align::Center);
        layer.use_text(content.title.as_str(), TITLE_SIZE, Mm(title_x), Mm(y), &fonts.bold);
        y -= ROW_HEIGHT * 2.0;

        // Summary
        for line in &content.summary {
            layer.use_text(line.as_str(), SUMMARY_SIZE, Mm(MARGIN), Mm(y), &fonts.bold);
            y -= ROW_HEIGHT;
        }
        y -= ROW_HEIGHT;

        // Table
        layer.use_text(
            content.details_heading.as_str(),
            SUMMARY_SIZE,
            Mm(MARGIN),
            Mm(y),
            &fonts.bold,
        );
        let mut top = y - ROW_HEIGHT / 2.0;
        let header = Self::header_cells();
        Self::draw_row(&layer, top, &header, true, &fonts.bold);
        top -= ROW_HEIGHT;

        let mut pages = 1;
        for row in &content.rows {
            if top - ROW_HEIGHT < BOTTOM_LIMIT {
                layer = Self::new_page(&doc);
                layer.set_outline_thickness(0.5);
                pages += 1;
                top = PAGE_HEIGHT - MARGIN;
                Self::draw_row(&layer, top, &header, true, &fonts.bold);
                top -= ROW_HEIGHT;
            }
            Self::draw_row(&layer, top, row, false, &fonts.regular);
            top -= ROW_HEIGHT;
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| TrackerError::Export(format!("Failed to encode PDF: {}", e)))?;
        target
            .write_all(&bytes)
            .and_then(|_| target.flush())
            .map_err(|e| TrackerError::Export(format!("Failed to write PDF: {}", e)))?;

        debug!(rows = content.rows.len(), pages, bytes = bytes.len(), "pdf encoded");
        Ok(())
    }
}
