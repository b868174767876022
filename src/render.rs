//! Maps the questionnaire model onto `genpdf` elements and renders it.
//!
//! The renderer owns the only mutable document handle of the whole program:
//! it applies the document-wide defaults, appends each section's blocks in
//! order with a page break between sections, and serializes the result to
//! bytes exactly once.

use std::fs;
use std::io;
use std::path::Path;

use genpdf::elements::{Break, FrameCellDecorator, PageBreak, Paragraph, TableLayout};
use genpdf::error::{Error, ErrorKind};
use genpdf::style::StyledString;
use genpdf::{Alignment, Element, Margins, Mm};

use crate::builder::DocumentBuilder;
use crate::elements::{mm_from_f64, CheckboxLine, ShadedBox};
use crate::model::{
    Banner, Block, Callout, HeadingLevel, HorizontalAlignment, OpenField, Questionnaire,
    TableSpec, TextBlock,
};
use crate::style;

/// Title recorded in the PDF metadata.
const DOCUMENT_TITLE: &str = "AI Agent Client Needs Assessment";

const PAGE_MARGIN_MM: f64 = 20.0;
const FOOTER_HEIGHT_MM: f64 = 10.0;

// Vertical spacing after the different block kinds, in millimetres.
const BODY_SPACING_MM: f64 = 2.1;
const ITEM_SPACING_MM: f64 = 0.7;
const ANSWER_SPACING_MM: f64 = 1.4;
const HEADING_TOP_MM: f64 = 3.0;
const HEADING_BOTTOM_MM: f64 = 1.5;
const ITEM_INDENT_MM: f64 = 5.0;
const CELL_PADDING_MM: f64 = 1.0;

/// A rendered questionnaire, ready to be written to disk.
pub struct RenderedPdf {
    /// The serialized PDF document.
    pub bytes: Vec<u8>,
}

impl RenderedPdf {
    /// Writes the document to `path` and returns the on-disk size in bytes.
    ///
    /// I/O errors propagate unmodified; nothing is retried and no partial
    /// file is cleaned up because the write happens in one call.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<u64> {
        let path = path.as_ref();
        fs::write(path, &self.bytes)?;
        Ok(fs::metadata(path)?.len())
    }
}

/// Renders the questionnaire into a PDF document.
pub fn render_questionnaire(questionnaire: &Questionnaire) -> Result<RenderedPdf, Error> {
    let mut document = DocumentBuilder::new()
        .with_title(DOCUMENT_TITLE)
        .with_margins(Margins::all(mm_from_f64(PAGE_MARGIN_MM)))
        .with_page_footer(mm_from_f64(FOOTER_HEIGHT_MM), |page| {
            let mut line = Paragraph::new(StyledString::new(
                format!("Page {}", page),
                style::footer_style(),
            ));
            line.set_alignment(Alignment::Center);
            line
        })
        .build()?;

    for (index, section) in questionnaire.sections().iter().enumerate() {
        if index > 0 {
            document.push(PageBreak::new());
        }
        if let Some(banner) = section.banner() {
            document.push(banner_element(banner));
            document.push(Break::new(1.0));
        }
        if let Some(title) = section.title() {
            document.push(heading_element(HeadingLevel::One, title));
        }
        for block in section.blocks() {
            push_block(&mut document, block)?;
        }
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(RenderedPdf { bytes })
}

fn push_block(document: &mut genpdf::Document, block: &Block) -> Result<(), Error> {
    match block {
        Block::Heading(heading) => {
            document.push(heading_element(heading.level(), heading.text()));
        }
        Block::Text(text) => document.push(text_element(text)),
        Block::Checkbox(label) => {
            document.push(CheckboxLine::new(label.clone()).padded(Margins::trbl(
                mm_from_f64(0.3),
                Mm::default(),
                mm_from_f64(ITEM_SPACING_MM),
                Mm::default(),
            )));
        }
        Block::Rating(label) => {
            let line = Paragraph::new(StyledString::new(
                format!("___  {}", label),
                style::base_style(),
            ));
            document.push(line.padded(Margins::trbl(
                Mm::default(),
                Mm::default(),
                mm_from_f64(ITEM_SPACING_MM),
                mm_from_f64(ITEM_INDENT_MM),
            )));
        }
        Block::AnswerLine(answer) => {
            let mut line = Paragraph::default();
            if let Some(label) = answer.label() {
                let mut label_style = style::base_style();
                label_style.set_bold();
                line.push(StyledString::new(format!("{}: ", label), label_style));
            }
            line.push(StyledString::new(
                "_".repeat(answer.width()),
                style::answer_rule_style(),
            ));
            document.push(line.padded(Margins::trbl(
                Mm::default(),
                Mm::default(),
                mm_from_f64(ANSWER_SPACING_MM),
                Mm::default(),
            )));
        }
        Block::OpenField(field) => document.push(open_field_element(field)),
        Block::Table(spec) => document.push(table_element(spec)?),
        Block::Callout(callout) => document.push(callout_element(callout)),
        Block::Spacer(lines) => document.push(Break::new(*lines)),
    }
    Ok(())
}

fn alignment_for(alignment: HorizontalAlignment) -> Alignment {
    match alignment {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
        HorizontalAlignment::Right => Alignment::Right,
    }
}

fn heading_element(level: HeadingLevel, text: &str) -> impl Element {
    let heading = Paragraph::new(StyledString::new(
        text.to_string(),
        style::heading_style(level),
    ));
    heading.padded(Margins::trbl(
        mm_from_f64(HEADING_TOP_MM),
        Mm::default(),
        mm_from_f64(HEADING_BOTTOM_MM),
        Mm::default(),
    ))
}

fn text_element(text: &TextBlock) -> impl Element {
    let mut paragraph = Paragraph::default();
    for run in text.runs() {
        paragraph.push(run.to_styled_string());
    }
    paragraph.set_alignment(alignment_for(text.alignment()));
    paragraph.padded(Margins::trbl(
        Mm::default(),
        Mm::default(),
        mm_from_f64(BODY_SPACING_MM),
        Mm::default(),
    ))
}

fn banner_element(banner: &Banner) -> ShadedBox {
    ShadedBox::new()
        .with_fill(style::TABLE_HEADER_FILL)
        .with_border(style::TEAL)
        .with_paragraph(
            banner.title().to_string(),
            style::banner_title_style(),
            Alignment::Center,
        )
        .with_paragraph(
            banner.subtitle().to_string(),
            style::banner_subtitle_style(),
            Alignment::Center,
        )
}

fn callout_element(callout: &Callout) -> ShadedBox {
    ShadedBox::new()
        .with_fill(style::HIGHLIGHT_FILL)
        .with_border(style::TEAL)
        .with_paragraph(
            callout.title().to_string(),
            style::callout_title_style(),
            Alignment::Center,
        )
        .with_paragraph(
            callout.body().to_string(),
            style::callout_body_style(),
            Alignment::Center,
        )
}

fn open_field_element(field: &OpenField) -> ShadedBox {
    ShadedBox::new()
        .with_fill(style::FIELD_FILL)
        .with_border(style::FIELD_BORDER)
        .with_min_lines(field.lines())
}

fn table_element(spec: &TableSpec) -> Result<TableLayout, Error> {
    if !spec.is_well_formed() {
        return Err(Error::new(
            format!(
                "Malformed table literal: {} headers, {} weights, {} rows",
                spec.headers().len(),
                spec.weights().len(),
                spec.rows().len()
            ),
            ErrorKind::InvalidData,
        ));
    }

    let mut table = TableLayout::new(spec.weights().to_vec());
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut header_row = table.row();
    for header in spec.headers() {
        header_row = header_row.element(
            ShadedBox::new()
                .with_fill(style::TABLE_HEADER_FILL)
                .with_min_lines(1)
                .with_padding(mm_from_f64(CELL_PADDING_MM))
                .with_paragraph(
                    header.clone(),
                    style::table_header_style(),
                    Alignment::Center,
                ),
        );
    }
    header_row.push()?;

    for (row_index, row_data) in spec.rows().iter().enumerate() {
        let mut row = table.row();
        for cell in row_data {
            let mut boxed = ShadedBox::new()
                .with_padding(mm_from_f64(CELL_PADDING_MM))
                .with_paragraph(cell.clone(), style::table_cell_style(), Alignment::Left);
            if row_index % 2 == 1 {
                boxed = boxed.with_fill(style::ALT_ROW_FILL);
            }
            row = row.element(boxed);
        }
        row.push()?;
    }

    Ok(table)
}
