//! Custom element implementations built on top of `genpdf` primitives.
//!
//! The stock crate has no notion of shaded boxes or checkable lines, so this
//! module supplies the two building blocks the questionnaire layout leans
//! on: [`ShadedBox`] (banners, callouts, open answer fields, shaded table
//! cells) and [`CheckboxLine`] (checklist items with a drawn, font-agnostic
//! checkbox square).

use genpdf::elements::Paragraph;
use genpdf::error::Error;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Alignment, Element, Margins, Mm, Position, RenderResult, Size};

use crate::style;

const DEFAULT_BOX_PADDING_MM: f64 = 2.0;
// Stroke pitch for emulated background fills. The renderer draws polylines
// only; at the PDF default line width of 1 pt, strokes 0.25 mm apart form a
// solid fill.
const FILL_STEP_MM: f64 = 0.25;
const CHECKBOX_INDENT_MM: f64 = 5.0;
const CHECKBOX_SIDE_MM: f64 = 3.2;
const CHECKBOX_GAP_MM: f64 = 2.5;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Greedily wraps `text` into lines no wider than `max_width`, measuring
/// with the given style. A single word wider than the limit keeps its own
/// line rather than being split.
fn wrap_text(
    text: &str,
    style: Style,
    max_width: Mm,
    font_cache: &genpdf::fonts::FontCache,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        let width = StyledString::new(candidate.clone(), style).width(font_cache);
        if width > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

struct BoxParagraph {
    text: String,
    style: Style,
    alignment: Alignment,
}

/// A box that fills its background, draws a rectangular border, and lays out
/// wrapped, aligned text lines with uniform padding.
///
/// The box never splits across pages: when it does not fit into the
/// remaining area it reports `has_more` without drawing so the caller
/// retries on a fresh page.
pub struct ShadedBox {
    paragraphs: Vec<BoxParagraph>,
    fill: Option<Color>,
    border: Option<Color>,
    padding: Mm,
    min_lines: usize,
}

impl Default for ShadedBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadedBox {
    /// Creates an empty box with the default padding and no fill or border.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            fill: None,
            border: None,
            padding: mm_from_f64(DEFAULT_BOX_PADDING_MM),
            min_lines: 0,
        }
    }

    /// Sets the background fill color and returns the updated box.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the border color and returns the updated box.
    pub fn with_border(mut self, border: Color) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets the inner padding and returns the updated box.
    pub fn with_padding(mut self, padding: Mm) -> Self {
        self.padding = padding;
        self
    }

    /// Enforces a minimum content height of `lines` text lines (measured in
    /// the ambient style). Used for blank writing space.
    pub fn with_min_lines(mut self, lines: usize) -> Self {
        self.min_lines = lines;
        self
    }

    /// Appends a paragraph of uniformly styled text. Newlines split the text
    /// into separate lines; each line wraps independently.
    pub fn with_paragraph(
        mut self,
        text: impl Into<String>,
        style: Style,
        alignment: Alignment,
    ) -> Self {
        self.paragraphs.push(BoxParagraph {
            text: text.into(),
            style,
            alignment,
        });
        self
    }

    fn draw_fill(&self, area: &mut render::Area<'_>, width: Mm, height: Mm, fill: Color) {
        let mut fill_style = Style::new();
        fill_style.set_color(fill);
        let strokes = (mm_to_f64(height) / FILL_STEP_MM).ceil() as usize;
        for index in 0..=strokes {
            let mut y = mm_from_f64(index as f64 * FILL_STEP_MM);
            if y > height {
                y = height;
            }
            area.draw_line(
                vec![Position::new(0, y), Position::new(width, y)],
                fill_style,
            );
        }
    }

    fn draw_border(&self, area: &mut render::Area<'_>, width: Mm, height: Mm, border: Color) {
        let mut border_style = Style::new();
        border_style.set_color(border);
        area.draw_line(
            vec![
                Position::new(0, 0),
                Position::new(width, 0),
                Position::new(width, height),
                Position::new(0, height),
                Position::new(0, 0),
            ],
            border_style,
        );
    }
}

impl Element for ShadedBox {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let width = area.size().width;
        let content_width = width - self.padding - self.padding;

        // Measure the wrapped content before anything is drawn; the fill
        // must go down first and needs the final height.
        let mut lines: Vec<(StyledString, Mm, Mm, Alignment)> = Vec::new();
        let mut content_height = Mm::default();
        for paragraph in &self.paragraphs {
            let paragraph_style = style.and(paragraph.style);
            let line_height = paragraph_style.line_height(&context.font_cache);
            for raw_line in paragraph.text.split('\n') {
                for wrapped in wrap_text(
                    raw_line,
                    paragraph_style,
                    content_width,
                    &context.font_cache,
                ) {
                    let string = StyledString::new(wrapped, paragraph_style);
                    let line_width = string.width(&context.font_cache);
                    lines.push((string, line_width, line_height, paragraph.alignment));
                    content_height += line_height;
                }
            }
        }

        let mut floor = Mm::default();
        let ambient_line_height = style.line_height(&context.font_cache);
        for _ in 0..self.min_lines {
            floor += ambient_line_height;
        }
        if content_height < floor {
            content_height = floor;
        }
        let height = content_height + self.padding + self.padding;

        if height > area.size().height {
            let mut result = RenderResult::default();
            result.has_more = true;
            return Ok(result);
        }

        if let Some(fill) = self.fill {
            self.draw_fill(&mut area, width, height, fill);
        }
        if let Some(border) = self.border {
            self.draw_border(&mut area, width, height, border);
        }

        let mut y = self.padding;
        for (string, line_width, line_height, alignment) in &lines {
            let x = self.padding
                + match alignment {
                    Alignment::Left => Mm::default(),
                    Alignment::Center => (content_width - *line_width) / 2.0,
                    Alignment::Right => content_width - *line_width,
                };
            if let Some(mut section) =
                area.text_section(&context.font_cache, Position::new(x, y), string.style)
            {
                section.print_str(&string.s, string.style)?;
            }
            y += *line_height;
        }

        let mut result = RenderResult::default();
        result.size = Size::new(width, height);
        Ok(result)
    }
}

/// A checklist line: an empty checkbox square followed by an indented,
/// wrapping label.
///
/// The square is stroked rather than typeset, so no glyph coverage is
/// assumed from the document fonts.
pub struct CheckboxLine {
    label: Paragraph,
    indent: Mm,
    side: Mm,
    gap: Mm,
    square_drawn: bool,
}

impl CheckboxLine {
    /// Creates a checkbox line with the given label text in the body style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: Paragraph::new(StyledString::new(text.into(), style::base_style())),
            indent: mm_from_f64(CHECKBOX_INDENT_MM),
            side: mm_from_f64(CHECKBOX_SIDE_MM),
            gap: mm_from_f64(CHECKBOX_GAP_MM),
            square_drawn: false,
        }
    }

    fn text_offset(&self) -> Mm {
        self.indent + self.side + self.gap
    }
}

impl Element for CheckboxLine {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut text_area = area.clone();
        text_area.add_margins(Margins::trbl(
            Mm::default(),
            Mm::default(),
            Mm::default(),
            self.text_offset(),
        ));
        let label_result = self.label.render(context, text_area, style)?;

        // The square belongs to the first rendered line; a label continued
        // on the next page must not repeat it.
        if label_result.size.height > Mm::default() && !self.square_drawn {
            self.square_drawn = true;
            let line_height = style.line_height(&context.font_cache);
            let top = (line_height - self.side) / 2.0;
            let left = self.indent;
            let mut square_style = Style::new();
            square_style.set_color(style::DARK_GRAY);
            area.draw_line(
                vec![
                    Position::new(left, top),
                    Position::new(left + self.side, top),
                    Position::new(left + self.side, top + self.side),
                    Position::new(left, top + self.side),
                    Position::new(left, top),
                ],
                square_style,
            );
        }

        let mut result = RenderResult::default();
        result.size = Size::new(area.size().width, label_result.size.height);
        result.has_more = label_result.has_more;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaded_box_builder_accumulates_paragraphs() {
        let boxed = ShadedBox::new()
            .with_fill(style::HIGHLIGHT_FILL)
            .with_border(style::TEAL)
            .with_paragraph("Title", style::callout_title_style(), Alignment::Center)
            .with_paragraph("Body", style::callout_body_style(), Alignment::Center);
        assert_eq!(boxed.paragraphs.len(), 2);
        assert_eq!(boxed.fill, Some(style::HIGHLIGHT_FILL));
        assert_eq!(boxed.border, Some(style::TEAL));
    }

    #[test]
    fn open_field_floor_is_configurable() {
        let field = ShadedBox::new().with_min_lines(4);
        assert_eq!(field.min_lines, 4);
        assert!(field.paragraphs.is_empty());
    }
}
