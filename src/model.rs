//! Data structures describing the logical content of the questionnaire.
//!
//! The types in this module form a small content model that mirrors the
//! building blocks the renderer knows how to draw. Content builders assemble
//! [`Section`] values out of [`Block`]s; the model is append-only during
//! assembly and rendered exactly once per run. Keeping the content separate
//! from the rendering crate makes the document structure checkable in tests
//! without loading any fonts.

use crate::text::Run;

/// Heading levels supported by the questionnaire layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Major section heading ("A1. About You").
    One,
    /// Sub-heading within a section (capability categories).
    Two,
    /// Minor heading.
    Three,
}

/// A styled heading line.
#[derive(Clone, Debug, PartialEq)]
pub struct Heading {
    level: HeadingLevel,
    text: String,
}

impl Heading {
    /// Creates a heading with the given level and text.
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Returns the heading level.
    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    /// Returns the heading text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Horizontal alignment of a text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
}

/// A paragraph carrying styled runs and alignment metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextBlock {
    runs: Vec<Run>,
    alignment: HorizontalAlignment,
}

impl TextBlock {
    /// Creates a left-aligned paragraph from the provided runs.
    pub fn new(runs: impl Into<Vec<Run>>) -> Self {
        Self {
            runs: runs.into(),
            ..Self::default()
        }
    }

    /// Returns the runs that make up the paragraph.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Sets the alignment and returns the updated paragraph.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// A labelled blank line for a written answer.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerLine {
    label: Option<String>,
    width: usize,
}

impl AnswerLine {
    /// Creates an unlabelled answer line of `width` underscores.
    pub fn new(width: usize) -> Self {
        Self { label: None, width }
    }

    /// Sets the bold label rendered before the rule.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the rule width in underscore characters.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// A shaded, bordered free-text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenField {
    lines: usize,
}

impl OpenField {
    /// Creates an open field `lines` blank text lines tall.
    pub fn new(lines: usize) -> Self {
        Self { lines }
    }

    /// Returns the height of the field in blank lines.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

/// A bordered table with a shaded header row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSpec {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    weights: Vec<usize>,
}

impl TableSpec {
    /// Creates a table spec from literal header, row, and weight data.
    pub fn new(headers: Vec<&str>, rows: Vec<Vec<&str>>, weights: Vec<usize>) -> Self {
        let spec = Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
            weights,
        };
        debug_assert!(spec.is_well_formed(), "malformed table literal");
        spec
    }

    /// Returns the header cells.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the relative column weights.
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// Whether every row matches the header arity and a weight exists per
    /// column. The renderer refuses malformed specs with a descriptive
    /// error.
    pub fn is_well_formed(&self) -> bool {
        !self.headers.is_empty()
            && self.weights.len() == self.headers.len()
            && self.rows.iter().all(|row| row.len() == self.headers.len())
    }
}

/// A shaded callout box with a centered title and body.
#[derive(Clone, Debug, PartialEq)]
pub struct Callout {
    title: String,
    body: String,
}

impl Callout {
    /// Creates a callout. Newlines in `body` become separate lines.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns the callout title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the callout body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A full-width shaded divider introducing a document part.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    title: String,
    subtitle: String,
}

impl Banner {
    /// Creates a banner with a kicker title and a subtitle line.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Returns the kicker title ("PART A").
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the subtitle line.
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

/// Individual content blocks that make up a section.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// A styled heading line.
    Heading(Heading),
    /// Styled paragraph content.
    Text(TextBlock),
    /// One checkable item line.
    Checkbox(String),
    /// One 1-to-5 rating line.
    Rating(String),
    /// A ruled blank line for a written answer.
    AnswerLine(AnswerLine),
    /// A shaded free-text box.
    OpenField(OpenField),
    /// A bordered table with a shaded header row.
    Table(TableSpec),
    /// A shaded callout box.
    Callout(Callout),
    /// Vertical whitespace measured in text lines.
    Spacer(f64),
}

impl Block {
    /// Convenience helper for building a heading block.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading(Heading::new(level, text))
    }

    /// Convenience helper for building a paragraph block.
    pub fn text(runs: impl Into<Vec<Run>>) -> Self {
        Self::Text(TextBlock::new(runs))
    }

    /// Convenience helper for building a checkbox line.
    pub fn checkbox(text: impl Into<String>) -> Self {
        Self::Checkbox(text.into())
    }

    /// Convenience helper for building a rating line.
    pub fn rating(text: impl Into<String>) -> Self {
        Self::Rating(text.into())
    }

    /// Convenience helper for an unlabelled answer line.
    pub fn answer_line(width: usize) -> Self {
        Self::AnswerLine(AnswerLine::new(width))
    }

    /// Convenience helper for a labelled answer line.
    pub fn labelled_answer_line(label: impl Into<String>, width: usize) -> Self {
        Self::AnswerLine(AnswerLine::new(width).with_label(label))
    }

    /// Convenience helper for an open free-text field.
    pub fn open_field(lines: usize) -> Self {
        Self::OpenField(OpenField::new(lines))
    }

    /// Convenience helper for a table block.
    pub fn table(headers: Vec<&str>, rows: Vec<Vec<&str>>, weights: Vec<usize>) -> Self {
        Self::Table(TableSpec::new(headers, rows, weights))
    }

    /// Convenience helper for a callout block.
    pub fn callout(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Callout(Callout::new(title, body))
    }

    /// Convenience helper for vertical whitespace of `lines` text lines.
    pub fn spacer(lines: f64) -> Self {
        Self::Spacer(lines)
    }
}

/// One page-break-delimited chunk of the questionnaire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    banner: Option<Banner>,
    title: Option<String>,
    blocks: Vec<Block>,
}

impl Section {
    /// Creates an empty section without banner or title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty section with a level-1 title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Returns the banner, if any.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Returns the section title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the blocks contained in the section.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Sets the banner and returns the updated section.
    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Appends a block and returns the updated section.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Extends the section with additional blocks and returns the updated
    /// instance.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.blocks.extend(blocks);
        self
    }
}

/// The complete questionnaire: an ordered list of sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Questionnaire {
    sections: Vec<Section>,
}

impl Questionnaire {
    /// Creates a questionnaire from its sections in presentation order.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Returns the sections in presentation order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Iterates over every block of every section in document order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.sections.iter().flat_map(|section| section.blocks().iter())
    }

    /// Iterates over every heading in document order, section titles
    /// included.
    pub fn headings(&self) -> impl Iterator<Item = (HeadingLevel, &str)> + '_ {
        self.sections.iter().flat_map(|section| {
            section
                .title()
                .map(|title| (HeadingLevel::One, title))
                .into_iter()
                .chain(section.blocks().iter().filter_map(|block| match block {
                    Block::Heading(heading) => Some((heading.level(), heading.text())),
                    _ => None,
                }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_chaining_preserves_order() {
        let section = Section::titled("Intro")
            .with_block(Block::checkbox("first"))
            .with_blocks([Block::spacer(1.0), Block::checkbox("second")]);

        assert_eq!(section.title(), Some("Intro"));
        assert_eq!(section.blocks().len(), 3);
        assert!(matches!(section.blocks()[2], Block::Checkbox(ref s) if s == "second"));
    }

    #[test]
    fn headings_walk_titles_and_heading_blocks() {
        let questionnaire = Questionnaire::new(vec![
            Section::new().with_block(Block::text(Vec::new())),
            Section::titled("First")
                .with_block(Block::heading(HeadingLevel::Two, "Nested")),
            Section::titled("Second"),
        ]);

        let headings: Vec<_> = questionnaire.headings().collect();
        assert_eq!(
            headings,
            vec![
                (HeadingLevel::One, "First"),
                (HeadingLevel::Two, "Nested"),
                (HeadingLevel::One, "Second"),
            ]
        );
    }

    #[test]
    fn table_spec_rejects_ragged_rows() {
        let ragged = TableSpec {
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec!["only one".into()]],
            weights: vec![1, 2],
        };
        assert!(!ragged.is_well_formed());

        let square = TableSpec::new(vec!["a", "b"], vec![vec!["1", "2"]], vec![1, 2]);
        assert!(square.is_well_formed());
    }
}
