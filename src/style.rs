//! The questionnaire's fixed visual design: colors, sizes, and the
//! [`Style`] values derived from them.
//!
//! Every constant here is process-wide and immutable. Content builders and
//! the renderer reference these tokens instead of spelling out raw values so
//! the whole document stays visually consistent.

use genpdf::style::{Color, Style};

use crate::model::HeadingLevel;

/// Primary accent used for headings, banners, and callout borders.
pub const TEAL: Color = Color::Rgb(0, 102, 153);
/// Darker accent used for the company line on the cover.
pub const DARK_TEAL: Color = Color::Rgb(0, 80, 120);
/// Default body text color.
pub const DARK_GRAY: Color = Color::Rgb(51, 51, 51);
/// Muted color for fine print and side notes.
pub const MED_GRAY: Color = Color::Rgb(120, 120, 120);
/// Color of ruled answer lines.
pub const LIGHT_LINE: Color = Color::Rgb(180, 180, 180);
/// Text color on shaded banner and table-header backgrounds.
pub const WHITE: Color = Color::Rgb(255, 255, 255);

/// Fill behind table header rows and section banners.
pub const TABLE_HEADER_FILL: Color = TEAL;
/// Fill behind every second table data row.
pub const ALT_ROW_FILL: Color = Color::Rgb(242, 242, 242);
/// Fill behind highlighted callout boxes.
pub const HIGHLIGHT_FILL: Color = Color::Rgb(232, 244, 248);
/// Fill behind free-text answer fields.
pub const FIELD_FILL: Color = Color::Rgb(247, 247, 247);
/// Border color of free-text answer fields.
pub const FIELD_BORDER: Color = Color::Rgb(204, 204, 204);

/// Default body font size in points.
pub const BODY_SIZE: u8 = 11;
/// Font size of table header cells.
pub const TABLE_HEADER_SIZE: u8 = 10;
/// Font size of table data cells.
pub const TABLE_CELL_SIZE: u8 = 9;
/// Font size of the large kicker line on section banners.
pub const BANNER_TITLE_SIZE: u8 = 20;
/// Font size of the banner subtitle line.
pub const BANNER_SUBTITLE_SIZE: u8 = 14;
/// Font size of callout box titles.
pub const CALLOUT_TITLE_SIZE: u8 = 12;
/// Font size of callout box body text.
pub const CALLOUT_BODY_SIZE: u8 = 10;
/// Font size of the page-number footer.
pub const FOOTER_SIZE: u8 = 8;

/// Default style for body text.
pub fn base_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(BODY_SIZE);
    style.set_color(DARK_GRAY);
    style
}

/// Teal bold style for a heading of the given level.
pub fn heading_style(level: HeadingLevel) -> Style {
    let size = match level {
        HeadingLevel::One => 18,
        HeadingLevel::Two => 14,
        HeadingLevel::Three => 12,
    };
    let mut style = Style::new();
    style.set_font_size(size);
    style.set_color(TEAL);
    style.set_bold();
    style
}

/// Large bold white style for the kicker line of a section banner.
pub fn banner_title_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(BANNER_TITLE_SIZE);
    style.set_color(WHITE);
    style.set_bold();
    style
}

/// White style for the subtitle line of a section banner.
pub fn banner_subtitle_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(BANNER_SUBTITLE_SIZE);
    style.set_color(WHITE);
    style
}

/// Bold teal style for callout box titles.
pub fn callout_title_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(CALLOUT_TITLE_SIZE);
    style.set_color(TEAL);
    style.set_bold();
    style
}

/// Body style for callout box text.
pub fn callout_body_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(CALLOUT_BODY_SIZE);
    style.set_color(DARK_GRAY);
    style
}

/// Bold white style for table header cells.
pub fn table_header_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(TABLE_HEADER_SIZE);
    style.set_color(WHITE);
    style.set_bold();
    style
}

/// Style for table data cells.
pub fn table_cell_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(TABLE_CELL_SIZE);
    style.set_color(DARK_GRAY);
    style
}

/// Light-gray style for the underscore rule of an answer line.
pub fn answer_rule_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(BODY_SIZE);
    style.set_color(LIGHT_LINE);
    style
}

/// Muted small style for the page-number footer.
pub fn footer_style() -> Style {
    let mut style = Style::new();
    style.set_font_size(FOOTER_SIZE);
    style.set_color(MED_GRAY);
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_sizes_shrink_with_level() {
        let h1 = heading_style(HeadingLevel::One);
        let h2 = heading_style(HeadingLevel::Two);
        let h3 = heading_style(HeadingLevel::Three);
        assert!(h1.font_size() > h2.font_size());
        assert!(h2.font_size() > h3.font_size());
        assert!(h1.is_bold());
    }

    #[test]
    fn base_style_uses_body_tokens() {
        let style = base_style();
        assert_eq!(style.font_size(), BODY_SIZE);
        assert_eq!(style.color(), Some(DARK_GRAY));
    }
}
