//! Inline text fragments with styling attributes.
//!
//! A [`Run`] is one stretch of text inside a paragraph that shares a single
//! set of inline decorations. Paragraphs in the questionnaire model carry a
//! vector of runs, which the renderer converts into [`genpdf`]
//! [`StyledString`]s by merging the run attributes over the base body style.

use genpdf::style::{Color, Style, StyledString};

use crate::style;

/// A slice of text together with its inline attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    text: String,
    bold: bool,
    italic: bool,
    color: Option<Color>,
    size: Option<u8>,
}

impl Run {
    /// Creates a run with the provided text and no decorations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text of this run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the run renders bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the run renders italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns the color override for this run, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the font-size override for this run, if any.
    pub fn size(&self) -> Option<u8> {
        self.size
    }

    /// Marks the run as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the run as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Assigns a color to the run.
    pub fn colored(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Overrides the font size of the run.
    pub fn sized(self, size: u8) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    /// Builds the effective [`Style`]: the base body style with this run's
    /// attributes applied on top.
    pub fn to_style(&self) -> Style {
        let mut style = style::base_style();
        if let Some(size) = self.size {
            style.set_font_size(size);
        }
        if let Some(color) = self.color {
            style.set_color(color);
        }
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Converts the run to a [`StyledString`].
    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(self.text.clone(), self.to_style())
    }
}

impl From<&Run> for StyledString {
    fn from(run: &Run) -> Self {
        run.to_styled_string()
    }
}

impl From<Run> for StyledString {
    fn from(run: Run) -> Self {
        run.to_styled_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DARK_GRAY, TEAL};

    #[test]
    fn run_defaults_to_body_style() {
        let styled = Run::new("plain").to_styled_string();
        assert_eq!(styled.s, "plain");
        assert_eq!(styled.style.font_size(), crate::style::BODY_SIZE);
        assert_eq!(styled.style.color(), Some(DARK_GRAY));
        assert!(!styled.style.is_bold());
    }

    #[test]
    fn run_attributes_override_the_base() {
        let styled = Run::new("accent").bold().colored(TEAL).sized(16).to_styled_string();
        assert!(styled.style.is_bold());
        assert_eq!(styled.style.color(), Some(TEAL));
        assert_eq!(styled.style.font_size(), 16);
    }
}
