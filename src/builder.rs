//! Document-wide defaults for the questionnaire renderer.
//!
//! The questionnaire uses one page shape throughout: uniform margins and a
//! short page-number strip at the bottom. [`DocumentBuilder`] wires those
//! defaults into a `genpdf::Document` together with the bundled fonts and
//! the PDF title metadata.

use genpdf::error::{Error, ErrorKind};
use genpdf::style::Style;
use genpdf::{self, Element, Margins, Mm, PageDecorator, Position};

use crate::elements::mm_to_f64;
use crate::fonts;
use crate::style::BODY_SIZE;

/// Builder for `genpdf::Document` instances pre-configured with the
/// questionnaire defaults.
#[derive(Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    margins: Option<Margins>,
    footer: Option<Footer>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the uniform page margins.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Reserves a strip of the given height at the bottom of every page and
    /// fills it with the element `make` produces from the 1-based page
    /// number.
    pub fn with_page_footer<F, E>(mut self, height: impl Into<Mm>, make: F) -> Self
    where
        F: Fn(usize) -> E + 'static,
        E: Element + 'static,
    {
        self.footer = Some(Footer {
            height: height.into(),
            make: Box::new(move |page| Box::new(make(page)) as Box<dyn Element>),
        });
        self
    }

    /// Builds a fully configured `genpdf::Document` instance.
    pub fn build(self) -> Result<genpdf::Document, Error> {
        let family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(family);
        document.set_font_size(BODY_SIZE);

        if let Some(title) = self.title {
            document.set_title(title);
        }

        document.set_page_decorator(PageFrame {
            number: 0,
            margins: self.margins,
            footer: self.footer,
        });

        Ok(document)
    }
}

/// The reserved footer strip and the element factory that fills it.
struct Footer {
    height: Mm,
    make: Box<dyn Fn(usize) -> Box<dyn Element>>,
}

/// Page decorator applying the questionnaire's margins and footer strip to
/// every page.
struct PageFrame {
    number: usize,
    margins: Option<Margins>,
    footer: Option<Footer>,
}

impl PageDecorator for PageFrame {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.number += 1;

        if let Some(margins) = self.margins {
            area.add_margins(margins);
        }

        let Some(footer) = &self.footer else {
            return Ok(area);
        };

        // The strip is carved out of whatever the margins left over, before
        // any blocks are laid out on the page.
        let body_height = area.size().height;
        if body_height < footer.height {
            return Err(Error::new(
                format!(
                    "the {:.1} mm footer strip does not fit into the {:.1} mm of page left \
                     inside the margins",
                    mm_to_f64(footer.height),
                    mm_to_f64(body_height)
                ),
                ErrorKind::InvalidData,
            ));
        }

        let mut strip = area.clone();
        strip.add_offset(Position::new(0, body_height - footer.height));
        let mut element = (footer.make)(self.number);
        let rendered = element.render(context, strip, style)?;
        if rendered.has_more {
            return Err(Error::new(
                "the page footer content overflows its reserved strip",
                ErrorKind::PageSizeExceeded,
            ));
        }

        area.set_height(body_height - footer.height);
        Ok(area)
    }
}
