//! The fixed literal content of the questionnaire.
//!
//! One function per section, purely additive: each returns a [`Section`]
//! built from the model's blocks, and [`questionnaire`] assembles them in
//! the fixed presentation order. Nothing here reads external input.

mod capabilities;
mod closing;
mod intro;
mod part_a;
mod part_b;
mod pricing;

pub use capabilities::{capabilities, Category};

use crate::model::{Block, HeadingLevel, Questionnaire};
use crate::style::{MED_GRAY, TEAL};
use crate::text::Run;

/// Assembles the complete questionnaire in presentation order.
pub fn questionnaire() -> Questionnaire {
    Questionnaire::new(vec![
        intro::cover(),
        intro::welcome(),
        part_a::about_you(),
        part_a::digital_life(),
        part_a::assistant_wishes(),
        part_a::capability_choices(),
        part_a::integrations(),
        part_a::privacy(),
        part_b::company_profile(),
        part_b::pain_points(),
        part_b::capability_choices(),
        part_b::automation_priorities(),
        part_b::compliance(),
        part_b::scale(),
        pricing::pricing(),
        closing::authorization(),
    ])
}

/// Blank rule appended after "check all that apply" lists.
pub(crate) const OTHER_LINE: &str = "Other: ___________________________";

/// A plain body paragraph.
pub(crate) fn body(text: &str) -> Block {
    Block::text(vec![Run::new(text)])
}

/// A bold question line.
pub(crate) fn question(text: &str) -> Block {
    Block::text(vec![Run::new(text).bold()])
}

/// An italic introduction paragraph in the body color.
pub(crate) fn lead(text: &str) -> Block {
    Block::text(vec![Run::new(text).italic()])
}

/// An italic side note in the muted color.
pub(crate) fn note(text: &str) -> Block {
    Block::text(vec![Run::new(text).italic().colored(MED_GRAY)])
}

/// A bold teal group label inside a section.
pub(crate) fn category(text: &str) -> Block {
    Block::text(vec![Run::new(text).bold().colored(TEAL)])
}

/// A level-2 heading block.
pub(crate) fn subheading(text: &str) -> Block {
    Block::heading(HeadingLevel::Two, text)
}

/// One checkbox block per item.
pub(crate) fn checkboxes<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<Block> {
    items.into_iter().map(Block::checkbox).collect()
}

/// One rating block per item.
pub(crate) fn ratings<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<Block> {
    items.into_iter().map(Block::rating).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_appear_in_presentation_order() {
        let questionnaire = questionnaire();
        let titles: Vec<_> = questionnaire
            .sections()
            .iter()
            .filter_map(|section| section.title())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Welcome",
                "A1. About You",
                "A2. Your Digital Life",
                "A3. What Would You Love Your AI Assistant To Do?",
                "A4. Choose What Your AI Assistant Should Do",
                "A5. Integration & Automation",
                "A6. Privacy & Preferences",
                "B1. Company Profile",
                "B2. Current Pain Points",
                "B3. Choose What Your AI Assistant Should Do",
                "B4. Integration & Automation Priorities",
                "B5. Compliance & Security",
                "B6. Scale & Growth",
            ]
        );
    }

    #[test]
    fn banners_divide_the_four_parts() {
        let questionnaire = questionnaire();
        let banners: Vec<_> = questionnaire
            .sections()
            .iter()
            .filter_map(|section| section.banner())
            .map(|banner| banner.title())
            .collect();
        assert_eq!(banners, vec!["PART A", "PART B", "SECTION C", "SECTION D"]);
    }

    #[test]
    fn level_one_headings_are_unique() {
        let questionnaire = questionnaire();
        let mut seen = std::collections::HashSet::new();
        for (level, text) in questionnaire.headings() {
            if level == HeadingLevel::One {
                assert!(seen.insert(text.to_string()), "duplicate heading: {text}");
            }
        }
    }
}
