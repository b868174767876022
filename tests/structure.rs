//! Structural assertions over the questionnaire model.
//!
//! These run without font assets: they check the literal content that the
//! renderer will draw, not the drawing itself.

use intake_questionnaire::content;
use intake_questionnaire::model::{Block, HeadingLevel};

#[test]
fn level_one_headings_appear_once_in_order() {
    let questionnaire = content::questionnaire();
    let headings: Vec<_> = questionnaire
        .headings()
        .filter(|(level, _)| *level == HeadingLevel::One)
        .map(|(_, text)| text.to_string())
        .collect();

    let expected = [
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
        "For Private Clients",
        "For Enterprise Clients",
        "Managed Service",
        "Ongoing Assistance (after 6 months)",
        "Understanding the Costs",
        "Your Choice",
    ];
    assert_eq!(headings, expected);
}

#[test]
fn capability_sections_repeat_the_same_eight_categories() {
    let questionnaire = content::questionnaire();
    let category_names: Vec<_> = content::capabilities()
        .iter()
        .map(|category| category.name())
        .collect();

    for title in [
        "A4. Choose What Your AI Assistant Should Do",
        "B3. Choose What Your AI Assistant Should Do",
    ] {
        let section = questionnaire
            .sections()
            .iter()
            .find(|section| section.title() == Some(title))
            .expect("capability section present");

        let subheadings: Vec<_> = section
            .blocks()
            .iter()
            .filter_map(|block| match block {
                Block::Heading(heading) if heading.level() == HeadingLevel::Two => {
                    Some(heading.text())
                }
                _ => None,
            })
            .collect();
        assert_eq!(subheadings, category_names);

        let checkbox_count = section
            .blocks()
            .iter()
            .filter(|block| matches!(block, Block::Checkbox(_)))
            .count();
        assert_eq!(checkbox_count, 40);
    }
}

#[test]
fn pricing_tables_match_the_published_packages() {
    let questionnaire = content::questionnaire();
    let pricing = questionnaire
        .sections()
        .iter()
        .find(|section| {
            section
                .banner()
                .is_some_and(|banner| banner.title() == "SECTION C")
        })
        .expect("pricing section present");

    let tables: Vec<_> = pricing
        .blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Table(spec) => Some(spec),
            _ => None,
        })
        .collect();

    let row_counts: Vec<_> = tables.iter().map(|spec| spec.rows().len()).collect();
    assert_eq!(row_counts, vec![10, 11, 7, 7, 4]);

    for spec in &tables[..4] {
        assert_eq!(spec.headers().len(), 2);
        assert!(spec.is_well_formed());
    }
    let cost_table = tables[4];
    assert_eq!(
        cost_table.headers(),
        &[
            "Your Daily Usage".to_string(),
            "Estimated Cost/Month".to_string(),
            "What That Looks Like".to_string(),
        ]
    );
    assert!(cost_table.is_well_formed());
}

#[test]
fn cover_is_untitled_and_centered_content_only() {
    let questionnaire = content::questionnaire();
    let cover = &questionnaire.sections()[0];
    assert!(cover.title().is_none());
    assert!(cover.banner().is_none());
    assert!(matches!(cover.blocks()[0], Block::Spacer(_)));
}

#[test]
fn closing_section_collects_signature_lines() {
    let questionnaire = content::questionnaire();
    let closing = questionnaire
        .sections()
        .iter()
        .find(|section| {
            section
                .banner()
                .is_some_and(|banner| banner.title() == "SECTION D")
        })
        .expect("closing section present");

    let labels: Vec<_> = closing
        .blocks()
        .iter()
        .filter_map(|block| match block {
            Block::AnswerLine(line) => line.label(),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Signature", "Date"]);

    let callout_titles: Vec<_> = closing
        .blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Callout(callout) => Some(callout.title()),
            _ => None,
        })
        .collect();
    assert_eq!(callout_titles, vec!["Amenthyx — AI Automation Experts"]);
}

#[test]
fn open_fields_use_the_published_heights() {
    let questionnaire = content::questionnaire();
    let heights: Vec<_> = questionnaire
        .blocks()
        .filter_map(|block| match block {
            Block::OpenField(field) => Some(field.lines()),
            _ => None,
        })
        .collect();
    // A1 frustrations, A5 custom automations, B2 other pain points,
    // B4 custom workflows, D4 anything else.
    assert_eq!(heights, vec![4, 6, 4, 8, 6]);
}
