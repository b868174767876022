//! Cover page and welcome letter.

use crate::model::{Block, HorizontalAlignment, Section, TextBlock};
use crate::style::{DARK_GRAY, DARK_TEAL, MED_GRAY, TEAL};
use crate::text::Run;

fn centered(run: Run) -> Block {
    Block::Text(TextBlock::new(vec![run]).with_alignment(HorizontalAlignment::Center))
}

/// The cover page: title stack, tagline, company line, and confidentiality
/// note, all centered.
pub(crate) fn cover() -> Section {
    Section::new()
        .with_block(Block::spacer(6.0))
        .with_block(centered(
            Run::new("AI Assistant Solutions").bold().colored(TEAL).sized(28),
        ))
        .with_block(centered(
            Run::new("Personal Consultation").bold().colored(TEAL).sized(22),
        ))
        .with_block(Block::spacer(1.0))
        .with_block(centered(
            Run::new("Tell us about your world. We'll build the perfect AI assistant for you.")
                .italic()
                .colored(DARK_GRAY)
                .sized(14),
        ))
        .with_block(Block::spacer(2.0))
        .with_block(centered(
            Run::new("Amenthyx — AI Automation Experts")
                .bold()
                .colored(DARK_TEAL)
                .sized(16),
        ))
        .with_block(centered(Run::new("February 2026").colored(DARK_GRAY).sized(14)))
        .with_block(Block::spacer(4.0))
        .with_block(centered(
            Run::new("Confidential — Your answers help us build your personalized solution")
                .italic()
                .colored(MED_GRAY)
                .sized(9),
        ))
}

/// The welcome letter that precedes the questionnaire parts.
pub(crate) fn welcome() -> Section {
    let paragraphs = [
        "Thank you for your interest in working with us. We are genuinely excited to learn \
         about your world and find ways to make your day easier.",
        "This questionnaire takes about 15 minutes to complete. There are no wrong answers \
         — we simply want to understand how you spend your time, what tools you already \
         use, and where an AI assistant could make the biggest difference for you.",
        "Once we receive your completed questionnaire, our team will analyze your answers \
         and come back to you with a tailored proposal within 48 hours. The proposal will \
         include a clear recommendation, a transparent price, and a timeline for getting \
         your assistant up and running.",
        "Everything you share with us is strictly confidential and will only be used to \
         design your solution.",
        "If any question does not apply to you, feel free to skip it. If you are unsure \
         about something, just write a short note and we will clarify it together during \
         our follow-up call.",
        "We look forward to building something great for you.",
    ];

    let mut section = Section::titled("Welcome");
    for paragraph in paragraphs {
        section = section.with_block(super::body(paragraph));
    }
    section
        .with_block(Block::spacer(1.0))
        .with_block(Block::text(vec![Run::new("Warm regards,").italic().colored(TEAL)]))
        .with_block(Block::text(vec![Run::new("The Amenthyx Team").italic().colored(TEAL)]))
}
