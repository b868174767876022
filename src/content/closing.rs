//! Section D: authorization, next steps, and contact information.

use crate::model::{Banner, Block, HeadingLevel, Section};

use super::{body, checkboxes, question, OTHER_LINE};

/// The closing section: solution choice, authorization, and contact box.
pub(crate) fn authorization() -> Section {
    Section::new()
        .with_banner(Banner::new("SECTION D", "Authorization & Next Steps"))
        .with_block(Block::heading(HeadingLevel::One, "Your Choice"))
        .with_block(question("1. Which solution interests you?"))
        .with_blocks(checkboxes([
            "Private (€1,000)",
            "Enterprise (from €5,000)",
            "Managed Service (€300/month — installation included)",
            "Not sure yet — let’s discuss",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question(
            "2. Are you interested in Ongoing Assistance (€500/month, available after 6 \
             months)?",
        ))
        .with_blocks(checkboxes(["Yes", "No", "Tell me more"]))
        .with_block(Block::spacer(1.0))
        .with_block(question("3. Preferred start date:"))
        .with_block(Block::answer_line(65))
        .with_block(Block::spacer(1.0))
        .with_block(question("4. Anything else you'd like us to know?"))
        .with_block(Block::open_field(6))
        .with_block(Block::spacer(1.0))
        .with_block(question("5. How did you hear about us?"))
        .with_blocks(checkboxes([
            "Word of mouth",
            "Social media",
            "Google search",
            "LinkedIn",
            "Event or conference",
        ]))
        .with_block(Block::checkbox(OTHER_LINE))
        .with_block(Block::spacer(1.0))
        .with_block(question("6. Authorization"))
        .with_block(body(
            "By signing below, you authorize our team to use the information provided in this \
             questionnaire to design and build a tailored AI assistant solution on your behalf.",
        ))
        .with_block(Block::spacer(1.0))
        .with_block(Block::labelled_answer_line("Signature", 65))
        .with_block(Block::labelled_answer_line("Date", 65))
        .with_block(Block::spacer(2.0))
        .with_block(Block::heading(HeadingLevel::Two, "Contact Information"))
        .with_block(Block::callout(
            "Amenthyx — AI Automation Experts",
            "\nGitHub: https://github.com/Amenthyx\n\
             Deployment Toolkit: https://github.com/Amenthyx/claw-one-click-deploy\n\
             Assessment Toolkit: https://github.com/Amenthyx/claw-client-assessment",
        ))
}
