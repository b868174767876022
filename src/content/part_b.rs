//! Part B: the enterprise-client questionnaire sections.

use crate::model::{Banner, Block, Section};

use super::{
    body, capabilities::capabilities_section, category, checkboxes, lead, question, ratings,
    OTHER_LINE,
};

/// B1. Company Profile, introduced by the PART B divider banner.
pub(crate) fn company_profile() -> Section {
    Section::titled("B1. Company Profile")
        .with_banner(Banner::new(
            "PART B",
            "Your Business AI Assistant — Tell Us About Your Company",
        ))
        .with_block(question("1. Company Name:"))
        .with_block(Block::answer_line(65))
        .with_block(question("2. Your Name & Role:"))
        .with_block(Block::answer_line(65))
        .with_block(question("3. Industry:"))
        .with_blocks(checkboxes([
            "Real Estate",
            "E-commerce / Retail",
            "Healthcare",
            "Finance / Banking",
            "Legal",
            "Marketing / Creative",
            "Technology / SaaS",
            "Education",
            "Hospitality / Tourism",
            "Manufacturing",
            "Consulting",
            "Logistics",
        ]))
        .with_block(Block::checkbox(OTHER_LINE))
        .with_block(Block::spacer(1.0))
        .with_block(question("4. Number of Employees:"))
        .with_blocks(checkboxes(["2–10", "11–50", "51–200", "200–1,000", "1,000+"]))
        .with_block(Block::spacer(1.0))
        .with_block(question("5. How many departments would use the AI assistant?"))
        .with_blocks(checkboxes([
            "Just mine",
            "2–3 departments",
            "Company-wide",
            "Not sure yet",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question("6. Annual revenue range (helps us size the solution):"))
        .with_blocks(checkboxes([
            "Under €100K",
            "€100K–500K",
            "€500K–2M",
            "€2M–10M",
            "€10M+",
            "Prefer not to say",
        ]))
}

/// B2. Current Pain Points.
pub(crate) fn pain_points() -> Section {
    Section::titled("B2. Current Pain Points")
        .with_block(lead(
            "What wastes the most time in your organization? Rate each from 1 (minor issue) to \
             5 (major bottleneck):",
        ))
        .with_blocks(ratings([
            "Answering repetitive customer questions",
            "Manual data entry and report creation",
            "Scheduling and coordination between teams",
            "Email overload and slow response times",
            "Lead follow-up falling through the cracks",
            "Document review and approval processes",
            "Onboarding new employees",
            "Invoice processing and expense management",
            "Social media and marketing content",
            "IT support and troubleshooting",
            "Compliance and regulatory tasks",
            "Inventory and supply chain tracking",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question("Other pain points you'd like to mention:"))
        .with_block(Block::open_field(4))
}

/// B3. The shared capability checklist for enterprise clients.
pub(crate) fn capability_choices() -> Section {
    capabilities_section("B3. Choose What Your AI Assistant Should Do")
}

/// B4. Integration & Automation Priorities.
pub(crate) fn automation_priorities() -> Section {
    Section::titled("B4. Integration & Automation Priorities")
        .with_block(lead(
            "Which workflows would you like the AI assistant to automate? Rate each from 1 \
             (low priority) to 5 (high priority):",
        ))
        .with_block(category("Customer-Facing"))
        .with_blocks(ratings([
            "Answer customer questions via chat / email automatically",
            "Qualify leads and route to the right sales rep",
            "Send follow-up emails after meetings or inquiries",
            "Handle appointment booking for clients",
            "Process returns, refunds, or complaint tickets",
            "Collect customer feedback automatically",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Internal Operations"))
        .with_blocks(ratings([
            "Generate weekly / monthly reports from your data",
            "Summarize meeting notes and distribute action items",
            "Automate invoice creation and send payment reminders",
            "Route internal requests to the right department",
            "Monitor key performance indicators and alert when something is off",
            "Automate employee onboarding checklists",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Marketing & Sales"))
        .with_blocks(ratings([
            "Create and schedule social media posts",
            "Write email newsletters and campaigns",
            "Track campaign performance and generate reports",
            "Monitor competitor activity and industry news",
            "Generate product descriptions and marketing copy",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Data & Documents"))
        .with_blocks(ratings([
            "Extract data from documents (invoices, contracts, forms)",
            "Keep databases and spreadsheets synchronized",
            "Generate formatted reports from raw data",
            "Ensure compliance documents are up to date",
            "Archive and organize company documents",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("IT & Development (if applicable)"))
        .with_blocks(ratings([
            "Monitor servers and alert on issues",
            "Automate deployment and testing pipelines",
            "Manage code reviews and pull requests",
            "Track bugs and prioritize them",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Custom Workflows"))
        .with_block(lead(
            "Describe any specific process unique to your business that you'd love to automate:",
        ))
        .with_block(Block::open_field(8))
}

/// B5. Compliance & Security.
pub(crate) fn compliance() -> Section {
    Section::titled("B5. Compliance & Security")
        .with_block(question("1. What type of data will the AI assistant handle?"))
        .with_blocks(checkboxes([
            "General business data (not sensitive)",
            "Customer personal data (names, emails, phones)",
            "Financial / payment data",
            "Health / medical records",
            "Legal / confidential documents",
            "Trade secrets / intellectual property",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question("2. Compliance requirements:"))
        .with_blocks(checkboxes([
            "GDPR",
            "HIPAA",
            "SOC 2",
            "PCI-DSS",
            "ISO 27001",
            "None / Not sure",
        ]))
        .with_block(Block::checkbox("Industry-specific: ___________________________"))
        .with_block(Block::spacer(1.0))
        .with_block(question("3. Data hosting preference:"))
        .with_blocks(checkboxes([
            "Must stay on our own servers (on-premise)",
            "Private cloud in EU",
            "Private cloud (any region)",
            "No preference",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question("4. Available infrastructure:"))
        .with_block(body(
            "(The AI assistant needs hardware to run on. Do you already have something \
             available?)",
        ))
        .with_blocks(checkboxes([
            "We have our own servers (on-premise or data center)",
            "We already use cloud infrastructure (AWS, Azure, Google Cloud, etc.)",
            "We have a dedicated machine or NAS we can use",
            "We don’t have infrastructure — we’d like you to handle hosting (Managed Service)",
            "Not sure — let’s discuss during the proposal",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question(
            "5. Who should approve AI actions before they are executed?",
        ))
        .with_blocks(checkboxes([
            "Nobody — fully autonomous is fine",
            "Manager approval for external actions (emails, messages to clients)",
            "Approval for all actions",
            "Depends on the action (we'll define rules together)",
        ]))
}

/// B6. Scale & Growth.
pub(crate) fn scale() -> Section {
    Section::titled("B6. Scale & Growth")
        .with_block(question(
            "1. How many people will interact with the AI assistant daily?",
        ))
        .with_blocks(checkboxes(["1–5", "5–20", "20–100", "100+"]))
        .with_block(Block::spacer(1.0))
        .with_block(question("2. Expected daily tasks for the AI assistant:"))
        .with_blocks(checkboxes(["Less than 20", "20–100", "100–500", "500+"]))
        .with_block(Block::spacer(1.0))
        .with_block(question("3. How fast does it need to respond?"))
        .with_blocks(checkboxes([
            "Instant (under 5 seconds)",
            "Quick (under 30 seconds)",
            "Background processing is fine",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question("4. Growth plans in the next 12 months?"))
        .with_blocks(checkboxes([
            "Stay the same",
            "Double our usage",
            "5x growth",
            "Planning rapid expansion",
        ]))
}
