//! Section C: service packages and pricing.

use crate::model::{Banner, Block, HeadingLevel, Section};

use super::{body, note};

/// The full pricing section: package tables, cost explanation, and worked
/// examples.
pub(crate) fn pricing() -> Section {
    Section::new()
        .with_banner(Banner::new("SECTION C", "Service Packages & Pricing"))
        .with_block(Block::heading(HeadingLevel::One, "For Private Clients"))
        .with_block(Block::table(
            vec!["", "Private Solution"],
            vec![
                vec!["Investment", "€1,000 (one-time)"],
                vec![
                    "What's included",
                    "Full AI assistant setup, configuration, and personalization",
                ],
                vec![
                    "Hosting",
                    "Runs on your own hardware (PC, server, Raspberry Pi) — or we set up cloud \
                     hosting for you",
                ],
                vec!["Channels", "All your messaging apps + email"],
                vec!["Automations", "Custom workflows tailored to your needs"],
                vec!["Scheduling", "Unlimited scheduled tasks and briefings"],
                vec!["Smart Home", "Included if requested"],
                vec!["Personality", "Fully customized to your preferences"],
                vec!["Support", "Email support included during setup"],
                vec!["Delivery", "48–72 hours"],
            ],
            vec![1, 2],
        ))
        .with_block(Block::spacer(1.0))
        .with_block(body(
            "Note: The AI assistant requires an API subscription to an AI provider (e.g., \
             Anthropic, OpenAI, or others). This is a separate cost managed directly by you, \
             typically €5–€50/month depending on usage. We will guide you through the setup.",
        ))
        .with_block(Block::spacer(2.0))
        .with_block(Block::heading(HeadingLevel::One, "For Enterprise Clients"))
        .with_block(Block::table(
            vec!["", "Enterprise Solution"],
            vec![
                vec!["Investment", "From €5,000 (one-time)"],
                vec![
                    "What's included",
                    "Full deployment, integrations, custom workflows, team onboarding",
                ],
                vec!["Hosting", "Your own servers, your cloud, or we provide infrastructure"],
                vec!["Users", "Unlimited"],
                vec!["Channels", "All channels (chat, email, internal tools)"],
                vec!["Integrations", "All your existing tools connected"],
                vec!["Automations", "Unlimited custom workflows"],
                vec!["Reporting", "Dashboards and automated reports"],
                vec!["Compliance", "GDPR, SOC 2, industry-specific as needed"],
                vec!["Support", "Dedicated account manager during setup"],
                vec!["Delivery", "1–2 weeks depending on complexity"],
            ],
            vec![1, 2],
        ))
        .with_block(Block::spacer(1.0))
        .with_block(body(
            "Note: Enterprise pricing starts at €5,000 and varies based on the number of \
             integrations, custom workflows, and compliance requirements. API subscription \
             costs are managed directly by your organization.",
        ))
        .with_block(Block::spacer(2.0))
        .with_block(Block::heading(HeadingLevel::One, "Managed Service"))
        .with_block(Block::table(
            vec!["", "Managed"],
            vec![
                vec!["Price", "€300/month"],
                vec!["Installation", "Included (no separate setup fee)"],
                vec![
                    "Hosting",
                    "We provide and manage all infrastructure — or we manage it on your hardware",
                ],
                vec!["Updates & optimization", "Continuous, automatic"],
                vec!["Monitoring", "24/7 health monitoring"],
                vec!["Support", "Priority email and chat"],
                vec![
                    "Ideal for",
                    "Clients who want zero hassle — whether on our servers or yours",
                ],
            ],
            vec![1, 2],
        ))
        .with_block(Block::spacer(2.0))
        .with_block(Block::heading(
            HeadingLevel::One,
            "Ongoing Assistance (after 6 months)",
        ))
        .with_block(Block::table(
            vec!["", "Assistance"],
            vec![
                vec!["Price", "€500/month"],
                vec!["Available", "After the first 6 months of operation"],
                vec!["Priority support", "Dedicated response within hours"],
                vec!["Monthly optimization", "Performance review and improvement call"],
                vec!["New integrations", "Connect new tools and services on request"],
                vec!["Workflow updates", "Adapt automations as your needs evolve"],
                vec!["Ideal for", "Growing businesses that need continuous evolution"],
            ],
            vec![1, 2],
        ))
        .with_block(Block::spacer(2.0))
        .with_block(Block::heading(HeadingLevel::One, "Understanding the Costs"))
        .with_block(body(
            "Your AI assistant has two types of costs: our service fee (setup and management) \
             and the AI provider subscription (like a phone plan for your assistant). Here’s \
             how it works:",
        ))
        .with_block(body(
            "Our fee covers everything we do: designing your assistant, configuring it, \
             connecting your tools, and making sure it works perfectly. The AI provider fee is \
             what you pay for the ‘brain’ of your assistant — this goes directly to companies \
             like Anthropic or OpenAI, and depends on how much you use it.",
        ))
        .with_block(Block::spacer(1.0))
        .with_block(Block::heading(
            HeadingLevel::Two,
            "Estimated Monthly AI Provider Cost (Based on Your Usage)",
        ))
        .with_block(Block::table(
            vec!["Your Daily Usage", "Estimated Cost/Month", "What That Looks Like"],
            vec![
                vec![
                    "Light (5–10 tasks/day)",
                    "€5–€15",
                    "A few emails, calendar checks, daily briefing",
                ],
                vec![
                    "Moderate (20–50 tasks/day)",
                    "€15–€40",
                    "Email management, scheduling, research, content drafts",
                ],
                vec![
                    "Heavy (50–100 tasks/day)",
                    "€40–€80",
                    "Full inbox management, team automation, reports",
                ],
                vec![
                    "Intensive (100+ tasks/day)",
                    "€80–€200",
                    "Enterprise: customer support, lead qualification, multi-department",
                ],
            ],
            vec![4, 3, 6],
        ))
        .with_block(Block::spacer(1.0))
        .with_block(note(
            "These are approximate costs paid directly to the AI provider. We’ll help you pick \
             the most cost-effective option for your needs.",
        ))
        .with_block(Block::spacer(1.0))
        .with_block(Block::callout(
            "Example: Private client, moderate usage",
            "• Setup: €1,000 (one-time)\n\
             • AI provider: ~€25/month\n\
             • First year total: €1,000 + (€25 × 12) = €1,300\n\
             • That’s about €108/month for a 24/7 personal assistant",
        ))
        .with_block(Block::spacer(1.0))
        .with_block(Block::callout(
            "Example: Enterprise with Managed Service",
            "• Managed service: €300/month (installation included)\n\
             • AI provider: ~€60/month\n\
             • Total: €360/month\n\
             • For a team of 20, that’s just €18 per person per month",
        ))
        .with_block(Block::spacer(2.0))
        .with_block(Block::callout(
            "Why This Pays for Itself",
            "Our clients typically save 10–20 hours per week on repetitive tasks. At an \
             average rate of €50/hour, that's €2,000–€4,000/month in recovered productivity \
             — far exceeding the cost of the service.",
        ))
}
