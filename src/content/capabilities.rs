//! The shared 40-item capability checklist.
//!
//! Private and enterprise clients pick from the same capability catalogue,
//! so sections A4 and B3 emit this list identically under their own
//! headings.

use crate::model::{Block, Section};

use super::{checkboxes, lead, subheading};

const CAPS_INTRO: &str = "Check everything that sounds useful to you. Don’t worry about how it \
                          works — that’s our job. Just tell us what you need.";

/// One capability category: a display name and its checklist items.
pub struct Category {
    name: &'static str,
    items: &'static [&'static str],
}

impl Category {
    /// Returns the category display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the checklist items in this category.
    pub fn items(&self) -> &'static [&'static str] {
        self.items
    }
}

static CAPABILITIES: &[Category] = &[
    Category {
        name: "Your Emails & Messages",
        items: &[
            "Reads your emails every morning and gives you a quick summary of what matters",
            "Drafts replies to routine emails so you just review and hit send",
            "Sorts your inbox automatically into urgent, newsletters, receipts, and spam",
            "Forwards the important stuff to your WhatsApp or Telegram right away",
            "Auto-replies to common questions when you’re busy or on holiday",
            "Sends scheduled messages to contacts at exactly the right time",
        ],
    },
    Category {
        name: "Your Calendar & Schedule",
        items: &[
            "Keeps your calendar organized — adds events, sends reminders, avoids double-bookings",
            "Finds free time slots and suggests meeting times to people for you",
            "Sends you a morning briefing with today’s schedule, weather, and top priorities",
            "Reminds you of birthdays, deadlines, renewals, and follow-ups",
            "Syncs your personal and work calendars so nothing slips through",
        ],
    },
    Category {
        name: "Your Files & Documents",
        items: &[
            "Keeps your Google Drive, Dropbox, or folders tidy and well-organized",
            "Reads contracts, PDFs, and long documents — gives you the key points in seconds",
            "Creates reports, summaries, and slide decks from your rough notes",
            "Backs up your important files automatically every day or week",
            "Converts documents between formats whenever you need (PDF, Word, Excel, etc.)",
        ],
    },
    Category {
        name: "Research & Staying Informed",
        items: &[
            "Searches the web for you and delivers a clean, no-fluff summary",
            "Monitors news, competitors, or industry topics and sends you daily highlights",
            "Compares prices and options when you’re shopping for products or services",
            "Tracks trends, mentions, or keywords across the web so you’re always in the loop",
        ],
    },
    Category {
        name: "Social Media & Content",
        items: &[
            "Writes ready-to-post social media captions, hashtags, and content ideas",
            "Schedules and publishes posts across all your social media accounts",
            "Watches your mentions and comments — alerts you when something needs attention",
            "Writes blog articles, newsletters, or marketing copy from just a few bullet points",
        ],
    },
    Category {
        name: "Money & Invoices",
        items: &[
            "Tracks your spending from receipts, bank alerts, and invoices automatically",
            "Sends you a clear weekly or monthly budget summary",
            "Warns you before subscriptions renew so you can cancel what you don’t need",
            "Creates professional invoices and sends payment reminders to clients",
        ],
    },
    Category {
        name: "Your Team & Customers",
        items: &[
            "Answers common customer questions via chat or email around the clock",
            "Catches new leads and sends the best ones straight to you",
            "Sends polite follow-up emails after meetings so no opportunity gets forgotten",
            "Books appointments for clients and sends them automatic confirmations",
            "Summarizes meeting notes and distributes action items to your team",
            "Pulls together weekly performance reports from your business data",
        ],
    },
    Category {
        name: "Your Home & Daily Life",
        items: &[
            "Controls your smart lights, thermostat, and appliances from a chat message",
            "Runs your morning and evening routines automatically (lights on, coffee, music, reminders)",
            "Sends you alerts from your security cameras or home sensors",
            "Plans your meals, suggests recipes, and builds your shopping list",
            "Organizes your trips — flights, hotels, things to do, all in one place",
            "Keeps you on track with fitness goals, health reminders, and habit streaks",
        ],
    },
];

/// Returns the capability catalogue in display order.
pub fn capabilities() -> &'static [Category] {
    CAPABILITIES
}

/// Emits the full capability checklist under the given section heading.
pub(crate) fn capabilities_section(heading: &str) -> Section {
    let mut section = Section::titled(heading).with_block(lead(CAPS_INTRO));
    for capability in CAPABILITIES {
        section = section
            .with_block(Block::spacer(1.0))
            .with_block(subheading(capability.name()))
            .with_blocks(checkboxes(capability.items().iter().copied()));
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_eight_categories_of_forty_items() {
        let counts: Vec<_> = capabilities()
            .iter()
            .map(|category| category.items().len())
            .collect();
        assert_eq!(counts, vec![6, 5, 5, 4, 4, 4, 6, 6]);
        assert_eq!(counts.iter().sum::<usize>(), 40);
    }

    #[test]
    fn section_emits_every_item_as_a_checkbox() {
        let section = capabilities_section("A4. Choose What Your AI Assistant Should Do");
        let checkbox_count = section
            .blocks()
            .iter()
            .filter(|block| matches!(block, crate::model::Block::Checkbox(_)))
            .count();
        assert_eq!(checkbox_count, 40);
    }
}
