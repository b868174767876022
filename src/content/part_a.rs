//! Part A: the private-client questionnaire sections.

use crate::model::{Banner, Block, Section};

use super::{
    body, capabilities::capabilities_section, category, checkboxes, lead, note, question, ratings,
    OTHER_LINE,
};

/// A1. About You, introduced by the PART A divider banner.
pub(crate) fn about_you() -> Section {
    Section::titled("A1. About You")
        .with_banner(Banner::new(
            "PART A",
            "Your Personal AI Assistant — Tell Us About You",
        ))
        .with_block(question("1. Full Name:"))
        .with_block(Block::answer_line(65))
        .with_block(question("2. What do you do for work?"))
        .with_block(Block::answer_line(65))
        .with_block(question(
            "3. How would you describe your typical day? (Check all that apply)",
        ))
        .with_blocks(checkboxes([
            "I spend a lot of time on emails",
            "I manage appointments and meetings",
            "I research things online frequently",
            "I handle invoices, bills, or finances",
            "I manage social media accounts",
            "I write content (articles, posts, reports)",
            "I coordinate with other people (family, team, clients)",
            "I travel frequently and need things organized",
            "I manage a property or rental business",
        ]))
        .with_block(Block::checkbox(OTHER_LINE))
        .with_block(Block::spacer(1.0))
        .with_block(question("4. What frustrates you most in your daily routine?"))
        .with_block(Block::open_field(4))
        .with_block(Block::spacer(1.0))
        .with_block(question(
            "5. How many hours per week do you spend on repetitive tasks you wish someone else \
             could handle?",
        ))
        .with_blocks(checkboxes([
            "Less than 2 hours",
            "2–5 hours",
            "5–10 hours",
            "More than 10 hours",
        ]))
}

/// A2. Your Digital Life.
pub(crate) fn digital_life() -> Section {
    Section::titled("A2. Your Digital Life")
        .with_block(question(
            "1. Which messaging apps do you use daily? (Check all that apply)",
        ))
        .with_blocks(checkboxes([
            "WhatsApp", "Telegram", "iMessage", "Signal", "Discord", "SMS",
        ]))
        .with_block(Block::checkbox(OTHER_LINE))
        .with_block(Block::spacer(1.0))
        .with_block(question("2. Which email provider(s) do you use?"))
        .with_blocks(checkboxes([
            "Gmail",
            "Outlook / Hotmail",
            "Yahoo",
            "ProtonMail",
            "Work email",
        ]))
        .with_block(Block::checkbox(OTHER_LINE))
        .with_block(Block::spacer(1.0))
        .with_block(question("3. Which calendar do you use?"))
        .with_blocks(checkboxes([
            "Google Calendar",
            "Apple Calendar",
            "Outlook Calendar",
            "None",
        ]))
        .with_block(Block::checkbox(OTHER_LINE))
        .with_block(Block::spacer(1.0))
        .with_block(question("4. Do you use any of these tools?"))
        .with_blocks(checkboxes([
            "Google Drive / Docs",
            "Dropbox",
            "Notion",
            "Evernote",
            "Trello",
            "Todoist",
            "Spotify",
            "Smart home devices (Alexa, Google Home, Philips Hue)",
            "Accounting software (QuickBooks, FreshBooks, etc.)",
            "Social media management tools",
            "None of these",
        ]))
        .with_block(Block::checkbox(OTHER_LINE))
        .with_block(Block::spacer(1.0))
        .with_block(question(
            "5. Where do you prefer to interact with your AI assistant?",
        ))
        .with_blocks(checkboxes([
            "WhatsApp (just text me!)",
            "Telegram",
            "Email",
            "A web dashboard",
            "Voice commands",
            "I don't know yet",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question("6. Where should your AI assistant run?"))
        .with_block(body(
            "(The assistant needs a device that stays on. This can be your own hardware or a \
             cloud server.)",
        ))
        .with_blocks(checkboxes([
            "On my own computer (desktop or laptop that stays on)",
            "On a home server or NAS I already own",
            "On a Raspberry Pi or small device I have",
            "On a cloud server (we can set this up for you)",
            "I don’t have hardware — I’d like you to handle this (Managed Service)",
            "I’m not sure — let’s discuss",
        ]))
}

/// A3. The aspirational rating scales.
pub(crate) fn assistant_wishes() -> Section {
    Section::titled("A3. What Would You Love Your AI Assistant To Do?")
        .with_block(lead(
            "Imagine you had a personal assistant available 24/7. What would you ask them to do?",
        ))
        .with_block(question(
            "Rate each item from 1 (not interested) to 5 (I need this!):",
        ))
        .with_block(Block::spacer(1.0))
        .with_block(category("Daily Life"))
        .with_blocks(ratings([
            "Read and summarize my emails every morning",
            "Manage my calendar — schedule, remind, reschedule",
            "Give me a daily briefing (weather, news, to-dos)",
            "Help me plan trips and travel itineraries",
            "Track my expenses and send me weekly summaries",
            "Remind me of important dates and follow-ups",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Communication"))
        .with_blocks(ratings([
            "Auto-reply to routine messages when I'm busy",
            "Draft professional emails based on my notes",
            "Translate messages in real-time",
            "Send scheduled messages to contacts",
            "Manage group chats or community channels",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Work & Productivity"))
        .with_blocks(ratings([
            "Research topics and give me summaries",
            "Write or edit documents, reports, or proposals",
            "Create presentations",
            "Monitor news or social media for specific topics",
            "Manage my files and organize documents",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Smart Home & Lifestyle"))
        .with_blocks(ratings([
            "Control my smart lights, thermostat, etc.",
            "Morning/evening routines automation",
            "Meal planning and recipe suggestions",
            "Fitness/health tracking reminders",
        ]))
}

/// A4. The shared capability checklist for private clients.
pub(crate) fn capability_choices() -> Section {
    capabilities_section("A4. Choose What Your AI Assistant Should Do")
}

/// A5. Integration & Automation.
pub(crate) fn integrations() -> Section {
    Section::titled("A5. Integration & Automation")
        .with_block(lead(
            "Which of your existing tools and services would you like your AI assistant to \
             connect with and automate?",
        ))
        .with_block(Block::spacer(1.0))
        .with_block(category("Email & Communication"))
        .with_blocks(checkboxes([
            "Read and manage my Gmail / Outlook inbox",
            "Send emails on my behalf (with my approval)",
            "Auto-sort emails into categories (urgent, newsletters, receipts)",
            "Forward important emails to my WhatsApp / Telegram",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Calendar & Scheduling"))
        .with_blocks(checkboxes([
            "Automatically add events from emails to my calendar",
            "Send me reminders before meetings",
            "Find free time slots and propose meetings",
            "Sync across multiple calendars",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Files & Documents"))
        .with_blocks(checkboxes([
            "Organize files in my Google Drive / Dropbox",
            "Convert documents between formats",
            "Extract key information from PDFs and documents",
            "Backup important files automatically",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Finance & Shopping"))
        .with_blocks(checkboxes([
            "Track my subscriptions and alert me before renewals",
            "Categorize my expenses from receipts / bank notifications",
            "Compare prices when I want to buy something",
            "Send me budget summaries",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Social Media"))
        .with_blocks(checkboxes([
            "Post to my social media accounts on schedule",
            "Monitor mentions and comments",
            "Generate content ideas based on trending topics",
            "Track my followers and engagement",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Smart Home"))
        .with_blocks(checkboxes([
            "Control lights, heating, and appliances",
            "Set up morning / evening automation routines",
            "Security alerts from cameras / sensors",
            "Voice-activated commands via messaging app",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(category("Custom Automations"))
        .with_block(lead(
            "Is there something specific you do repeatedly that you'd love to automate? \
             Describe it in your own words:",
        ))
        .with_block(Block::open_field(6))
}

/// A6. Privacy & Preferences.
pub(crate) fn privacy() -> Section {
    Section::titled("A6. Privacy & Preferences")
        .with_block(question(
            "1. How comfortable are you with your AI assistant accessing your data?",
        ))
        .with_blocks(checkboxes([
            "Full access — I want it to help with everything",
            "Moderate — It can read my calendar and emails, but not financial data",
            "Limited — Only what I explicitly share with it",
            "Minimal — I'll give it tasks manually each time",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question(
            "2. Should the assistant be available 24/7 or only during certain hours?",
        ))
        .with_blocks(checkboxes([
            "Always on",
            "Only during work hours",
            "Custom schedule: ___________________________",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question("3. Will anyone else use this assistant besides you?"))
        .with_blocks(checkboxes([
            "Just me",
            "My partner / family (how many? ___)",
            "My small team (how many? ___)",
        ]))
        .with_block(Block::spacer(1.0))
        .with_block(question(
            "4. Any specific personality you'd like your assistant to have?",
        ))
        .with_block(note("(e.g., formal, casual, funny, minimalist, warm, direct)"))
        .with_block(Block::answer_line(65))
}
