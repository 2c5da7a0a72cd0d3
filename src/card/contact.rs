// SPDX-License-Identifier: MPL-2.0
//! The card's outbound contact actions, fixed at compile time.
//!
//! Each entry is a label plus a target URI handed verbatim to the platform
//! handler for its scheme (dialer, mail client, browser). No validation is
//! performed beyond what the platform itself does.

/// Identifies one of the five contact actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Call,
    Email,
    WhatsApp,
    Instagram,
    Website,
}

/// A single contact row: what it is, what it says, where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub label: &'static str,
    pub uri: &'static str,
}

/// The five entries, in display order. Never mutated.
pub const ENTRIES: [ContactEntry; 5] = [
    ContactEntry {
        kind: ContactKind::Call,
        label: "Ligar",
        uri: "tel:+5517999754390",
    },
    ContactEntry {
        kind: ContactKind::Email,
        label: "Email",
        uri: "mailto:dgsolutionweb@gmail.com",
    },
    ContactEntry {
        kind: ContactKind::WhatsApp,
        label: "WhatsApp",
        uri: "https://wa.me/5517999754390",
    },
    ContactEntry {
        kind: ContactKind::Instagram,
        label: "Instagram",
        uri: "https://instagram.com/dgsolutionweb",
    },
    ContactEntry {
        kind: ContactKind::Website,
        label: "Website",
        uri: super::CARD_URL,
    },
];

impl ContactKind {
    /// The table entry for this kind.
    #[must_use]
    pub fn entry(self) -> &'static ContactEntry {
        match self {
            ContactKind::Call => &ENTRIES[0],
            ContactKind::Email => &ENTRIES[1],
            ContactKind::WhatsApp => &ENTRIES[2],
            ContactKind::Instagram => &ENTRIES[3],
            ContactKind::Website => &ENTRIES[4],
        }
    }
}
