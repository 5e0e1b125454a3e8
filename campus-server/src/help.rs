//! Help & support content.
//!
//! Frequently asked questions, ways to reach the support team, and quick
//! actions. The FAQ list keeps at most one answer open at a time.

use crate::theme::palette;

/// Error returned when toggling a question that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown FAQ entry {0:?}")]
pub struct UnknownFaq(pub String);

/// A question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Every FAQ entry, in display order.
pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        id: "1",
        question: "How do I find the best route to my destination?",
        answer: "Use the search box on the home screen to enter your destination. \
                 Every route that passes it is listed with its duration and fare.",
    },
    FaqEntry {
        id: "2",
        question: "Are the route times and fares accurate?",
        answer: "We work with transport operators to keep information current. \
                 Times vary with traffic and fares may change, so always confirm with the driver.",
    },
    FaqEntry {
        id: "3",
        question: "How do I save my favorite routes?",
        answer: "Open a route and choose Add Favorite. Saved routes are listed \
                 under Favorite Routes on your profile.",
    },
    FaqEntry {
        id: "4",
        question: "Can I use the app offline?",
        answer: "Basic route information is available offline, but live updates \
                 need an internet connection. Enable offline mode in Settings.",
    },
    FaqEntry {
        id: "5",
        question: "How do I report incorrect route information?",
        answer: "Contact the support team by email or phone. Feedback keeps the route data accurate.",
    },
    FaqEntry {
        id: "6",
        question: "Is my location data safe?",
        answer: "Location data is only used to suggest routes and is never shared \
                 with third parties. Manage location access in Settings.",
    },
];

/// Which FAQ answer is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Faq {
    expanded: Option<&'static str>,
}

impl Faq {
    /// All answers collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &'static [FaqEntry] {
        FAQ_ENTRIES
    }

    /// Open an entry, closing any other. Toggling the open entry closes it.
    ///
    /// Returns whether `id` is open afterwards.
    pub fn toggle(&mut self, id: &str) -> Result<bool, UnknownFaq> {
        let entry = FAQ_ENTRIES
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| UnknownFaq(id.to_string()))?;

        if self.expanded == Some(entry.id) {
            self.expanded = None;
            Ok(false)
        } else {
            self.expanded = Some(entry.id);
            Ok(true)
        }
    }

    /// The open entry, if any.
    pub fn expanded(&self) -> Option<&'static FaqEntry> {
        self.expanded
            .and_then(|id| FAQ_ENTRIES.iter().find(|e| e.id == id))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded == Some(id)
    }
}

/// Ways to reach the support team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactMethod {
    Email,
    Phone,
    Website,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::Website,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email Support",
            ContactMethod::Phone => "Phone Support",
            ContactMethod::Website => "Visit Website",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Get help via email",
            ContactMethod::Phone => "Call our support team",
            ContactMethod::Website => "Browse our help center",
        }
    }

    /// Address, number or URL shown to the user.
    pub fn value(&self) -> &'static str {
        match self {
            ContactMethod::Email => "support@ugcampusnavigator.edu.gh",
            ContactMethod::Phone => "+233-30-213-7000",
            ContactMethod::Website => "https://www.ug.edu.gh",
        }
    }

    /// Link target for the contact value.
    pub fn href(&self) -> String {
        match self {
            ContactMethod::Email => format!("mailto:{}", self.value()),
            ContactMethod::Phone => format!("tel:{}", self.value()),
            ContactMethod::Website => self.value().to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ContactMethod::Email => "envelope.fill",
            ContactMethod::Phone => "phone.fill",
            ContactMethod::Website => "globe",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ContactMethod::Email | ContactMethod::Website => palette::PRIMARY,
            ContactMethod::Phone => palette::SECONDARY,
        }
    }
}

/// Shortcuts offered at the top of the help screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    Tutorial,
    Feedback,
    BugReport,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::Tutorial,
        QuickAction::Feedback,
        QuickAction::BugReport,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::Tutorial => "App Tutorial",
            QuickAction::Feedback => "Send Feedback",
            QuickAction::BugReport => "Report a Bug",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuickAction::Tutorial => "Learn how to use the app",
            QuickAction::Feedback => "Help us improve the app",
            QuickAction::BugReport => "Found an issue? Let us know",
        }
    }

    /// Shown when the action is picked; none of these flows exist yet.
    pub fn notice(&self) -> &'static str {
        match self {
            QuickAction::Tutorial => "App tutorial feature coming soon!",
            QuickAction::Feedback => "Feedback form coming soon!",
            QuickAction::BugReport => "Bug reporting feature coming soon!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuickAction::Tutorial => "play.circle.fill",
            QuickAction::Feedback => "message.fill",
            QuickAction::BugReport => "exclamationmark.triangle.fill",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            QuickAction::Tutorial => palette::PRIMARY,
            QuickAction::Feedback => palette::SECONDARY,
            QuickAction::BugReport => palette::ACCENT,
        }
    }
}
