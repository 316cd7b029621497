// ABOUTME: Marketplace records shown by the dashboard-style pages
// Static, in-memory data with display labels; no relationships between records

pub mod buyer;
pub mod document;
pub mod matches;
pub mod message;
pub mod profile;
pub mod seed;
pub mod settings;
pub mod task;

use std::fmt;

use thiserror::Error;

pub use buyer::{Buyer, BuyerStatus};
pub use document::{Document, DocumentCategory};
pub use matches::{Match, MatchRequest, MatchStatus};
pub use message::{ChatMessage, Conversation, ReadState};
pub use profile::{Achievement, BusinessProfile, OwnerProfile};
pub use settings::{AccountSettings, Language, NotificationSwitch, Timezone};
pub use task::{Priority, Task, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct CategoryParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Resolve a display label back to its value, ignoring ASCII case
pub(crate) fn parse_label<T: Copy + fmt::Display>(
    all: &[T],
    kind: &'static str,
    input: &str,
) -> Result<T, CategoryParseError> {
    let wanted = input.trim();
    all.iter()
        .copied()
        .find(|candidate| candidate.to_string().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CategoryParseError {
            kind,
            value: input.to_string(),
            expected: all
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Two-letter avatar initials from a display name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_is_case_insensitive() {
        assert_eq!(
            parse_label(&BuyerStatus::ALL, "buyer status", "research phase"),
            Ok(BuyerStatus::ResearchPhase)
        );
    }

    #[test]
    fn test_parse_label_lists_expected_values() {
        let err = parse_label(&Priority::ALL, "priority", "Urgent").unwrap_err();
        assert_eq!(err.value, "Urgent");
        assert_eq!(err.expected, "High, Medium, Low");
        assert!(err.to_string().contains("unknown priority 'Urgent'"));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("anne marie smith"), "AM");
        assert_eq!(initials(""), "");
    }
}
