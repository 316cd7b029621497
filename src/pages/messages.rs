// ABOUTME: Conversation list, selected thread and message draft

use tracing::debug;

use super::{ListPage, PageAction};
use crate::models::{seed, ChatMessage, Conversation, ReadState};

#[derive(Debug, Clone)]
pub struct MessagesPage {
    pub conversations: Vec<Conversation>,
    pub thread: Vec<ChatMessage>,
    pub list: ListPage<ReadState>,
    pub draft: String,
    /// Draft input has focus
    pub composing: bool,
}

impl MessagesPage {
    pub fn new() -> Self {
        Self {
            conversations: seed::conversations(),
            thread: seed::thread(),
            list: ListPage::new(&ReadState::ALL),
            draft: String::new(),
            composing: false,
        }
    }

    pub fn visible(&self) -> Vec<&Conversation> {
        self.list.visible(&self.conversations)
    }

    /// Conversation shown in the thread pane
    pub fn selected(&self) -> Option<&Conversation> {
        self.list.selected(&self.conversations)
    }

    pub fn wants_text_input(&self) -> bool {
        self.composing || self.list.searching
    }

    pub fn handle(&mut self, action: PageAction) {
        if self.composing {
            match action {
                PageAction::Char(c) => self.draft.push(c),
                PageAction::Backspace => {
                    self.draft.pop();
                }
                PageAction::Confirm => {
                    // Sending is not wired to anything
                    debug!(len = self.draft.len(), "Message draft cleared");
                    self.draft.clear();
                }
                PageAction::Cancel => self.composing = false,
                _ => {}
            }
            return;
        }

        if self.list.handle(action, &self.conversations) {
            return;
        }
        if matches!(action, PageAction::Confirm | PageAction::Char('i')) {
            self.composing = true;
        }
    }
}

impl Default for MessagesPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_clears_draft() {
        let mut page = MessagesPage::new();
        page.handle(PageAction::Char('i'));
        assert!(page.wants_text_input());
        for c in "hello".chars() {
            page.handle(PageAction::Char(c));
        }
        assert_eq!(page.draft, "hello");
        page.handle(PageAction::Confirm);
        assert!(page.draft.is_empty());
        assert!(page.composing);
        page.handle(PageAction::Cancel);
        assert!(!page.wants_text_input());
    }

    #[test]
    fn test_unread_filter() {
        let mut page = MessagesPage::new();
        page.handle(PageAction::Right);
        let names: Vec<_> = page.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Sarah Chen", "Emily Park"]);
        page.handle(PageAction::Down);
        assert_eq!(page.selected().map(|c| c.unread), Some(1));
    }
}
