// ABOUTME: Buyer discovery dashboard: filterable buyer cards with connect and pass actions

use tracing::info;

use super::{ListPage, PageAction, PageContext};
use crate::models::{seed, Buyer, BuyerStatus};
use crate::notify::Notification;

/// Summary cards above the buyer list
pub const STATS: [(&str, &str, &str); 4] = [
    ("Profile Views", "127", "+12% from last week"),
    ("Active Matches", "8", "3 new this week"),
    ("Messages", "23", "5 unread"),
    ("Deals in Progress", "2", "1 nearing completion"),
];

/// Industries shown on a card before "+N more"
pub const INDUSTRY_PREVIEW: usize = 3;

#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub buyers: Vec<Buyer>,
    pub list: ListPage<BuyerStatus>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            buyers: seed::buyers(),
            list: ListPage::new(&BuyerStatus::ALL),
        }
    }

    pub fn visible(&self) -> Vec<&Buyer> {
        self.list.visible(&self.buyers)
    }

    pub fn selected(&self) -> Option<&Buyer> {
        self.list.selected(&self.buyers)
    }

    pub fn result_line(&self) -> String {
        format!("Showing {} qualified buyers", self.visible().len())
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        if self.list.handle(action, &self.buyers) {
            return;
        }
        let Some(buyer) = self.selected() else {
            return;
        };
        match action {
            PageAction::Char('c') => {
                ctx.notifier.emit(
                    Notification::success("Connection Request Sent! 🎉").with_description(format!(
                        "You've connected with {}. They'll be notified and can start a conversation with you.",
                        buyer.name
                    )),
                );
            }
            PageAction::Char('p') => {
                ctx.notifier.emit(
                    Notification::info("Buyer Passed")
                        .with_description("This buyer won't be shown to you again."),
                );
            }
            PageAction::Confirm | PageAction::Char('d') => {
                info!(buyer_id = buyer.id, "View profile");
            }
            _ => {}
        }
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{Notes, Routes};

    #[test]
    fn test_connect_names_selected_buyer() {
        let mut routes = Routes::default();
        let notes = Notes::default();
        let mut page = DashboardPage::new();
        let mut ctx = PageContext { navigator: &mut routes, notifier: &notes };

        page.handle(PageAction::Down, &mut ctx);
        page.handle(PageAction::Char('c'), &mut ctx);
        page.handle(PageAction::Char('p'), &mut ctx);
        page.handle(PageAction::Confirm, &mut ctx);

        let sent = notes.0.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].title, "Connection Request Sent! 🎉");
        assert!(sent[0]
            .description
            .as_deref()
            .is_some_and(|d| d.contains("Michael Rodriguez")));
        assert_eq!(sent[1].title, "Buyer Passed");
        assert!(routes.0.is_empty());
    }

    #[test]
    fn test_actions_ignored_when_nothing_matches() {
        let mut routes = Routes::default();
        let notes = Notes::default();
        let mut page = DashboardPage::new();
        page.list.filter.search_term = "zzz".into();
        let mut ctx = PageContext { navigator: &mut routes, notifier: &notes };
        page.handle(PageAction::Char('c'), &mut ctx);
        assert!(notes.titles().is_empty());
        assert_eq!(page.result_line(), "Showing 0 qualified buyers");
    }
}
