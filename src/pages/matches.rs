// ABOUTME: Match list with stats and pending match requests

use super::{ListPage, PageAction, PageContext};
use crate::models::{seed, Match, MatchRequest, MatchStatus};
use crate::notify::Notification;

#[derive(Debug, Clone)]
pub struct MatchesPage {
    pub matches: Vec<Match>,
    pub requests: Vec<MatchRequest>,
    pub list: ListPage<MatchStatus>,
}

impl MatchesPage {
    pub fn new() -> Self {
        Self {
            matches: seed::matches(),
            requests: seed::match_requests(),
            list: ListPage::new(&MatchStatus::ALL),
        }
    }

    pub fn visible(&self) -> Vec<&Match> {
        self.list.visible(&self.matches)
    }

    pub fn count(&self, status: MatchStatus) -> usize {
        self.matches.iter().filter(|m| m.status == status).count()
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        if self.list.handle(action, &self.matches) {
            return;
        }
        let Some(request) = self.requests.first() else {
            return;
        };
        match action {
            PageAction::Char('a') => ctx.notifier.emit(
                Notification::success("Match Accepted")
                    .with_description(format!("You can now message {}.", request.name)),
            ),
            PageAction::Char('x') => ctx.notifier.emit(
                Notification::info("Match Declined")
                    .with_description(format!("{} won't be notified.", request.name)),
            ),
            _ => {}
        }
    }
}

impl Default for MatchesPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{Notes, Routes};

    #[test]
    fn test_stats() {
        let page = MatchesPage::new();
        assert_eq!(page.matches.len(), 3);
        assert_eq!(page.count(MatchStatus::Active), 2);
        assert_eq!(page.count(MatchStatus::PendingResponse), 1);
    }

    #[test]
    fn test_request_actions_only_notify() {
        let mut routes = Routes::default();
        let notes = Notes::default();
        let mut page = MatchesPage::new();
        let mut ctx = PageContext { navigator: &mut routes, notifier: &notes };
        page.handle(PageAction::Char('a'), &mut ctx);
        page.handle(PageAction::Char('x'), &mut ctx);
        assert_eq!(notes.titles(), ["Match Accepted", "Match Declined"]);
        assert_eq!(page.requests.len(), 1);
    }
}
