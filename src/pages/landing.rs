// ABOUTME: Marketing landing page actions

use super::{step_cursor, PageAction, PageContext};
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    GetStarted,
    SignIn,
    SellBusiness,
    BuyBusiness,
}

impl LandingAction {
    pub const ALL: [Self; 4] = [Self::GetStarted, Self::SignIn, Self::SellBusiness, Self::BuyBusiness];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GetStarted => "Get Started",
            Self::SignIn => "Sign In",
            Self::SellBusiness => "Sell My Business",
            Self::BuyBusiness => "Find Businesses to Buy",
        }
    }

    pub fn target(&self) -> Route {
        match self {
            Self::GetStarted => Route::OnboardingSelection,
            Self::SignIn => Route::SignIn,
            Self::SellBusiness => Route::SellerOnboarding,
            Self::BuyBusiness => Route::BuyerOnboarding,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LandingPage {
    pub cursor: usize,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> LandingAction {
        LandingAction::ALL[self.cursor.min(LandingAction::ALL.len() - 1)]
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        let len = LandingAction::ALL.len();
        match action {
            PageAction::Left | PageAction::Up => self.cursor = step_cursor(self.cursor, len, false),
            PageAction::Right | PageAction::Down => self.cursor = step_cursor(self.cursor, len, true),
            PageAction::Confirm => ctx.navigator.push(self.selected().target()),
            PageAction::Char('s') => ctx.navigator.push(Route::SignIn),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{Notes, Routes};

    #[test]
    fn test_actions_navigate_to_their_targets() {
        let mut routes = Routes::default();
        let notes = Notes::default();
        let mut page = LandingPage::new();
        let mut ctx = PageContext { navigator: &mut routes, notifier: &notes };

        page.handle(PageAction::Confirm, &mut ctx);
        page.handle(PageAction::Right, &mut ctx);
        page.handle(PageAction::Right, &mut ctx);
        page.handle(PageAction::Confirm, &mut ctx);
        page.handle(PageAction::Right, &mut ctx);
        page.handle(PageAction::Right, &mut ctx);
        page.handle(PageAction::Confirm, &mut ctx);

        assert_eq!(
            routes.0,
            [Route::OnboardingSelection, Route::SellerOnboarding, Route::BuyerOnboarding]
        );
    }
}
