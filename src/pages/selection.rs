// ABOUTME: Persona selection page between the landing page and the wizards

use super::{step_cursor, PageAction, PageContext};
use crate::router::Route;
use crate::wizard::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChoice {
    Persona(Persona),
    SignIn,
}

impl SelectionChoice {
    pub const ALL: [Self; 3] = [
        Self::Persona(Persona::Seller),
        Self::Persona(Persona::Buyer),
        Self::SignIn,
    ];

    pub fn target(&self) -> Route {
        match self {
            Self::Persona(persona) => Route::from(*persona),
            Self::SignIn => Route::SignIn,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionPage {
    pub cursor: usize,
}

impl SelectionPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> SelectionChoice {
        SelectionChoice::ALL[self.cursor.min(SelectionChoice::ALL.len() - 1)]
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        let len = SelectionChoice::ALL.len();
        match action {
            PageAction::Left | PageAction::Up => self.cursor = step_cursor(self.cursor, len, false),
            PageAction::Right | PageAction::Down => self.cursor = step_cursor(self.cursor, len, true),
            PageAction::Confirm => ctx.navigator.push(self.selected().target()),
            PageAction::Char('s') => ctx.navigator.push(Route::SellerOnboarding),
            PageAction::Char('b') => ctx.navigator.push(Route::BuyerOnboarding),
            PageAction::Cancel => ctx.navigator.push(Route::Landing),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{Notes, Routes};

    #[test]
    fn test_choices_route_to_wizards_and_sign_in() {
        let mut routes = Routes::default();
        let notes = Notes::default();
        let mut page = SelectionPage::new();
        let mut ctx = PageContext { navigator: &mut routes, notifier: &notes };

        page.handle(PageAction::Confirm, &mut ctx);
        page.handle(PageAction::Down, &mut ctx);
        page.handle(PageAction::Confirm, &mut ctx);
        page.handle(PageAction::Down, &mut ctx);
        page.handle(PageAction::Confirm, &mut ctx);
        page.handle(PageAction::Cancel, &mut ctx);

        assert_eq!(
            routes.0,
            [Route::SellerOnboarding, Route::BuyerOnboarding, Route::SignIn, Route::Landing]
        );
    }
}
