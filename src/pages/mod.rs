// ABOUTME: Page state containers, one per route
// Each page owns its state and reacts to PageActions through an injected navigator and notifier

pub mod dashboard;
pub mod documents;
pub mod landing;
pub mod list;
pub mod matches;
pub mod messages;
pub mod not_found;
pub mod profile;
pub mod selection;
pub mod settings;
pub mod sign_in;
pub mod tasks;
pub mod wizard;

use crate::notify::Notifier;
use crate::router::{Navigator, Route};

pub use dashboard::DashboardPage;
pub use documents::DocumentsPage;
pub use landing::LandingPage;
pub use list::ListPage;
pub use matches::MatchesPage;
pub use messages::MessagesPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use selection::SelectionPage;
pub use settings::SettingsPage;
pub use sign_in::SignInPage;
pub use tasks::TasksPage;
pub use wizard::WizardPage;

/// Key input after the shell has taken what it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Up,
    Down,
    Left,
    Right,
    /// Enter
    Confirm,
    /// Space outside text input
    Toggle,
    /// Esc
    Cancel,
    Char(char),
    Backspace,
}

/// Capabilities a page may use while handling an action
pub struct PageContext<'a> {
    pub navigator: &'a mut dyn Navigator,
    pub notifier: &'a dyn Notifier,
}

/// State of whichever page the current route shows
#[derive(Debug)]
pub enum Page {
    Landing(LandingPage),
    SignIn(SignInPage),
    Selection(SelectionPage),
    Wizard(WizardPage),
    Dashboard(DashboardPage),
    Matches(MatchesPage),
    Messages(MessagesPage),
    Tasks(TasksPage),
    Documents(DocumentsPage),
    Profile(ProfilePage),
    Settings(SettingsPage),
    NotFound(NotFoundPage),
}

impl Page {
    /// Fresh page state for a route
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Landing => Self::Landing(LandingPage::new()),
            Route::SignIn => Self::SignIn(SignInPage::new()),
            Route::OnboardingSelection => Self::Selection(SelectionPage::new()),
            Route::BuyerOnboarding | Route::SellerOnboarding => {
                // Both arms carry a persona
                let persona = route
                    .onboarding_persona()
                    .unwrap_or(crate::wizard::Persona::Buyer);
                Self::Wizard(WizardPage::new(persona))
            }
            Route::Dashboard => Self::Dashboard(DashboardPage::new()),
            Route::Matches => Self::Matches(MatchesPage::new()),
            Route::Messages => Self::Messages(MessagesPage::new()),
            Route::Tasks => Self::Tasks(TasksPage::new()),
            Route::Documents => Self::Documents(DocumentsPage::new()),
            Route::Profile => Self::Profile(ProfilePage::new()),
            Route::Settings => Self::Settings(SettingsPage::new()),
            Route::NotFound(path) => Self::NotFound(NotFoundPage::new(path.clone())),
        }
    }

    /// Route this page state was built for
    pub fn route(&self) -> Route {
        match self {
            Self::Landing(_) => Route::Landing,
            Self::SignIn(_) => Route::SignIn,
            Self::Selection(_) => Route::OnboardingSelection,
            Self::Wizard(page) => Route::from(page.controller().persona()),
            Self::Dashboard(_) => Route::Dashboard,
            Self::Matches(_) => Route::Matches,
            Self::Messages(_) => Route::Messages,
            Self::Tasks(_) => Route::Tasks,
            Self::Documents(_) => Route::Documents,
            Self::Profile(_) => Route::Profile,
            Self::Settings(_) => Route::Settings,
            Self::NotFound(page) => Route::NotFound(page.path.clone()),
        }
    }

    /// Whether typed characters go into a text field rather than shortcuts
    pub fn wants_text_input(&self) -> bool {
        match self {
            Self::SignIn(page) => page.wants_text_input(),
            Self::Wizard(page) => page.wants_text_input(),
            Self::Dashboard(page) => page.list.searching,
            Self::Matches(page) => page.list.searching,
            Self::Messages(page) => page.wants_text_input(),
            Self::Tasks(page) => page.list.searching,
            Self::Documents(page) => page.list.searching,
            Self::Settings(page) => page.wants_text_input(),
            Self::Landing(_) | Self::Selection(_) | Self::Profile(_) | Self::NotFound(_) => false,
        }
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        match self {
            Self::Landing(page) => page.handle(action, ctx),
            Self::SignIn(page) => page.handle(action, ctx),
            Self::Selection(page) => page.handle(action, ctx),
            Self::Wizard(page) => page.handle(action, ctx),
            Self::Dashboard(page) => page.handle(action, ctx),
            Self::Matches(page) => page.handle(action, ctx),
            Self::Messages(page) => page.handle(action),
            Self::Tasks(page) => page.handle(action),
            Self::Documents(page) => page.handle(action),
            Self::Profile(page) => page.handle(action),
            Self::Settings(page) => page.handle(action, ctx),
            Self::NotFound(page) => page.handle(action, ctx),
        }
    }
}

/// Move a cursor one step within `len` entries without wrapping
pub(crate) fn step_cursor(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (cursor + 1).min(len - 1)
    } else {
        cursor.saturating_sub(1)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use crate::notify::{Notification, Notifier};
    use crate::router::{Navigator, Route};

    /// Navigator that only records pushes
    #[derive(Default)]
    pub struct Routes(pub Vec<Route>);

    impl Navigator for Routes {
        fn push(&mut self, route: Route) {
            self.0.push(route);
        }
    }

    /// Notifier that only records emits
    #[derive(Default)]
    pub struct Notes(pub RefCell<Vec<Notification>>);

    impl Notes {
        pub fn titles(&self) -> Vec<String> {
            self.0.borrow().iter().map(|n| n.title.clone()).collect()
        }
    }

    impl Notifier for Notes {
        fn emit(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_for_route_reports_same_route() {
        let mut routes = Route::known();
        routes.push(Route::NotFound("/nowhere".into()));
        for route in routes {
            assert_eq!(Page::for_route(&route).route(), route);
        }
    }

    #[test]
    fn test_step_cursor_clamps() {
        assert_eq!(step_cursor(0, 3, false), 0);
        assert_eq!(step_cursor(2, 3, true), 2);
        assert_eq!(step_cursor(1, 3, true), 2);
        assert_eq!(step_cursor(5, 0, true), 0);
    }
}
