// ABOUTME: Client-side path table and navigation history
// Maps navigable paths to destinations; anything unmatched lands on the not-found page

use std::fmt;

use tracing::info;

use crate::wizard::Persona;

/// Every destination reachable by path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    SignIn,
    Dashboard,
    Matches,
    Messages,
    Tasks,
    Documents,
    Profile,
    Settings,
    OnboardingSelection,
    BuyerOnboarding,
    SellerOnboarding,
    /// Carries the path that failed to match
    NotFound(String),
}

impl Route {
    /// Every known route, in path-table order
    pub fn known() -> Vec<Route> {
        vec![
            Self::Landing,
            Self::SignIn,
            Self::Dashboard,
            Self::Matches,
            Self::Messages,
            Self::Tasks,
            Self::Documents,
            Self::Profile,
            Self::Settings,
            Self::OnboardingSelection,
            Self::BuyerOnboarding,
            Self::SellerOnboarding,
        ]
    }

    /// Resolve a path. Query strings and fragments are ignored, as is one trailing slash.
    pub fn parse(path: &str) -> Self {
        let without_fragment = path.split('#').next().unwrap_or_default();
        let bare = without_fragment.split('?').next().unwrap_or_default();
        let normalized = if bare.len() > 1 {
            bare.strip_suffix('/').unwrap_or(bare)
        } else {
            bare
        };

        match normalized {
            "/" => Self::Landing,
            "/signin" => Self::SignIn,
            "/dashboard" => Self::Dashboard,
            "/matches" => Self::Matches,
            "/messages" => Self::Messages,
            "/tasks" => Self::Tasks,
            "/documents" => Self::Documents,
            "/profile" => Self::Profile,
            "/settings" => Self::Settings,
            "/onboarding" => Self::OnboardingSelection,
            "/onboarding/buyer" => Self::BuyerOnboarding,
            "/onboarding/seller" => Self::SellerOnboarding,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> &str {
        match self {
            Self::Landing => "/",
            Self::SignIn => "/signin",
            Self::Dashboard => "/dashboard",
            Self::Matches => "/matches",
            Self::Messages => "/messages",
            Self::Tasks => "/tasks",
            Self::Documents => "/documents",
            Self::Profile => "/profile",
            Self::Settings => "/settings",
            Self::OnboardingSelection => "/onboarding",
            Self::BuyerOnboarding => "/onboarding/buyer",
            Self::SellerOnboarding => "/onboarding/seller",
            Self::NotFound(path) => path,
        }
    }

    /// Human-readable destination name
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Landing page",
            Self::SignIn => "Sign-in",
            Self::Dashboard => "Buyer list dashboard",
            Self::Matches => "Match list",
            Self::Messages => "Conversation view",
            Self::Tasks => "Task list",
            Self::Documents => "Document list",
            Self::Profile => "Business profile",
            Self::Settings => "Account settings",
            Self::OnboardingSelection => "Persona selection",
            Self::BuyerOnboarding => "Buyer wizard",
            Self::SellerOnboarding => "Seller wizard",
            Self::NotFound(_) => "Not-found page",
        }
    }

    /// Dashboard-style pages render inside the sidebar shell
    pub fn shows_sidebar(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::Matches
                | Self::Messages
                | Self::Tasks
                | Self::Documents
                | Self::Profile
                | Self::Settings
        )
    }

    pub fn onboarding_persona(&self) -> Option<Persona> {
        match self {
            Self::BuyerOnboarding => Some(Persona::Buyer),
            Self::SellerOnboarding => Some(Persona::Seller),
            _ => None,
        }
    }
}

impl From<Persona> for Route {
    fn from(persona: Persona) -> Self {
        match persona {
            Persona::Buyer => Self::BuyerOnboarding,
            Persona::Seller => Self::SellerOnboarding,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path())
    }
}

/// Capability to move the user to another destination
pub trait Navigator {
    fn push(&mut self, route: Route);
}

/// Current destination plus every navigation made so far
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Routes pushed since start, oldest first
    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Landing)
    }
}

impl Navigator for Router {
    fn push(&mut self, route: Route) {
        info!(from = %self.current, to = %route, "Navigating");
        self.history.push(route.clone());
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_route_round_trips_through_its_path() {
        for route in Route::known() {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_paths_keep_the_original_text() {
        assert_eq!(Route::parse("/login"), Route::NotFound("/login".to_string()));
        assert_eq!(Route::parse("/onboarding/investor").path(), "/onboarding/investor");
        assert_eq!(Route::parse(""), Route::NotFound(String::new()));
    }

    #[test]
    fn test_trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/tasks?filter=Pending"), Route::Tasks);
        assert_eq!(Route::parse("/profile#owner"), Route::Profile);
        assert_eq!(Route::parse("/"), Route::Landing);
    }

    #[test]
    fn test_paths_are_case_sensitive() {
        assert!(matches!(Route::parse("/Dashboard"), Route::NotFound(_)));
    }

    #[test]
    fn test_sidebar_pages() {
        assert!(Route::Dashboard.shows_sidebar());
        assert!(Route::Settings.shows_sidebar());
        assert!(!Route::Landing.shows_sidebar());
        assert!(!Route::BuyerOnboarding.shows_sidebar());
        assert!(!Route::NotFound("/x".into()).shows_sidebar());
    }

    #[test]
    fn test_router_records_history() {
        let mut router = Router::default();
        router.push(Route::OnboardingSelection);
        router.push(Route::parse("/onboarding/seller"));
        assert_eq!(router.current(), &Route::SellerOnboarding);
        assert_eq!(
            router.history(),
            [Route::OnboardingSelection, Route::SellerOnboarding]
        );
    }

    #[test]
    fn test_persona_routes() {
        assert_eq!(Route::from(Persona::Buyer), Route::BuyerOnboarding);
        assert_eq!(Route::SellerOnboarding.onboarding_persona(), Some(Persona::Seller));
        assert_eq!(Route::Dashboard.onboarding_persona(), None);
    }
}
