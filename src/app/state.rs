// ABOUTME: Application state: router, current page, sidebar focus, help overlay and toasts

use tracing::{debug, info};

use crate::components::sidebar::{SidebarItem, SidebarState};
use crate::config::AppConfig;
use crate::notify::{ChannelNotifier, Notification, Notifier, ToastCenter};
use crate::pages::{Page, PageAction, PageContext};
use crate::router::{Navigator, Route, Router};

pub struct AppState {
    pub router: Router,
    /// State of the page the router currently points at
    pub page: Page,
    pub sidebar: SidebarState,
    pub help_visible: bool,
    pub should_quit: bool,
    pub toasts: ToastCenter,
    notifier: ChannelNotifier,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let start = Route::parse(&config.start_path);
        let (toasts, notifier) = ToastCenter::new(config.notifications.clone());
        let mut sidebar = SidebarState::new();
        sidebar.show_labels = config.ui.sidebar_labels;
        if let Some(item) = SidebarItem::for_route(&start) {
            sidebar.select(item);
        }

        Self {
            page: Page::for_route(&start),
            router: Router::new(start),
            sidebar,
            help_visible: false,
            should_quit: false,
            toasts,
            notifier,
            config,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    pub fn navigate(&mut self, route: Route) {
        self.router.push(route);
        self.sync_page();
    }

    pub fn handle_page_action(&mut self, action: PageAction) {
        let mut ctx = PageContext {
            navigator: &mut self.router,
            notifier: &self.notifier,
        };
        self.page.handle(action, &mut ctx);
        self.sync_page();
    }

    /// Typed keys belong to a text field rather than to shortcuts
    pub fn wants_text_input(&self) -> bool {
        !self.sidebar.is_focused && self.page.wants_text_input()
    }

    pub fn shows_sidebar(&self) -> bool {
        self.current_route().shows_sidebar()
    }

    /// Replace the page state when the router has moved on
    fn sync_page(&mut self) {
        let route = self.router.current().clone();
        if self.page.route() == route {
            return;
        }
        debug!(route = %route, "Building page state");
        self.page = Page::for_route(&route);
        match SidebarItem::for_route(&route) {
            Some(item) => self.sidebar.select(item),
            None => self.sidebar.is_focused = false,
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    pub fn toggle_sidebar_labels(&mut self) {
        self.sidebar.show_labels = !self.sidebar.show_labels;
    }

    pub fn switch_focus(&mut self) {
        if self.shows_sidebar() {
            self.sidebar.is_focused = !self.sidebar.is_focused;
        }
    }

    /// Enter on the sidebar: open the selected page, or log out
    pub fn sidebar_activate(&mut self) {
        let item = self.sidebar.selected_item();
        match item.route() {
            Some(route) => {
                self.navigate(route);
                self.sidebar.is_focused = false;
            }
            None => {
                self.notifier.emit(Notification::success("Logged out successfully"));
                self.navigate(Route::SignIn);
            }
        }
    }

    pub fn tick(&mut self) {
        self.toasts.tick();
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn tick(&mut self) {
        self.state.tick();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
