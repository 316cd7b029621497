// ABOUTME: Event handling: key presses become AppEvents, AppEvents are applied to AppState
// Shell keys are resolved first; whatever is left goes to the current page as a PageAction

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::AppState;
use crate::components::sidebar::SidebarItem;
use crate::pages::PageAction;
use crate::router::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    /// Collapse or expand the sidebar labels
    ToggleSidebar,
    /// Move focus between sidebar and page
    SwitchFocus,
    SidebarUp,
    SidebarDown,
    SidebarSelect,
    /// Clear every visible toast
    DismissToasts,
    Navigate(Route),
    Page(PageAction),
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => Some(AppEvent::Quit),
                _ => None,
            };
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        let typing = state.wants_text_input();
        let with_sidebar = state.shows_sidebar();

        if !typing {
            match key_event.code {
                KeyCode::Esc if !state.toasts.current().is_empty() => {
                    return Some(AppEvent::DismissToasts)
                }
                KeyCode::Char('?') => return Some(AppEvent::ToggleHelp),
                KeyCode::Char('q') => return Some(AppEvent::Quit),
                KeyCode::Char('b') if with_sidebar => return Some(AppEvent::ToggleSidebar),
                KeyCode::Char(c @ '1'..='7') if with_sidebar => {
                    let index = c as usize - '1' as usize;
                    return SidebarItem::all()[index].route().map(AppEvent::Navigate);
                }
                _ => {}
            }
        }

        if with_sidebar {
            if key_event.code == KeyCode::Tab {
                return Some(AppEvent::SwitchFocus);
            }
            if state.sidebar.is_focused {
                return Self::handle_sidebar_keys(key_event);
            }
        }

        Self::handle_page_keys(key_event, typing, with_sidebar)
    }

    fn handle_sidebar_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::SidebarUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::SidebarDown),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => Some(AppEvent::SidebarSelect),
            KeyCode::Esc => Some(AppEvent::SwitchFocus),
            _ => None,
        }
    }

    fn handle_page_keys(key_event: KeyEvent, typing: bool, with_sidebar: bool) -> Option<AppEvent> {
        let action = match key_event.code {
            KeyCode::Up => PageAction::Up,
            KeyCode::Down => PageAction::Down,
            KeyCode::Left => PageAction::Left,
            KeyCode::Right => PageAction::Right,
            KeyCode::Enter => PageAction::Confirm,
            KeyCode::Esc => PageAction::Cancel,
            KeyCode::Backspace => PageAction::Backspace,
            // Full-screen pages use Tab to walk their fields
            KeyCode::Tab if !with_sidebar => PageAction::Down,
            KeyCode::BackTab if !with_sidebar => PageAction::Up,
            KeyCode::Char(' ') if !typing => PageAction::Toggle,
            KeyCode::Char(c) => PageAction::Char(c),
            _ => return None,
        };
        Some(AppEvent::Page(action))
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, "Processing event");
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::ToggleSidebar => state.toggle_sidebar_labels(),
            AppEvent::SwitchFocus => state.switch_focus(),
            AppEvent::SidebarUp => state.sidebar.move_up(),
            AppEvent::SidebarDown => state.sidebar.move_down(),
            AppEvent::SidebarSelect => state.sidebar_activate(),
            AppEvent::DismissToasts => state.toasts.dismiss_all(),
            AppEvent::Navigate(route) => state.navigate(route),
            AppEvent::Page(action) => state.handle_page_action(action),
        }
    }
}
