// ABOUTME: Sidebar navigation for the dashboard-style pages
// Brand header, one row per page with optional badge, signed-in user and log out at the bottom

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER, WARNING_ORANGE,
};
use crate::router::Route;

pub const BRAND: &str = "Caprae Capital";
pub const USER_NAME: &str = "Anne Smith";
pub const USER_ROLE: &str = "Seller Account";

/// Sidebar navigation items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Dashboard,
    Matches,
    Messages,
    Tasks,
    Documents,
    Profile,
    Settings,
    LogOut,
}

impl SidebarItem {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Matches => "♥",
            Self::Messages => "✉",
            Self::Tasks => "✔",
            Self::Documents => "▤",
            Self::Profile => "◉",
            Self::Settings => "⚙",
            Self::LogOut => "⏻",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Matches => "Matches",
            Self::Messages => "Messages",
            Self::Tasks => "Tasks",
            Self::Documents => "Documents",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::LogOut => "Log out",
        }
    }

    /// Fixed counter shown next to the label
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Self::Matches => Some("3"),
            Self::Messages => Some("5"),
            _ => None,
        }
    }

    /// Destination of a navigation item; log out is an action, not a page
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Dashboard => Some(Route::Dashboard),
            Self::Matches => Some(Route::Matches),
            Self::Messages => Some(Route::Messages),
            Self::Tasks => Some(Route::Tasks),
            Self::Documents => Some(Route::Documents),
            Self::Profile => Some(Route::Profile),
            Self::Settings => Some(Route::Settings),
            Self::LogOut => None,
        }
    }

    pub fn for_route(route: &Route) -> Option<SidebarItem> {
        Self::all()
            .iter()
            .copied()
            .find(|item| item.route().as_ref() == Some(route))
    }

    /// Page items in display order; log out is last
    pub fn all() -> &'static [SidebarItem] {
        &[
            Self::Dashboard,
            Self::Matches,
            Self::Messages,
            Self::Tasks,
            Self::Documents,
            Self::Profile,
            Self::Settings,
            Self::LogOut,
        ]
    }
}

#[derive(Debug)]
pub struct SidebarState {
    pub selected_index: usize,
    pub is_focused: bool,
    /// false = icon-only mode
    pub show_labels: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            is_focused: false,
            show_labels: true,
        }
    }

    pub fn selected_item(&self) -> SidebarItem {
        SidebarItem::all()[self.selected_index.min(SidebarItem::all().len() - 1)]
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let max_index = SidebarItem::all().len() - 1;
        if self.selected_index < max_index {
            self.selected_index += 1;
        }
    }

    pub fn select(&mut self, item: SidebarItem) {
        if let Some(index) = SidebarItem::all().iter().position(|&i| i == item) {
            self.selected_index = index;
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    /// `active` is the item whose page is showing; it stays marked while the cursor moves
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &SidebarState, active: Option<SidebarItem>) {
        let border_color = if state.is_focused {
            CORNFLOWER_BLUE
        } else {
            SUBDUED_BORDER
        };

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items = SidebarItem::all();
        let page_items = &items[..items.len() - 1];

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Brand
                Constraint::Length(page_items.len() as u16),
                Constraint::Min(0),
                Constraint::Length(2), // Signed-in user
                Constraint::Length(1), // Log out
            ])
            .split(inner);

        self.render_brand(frame, layout[0], state);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(page_items.iter().map(|_| Constraint::Length(1)))
            .split(layout[1]);
        for (index, item) in page_items.iter().enumerate() {
            self.render_item(frame, rows[index], item, state, index, active == Some(*item));
        }

        self.render_user(frame, layout[3], state);

        let last = items.len() - 1;
        self.render_item(frame, layout[4], &items[last], state, last, false);
    }

    fn render_brand(&self, frame: &mut Frame, area: Rect, state: &SidebarState) {
        let text = if state.show_labels { BRAND } else { "C" };
        let brand = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(text, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        ]))
        .style(Style::default().bg(DARK_BG));
        frame.render_widget(brand, area);
    }

    fn render_user(&self, frame: &mut Frame, area: Rect, state: &SidebarState) {
        let initials = crate::models::initials(USER_NAME);
        let lines = if state.show_labels {
            vec![
                Line::from(vec![
                    Span::styled(format!(" {initials} "), Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)),
                    Span::styled(USER_NAME, Style::default().fg(SOFT_WHITE)),
                ]),
                Line::from(Span::styled(format!("    {USER_ROLE}"), Style::default().fg(MUTED_GRAY))),
            ]
        } else {
            vec![Line::from(Span::styled(
                format!(" {initials}"),
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            ))]
        };
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(DARK_BG)), area);
    }

    fn render_item(
        &self,
        frame: &mut Frame,
        area: Rect,
        item: &SidebarItem,
        state: &SidebarState,
        index: usize,
        is_active: bool,
    ) {
        let is_selected = state.selected_index == index;
        let (indicator, icon_style, label_style, bg_style) = if is_selected && state.is_focused {
            (
                Span::styled("▌", Style::default().fg(SELECTION_GREEN)),
                Style::default().fg(GOLD),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                Style::default().bg(LIST_HIGHLIGHT_BG),
            )
        } else if is_active {
            (
                Span::styled("▌", Style::default().fg(CORNFLOWER_BLUE)),
                Style::default().fg(GOLD),
                Style::default().fg(SOFT_WHITE),
                Style::default().bg(LIST_HIGHLIGHT_BG),
            )
        } else {
            (
                Span::raw(" "),
                Style::default().fg(MUTED_GRAY),
                Style::default().fg(MUTED_GRAY),
                Style::default().bg(DARK_BG),
            )
        };

        let mut spans = vec![indicator, Span::raw(" "), Span::styled(item.icon(), icon_style)];

        if state.show_labels {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(item.label(), label_style));
            if let Some(badge) = item.badge() {
                spans.push(Span::styled(" (", Style::default().fg(MUTED_GRAY)));
                spans.push(Span::styled(badge, Style::default().fg(WARNING_ORANGE)));
                spans.push(Span::styled(")", Style::default().fg(MUTED_GRAY)));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
    }

    pub fn recommended_width(state: &SidebarState) -> u16 {
        if state.show_labels {
            22
        } else {
            5
        }
    }
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_state_navigation() {
        let mut state = SidebarState::new();
        assert_eq!(state.selected_index, 0);

        state.move_down();
        assert_eq!(state.selected_item(), SidebarItem::Matches);

        state.move_up();
        state.move_up();
        assert_eq!(state.selected_index, 0);

        for _ in 0..20 {
            state.move_down();
        }
        assert_eq!(state.selected_item(), SidebarItem::LogOut);
    }

    #[test]
    fn test_badges() {
        assert_eq!(SidebarItem::Matches.badge(), Some("3"));
        assert_eq!(SidebarItem::Messages.badge(), Some("5"));
        assert_eq!(SidebarItem::Tasks.badge(), None);
    }

    #[test]
    fn test_items_map_to_sidebar_routes() {
        for item in SidebarItem::all() {
            match item.route() {
                Some(route) => {
                    assert!(route.shows_sidebar());
                    assert_eq!(SidebarItem::for_route(&route), Some(*item));
                }
                None => assert_eq!(*item, SidebarItem::LogOut),
            }
        }
        assert_eq!(SidebarItem::for_route(&Route::Landing), None);
    }

    #[test]
    fn test_select_specific_item() {
        let mut state = SidebarState::new();
        state.select(SidebarItem::Documents);
        assert_eq!(state.selected_item(), SidebarItem::Documents);
    }
}
