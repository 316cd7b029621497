// ABOUTME: Help overlay component displaying keyboard shortcuts

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::common::centered_rect;

fn section(title: &'static str) -> ListItem<'static> {
    ListItem::new(title).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
}

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let help_items = vec![
            section("Navigation:"),
            ListItem::new("  ↑/↓        Move between rows and fields"),
            ListItem::new("  ←/→  [ ]   Previous / next filter category"),
            ListItem::new("  Enter      Confirm, continue, open"),
            ListItem::new("  Esc        Back / cancel"),
            ListItem::new("  Tab        Switch focus between sidebar and page"),
            ListItem::new("  1-7        Jump to a sidebar page"),
            ListItem::new("  b          Collapse / expand the sidebar"),
            ListItem::new(""),
            section("Lists:"),
            ListItem::new("  /          Search"),
            ListItem::new("  Backspace  Clear search"),
            ListItem::new("  c / p      Connect with / pass on a buyer"),
            ListItem::new("  a / x      Accept / decline a match request"),
            ListItem::new("  i          Write a message"),
            ListItem::new(""),
            section("Onboarding:"),
            ListItem::new("  Space      Select an option"),
            ListItem::new("  Enter      Continue (when the step is complete)"),
            ListItem::new("  Esc        Previous step"),
            ListItem::new(""),
            section("General:"),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  Esc        Dismiss notifications"),
            ListItem::new("  q          Quit (outside text fields)"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
