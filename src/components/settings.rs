// ABOUTME: Settings rendering: profile fields, notification switches, security, billing and preferences

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{hints, marker, panel, render_header, row_style};
use super::theme::{title_style, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER};
use crate::models::NotificationSwitch;
use crate::pages::settings::{SettingsRow, TextSetting, ROWS};
use crate::pages::SettingsPage;

/// Section heading shown above the row it introduces
fn section_before(row: SettingsRow) -> Option<(&'static str, &'static str)> {
    match row {
        SettingsRow::Text(TextSetting::FirstName) => Some((
            "Profile Information",
            "Update your personal information and profile picture.",
        )),
        SettingsRow::Switch(NotificationSwitch::EmailNotifications) => Some((
            "Notifications",
            "Choose what updates you want to receive.",
        )),
        SettingsRow::Switch(NotificationSwitch::ProfileVisibility) => Some((
            "Privacy & Security",
            "Manage your privacy settings and account security.",
        )),
        SettingsRow::Language => Some(("Preferences", "Customize your platform experience.")),
        _ => None,
    }
}

pub struct SettingsComponent;

impl SettingsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &SettingsPage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(4), Constraint::Length(1)])
            .split(area);

        render_header(frame, chunks[0], "Settings", "Manage your account settings and preferences.");

        let mut lines = Vec::new();
        let mut focused_line = 0;
        for (index, row) in ROWS.iter().enumerate() {
            if let Some((title, description)) = section_before(*row) {
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(title, title_style())));
                lines.push(Line::from(Span::styled(description, Style::default().fg(MUTED_GRAY))));
            }
            if *row == SettingsRow::Language {
                self.push_billing(&mut lines);
            }

            let focused = index == page.cursor;
            if focused {
                focused_line = lines.len();
            }
            lines.push(self.row_line(page, *row, focused));
        }

        let visible = chunks[1].height.saturating_sub(2) as usize;
        let scroll = focused_line.saturating_sub(visible.saturating_sub(1)) as u16;
        let body = Paragraph::new(lines).scroll((scroll, 0)).block(panel("Account"));
        frame.render_widget(body, chunks[1]);

        frame.render_widget(
            Paragraph::new(hints(&[
                ("↑↓", "Move"),
                ("Space", "Toggle/cycle"),
                ("Enter", "Save"),
                ("Tab", "Sidebar"),
            ])),
            chunks[2],
        );
    }

    fn push_billing(&self, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(Span::styled("Billing & Subscription", title_style())));
        lines.push(Line::from(vec![
            Span::styled("  Professional Plan ", Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            Span::styled("$49", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled("/month · Billed monthly", Style::default().fg(MUTED_GRAY)),
        ]));
        lines.push(Line::from(""));
    }

    fn row_line(&self, page: &SettingsPage, row: SettingsRow, focused: bool) -> Line<'static> {
        let mut spans = vec![marker(focused)];
        match row {
            SettingsRow::Text(setting) => {
                let raw = page.text(setting);
                let shown = if setting.is_secret() {
                    "•".repeat(raw.chars().count())
                } else {
                    raw.to_string()
                };
                spans.push(Span::styled(format!("{:<22}", setting.label()), Style::default().fg(MUTED_GRAY)));
                spans.push(Span::styled("│ ", Style::default().fg(SUBDUED_BORDER)));
                spans.push(Span::styled(shown, Style::default().fg(SOFT_WHITE)));
                if focused {
                    spans.push(Span::styled("█", Style::default().fg(SELECTION_GREEN)));
                }
            }
            SettingsRow::Switch(switch) => {
                let on = page.settings.switch(switch);
                let (symbol, color) = if on { ("[ON ]", SELECTION_GREEN) } else { ("[OFF]", MUTED_GRAY) };
                spans.push(Span::styled(format!("{symbol} "), Style::default().fg(color).add_modifier(Modifier::BOLD)));
                spans.push(Span::styled(switch.label(), Style::default().fg(SOFT_WHITE)));
                spans.push(Span::styled(format!("  {}", switch.description()), Style::default().fg(MUTED_GRAY)));
            }
            SettingsRow::Language => {
                spans.push(Span::styled(format!("{:<22}", "Language"), Style::default().fg(MUTED_GRAY)));
                spans.push(Span::styled(format!("‹ {} ›", page.settings.language), Style::default().fg(SOFT_WHITE)));
            }
            SettingsRow::Timezone => {
                spans.push(Span::styled(format!("{:<22}", "Timezone"), Style::default().fg(MUTED_GRAY)));
                spans.push(Span::styled(format!("‹ {} ›", page.settings.timezone), Style::default().fg(SOFT_WHITE)));
            }
            SettingsRow::Save => {
                let style = if focused {
                    Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(SELECTION_GREEN)
                };
                spans.push(Span::styled("[ Save Changes ]", style));
            }
        }
        Line::from(spans).style(row_style(focused))
    }
}

impl Default for SettingsComponent {
    fn default() -> Self {
        Self::new()
    }
}
