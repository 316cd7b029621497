// ABOUTME: Sign-in form rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::common::{centered_rect, hints, render_header};
use super::theme::{
    CORNFLOWER_BLUE, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};
use crate::pages::sign_in::{SignInField, SignInPage};

pub struct SignInComponent;

impl SignInComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &SignInPage) {
        let card = centered_rect(50, 70, area);
        frame.render_widget(Clear, card);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(1),
                Constraint::Length(1), // Submit
                Constraint::Length(1), // Create account
                Constraint::Min(0),
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        render_header(frame, chunks[0], "Welcome back", "Sign in to your Caprae Capital account");

        self.render_input(frame, chunks[1], "Email", &page.email, "you@company.com", page.focus == SignInField::Email);
        self.render_input(
            frame,
            chunks[2],
            "Password",
            &page.masked_password(),
            "Enter your password",
            page.focus == SignInField::Password,
        );

        let submit_style = match (page.can_submit(), page.focus == SignInField::Submit) {
            (false, _) => Style::default().fg(SUBDUED_BORDER),
            (true, true) => Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (true, false) => Style::default().fg(SELECTION_GREEN),
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[ Sign In ]", submit_style)).alignment(Alignment::Center),
            chunks[4],
        );

        let link_style = if page.focus == SignInField::CreateAccount {
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(CORNFLOWER_BLUE)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Don't have an account? ", Style::default().fg(MUTED_GRAY)),
                Span::styled("Get started", link_style),
            ]))
            .alignment(Alignment::Center),
            chunks[5],
        );

        frame.render_widget(
            Paragraph::new(hints(&[("Tab/↑↓", "Field"), ("Enter", "Submit"), ("Esc", "Back")])),
            chunks[7],
        );
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, label: &str, value: &str, placeholder: &str, focused: bool) {
        let content = if value.is_empty() && !focused {
            Line::from(Span::styled(placeholder, Style::default().fg(MUTED_GRAY)))
        } else if focused {
            Line::from(vec![
                Span::styled(value, Style::default().fg(SOFT_WHITE)),
                Span::styled("█", Style::default().fg(SELECTION_GREEN)),
            ])
        } else {
            Line::from(Span::styled(value, Style::default().fg(SOFT_WHITE)))
        };
        let border = if focused { SELECTION_GREEN } else { SUBDUED_BORDER };
        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(Span::styled(format!(" {label} "), Style::default().fg(MUTED_GRAY))),
        );
        frame.render_widget(input, area);
    }
}

impl Default for SignInComponent {
    fn default() -> Self {
        Self::new()
    }
}
