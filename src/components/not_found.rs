// ABOUTME: Not-found page rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::centered_rect;
use super::theme::{title_style, CORNFLOWER_BLUE, MUTED_GRAY, SOFT_WHITE};
use crate::pages::NotFoundPage;

pub struct NotFoundComponent;

impl NotFoundComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, page: &NotFoundPage) {
        let body = Paragraph::new(vec![
            Line::from(Span::styled("404", title_style())),
            Line::from(""),
            Line::from(Span::styled("Oops! Page not found", Style::default().fg(SOFT_WHITE))),
            Line::from(Span::styled(format!("No page lives at {}", page.path), Style::default().fg(MUTED_GRAY))),
            Line::from(""),
            Line::from(Span::styled(
                "[ Return to Home ]",
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(body, centered_rect(60, 40, area));
    }
}

impl Default for NotFoundComponent {
    fn default() -> Self {
        Self::new()
    }
}
