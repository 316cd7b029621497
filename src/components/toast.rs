// ABOUTME: Toast overlay drawn in the top-right corner, newest at the bottom

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::{notification_color, MUTED_GRAY, PANEL_BG};
use crate::notify::{NotificationType, Toast};

const TOAST_WIDTH: u16 = 50;
const TOAST_HEIGHT: u16 = 4;

fn icon(kind: NotificationType) -> &'static str {
    match kind {
        NotificationType::Success => "✓ ",
        NotificationType::Error => "✗ ",
        NotificationType::Warning => "⚠ ",
        NotificationType::Info => "ℹ ",
    }
}

pub struct ToastComponent;

impl ToastComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, toasts: &[Toast]) {
        if toasts.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width);
        let fits = (area.height.saturating_sub(1) / TOAST_HEIGHT) as usize;
        // Oldest ones drop off when the screen is full
        let shown = &toasts[toasts.len().saturating_sub(fits)..];

        for (i, toast) in shown.iter().enumerate() {
            let slot = Rect {
                x: area.x + area.width.saturating_sub(width + 1),
                y: area.y + 1 + i as u16 * TOAST_HEIGHT,
                width,
                height: TOAST_HEIGHT,
            };

            let notification = &toast.notification;
            let color = notification_color(notification.notification_type);
            let mut lines = vec![Line::from(vec![
                Span::styled(icon(notification.notification_type), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.title.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])];
            if let Some(description) = &notification.description {
                lines.push(Line::from(Span::styled(description.as_str(), Style::default().fg(MUTED_GRAY))));
            }

            let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(PANEL_BG)),
            );
            frame.render_widget(Clear, slot);
            frame.render_widget(widget, slot);
        }
    }
}

impl Default for ToastComponent {
    fn default() -> Self {
        Self::new()
    }
}
